//! Contains the [`Version`] struct.
//!
//! See the struct level documentation [`Version`].

use std::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use crate::{
    error::{InvalidVersion, Result},
    parse::parse_components,
};

/// An immutable `major.minor.patch` version.
///
/// A [`Version`] can only be obtained by parsing a string, see
/// [`Version::parse()`]. Versions are ordered lexicographically by
/// `(major, minor, patch)`.
///
/// # Version compatibility
/// Version `a` is deemed compatible to version `b`, if
/// - `a.major() == b.major()` and
/// - `a.minor() >= b.minor()`
#[derive(Debug, Clone, Copy)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl Version {
    /// Parses a [`Version`] from strings such as `"1"`, `"1.2"`, `"v1.2.3"` or `"2016.01.03"`.
    ///
    /// See [`parse_components()`] for the accepted grammar.
    ///
    /// # Errors
    /// Returns the [`InvalidVersion`] produced by [`parse_components()`].
    pub fn parse(input: &str) -> Result<Self> {
        let [major, minor, patch] = parse_components(input)?;
        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// Returns the `major` number.
    pub const fn major(&self) -> u64 {
        self.major
    }
    /// Returns the `minor` number.
    pub const fn minor(&self) -> u64 {
        self.minor
    }
    /// Returns the `patch` number.
    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns `[major, minor, patch]`.
    pub const fn to_components(&self) -> [u64; 3] {
        [self.major, self.minor, self.patch]
    }

    /// Checks whether `self` is at least `minimum`.
    pub fn satisfies(&self, minimum: &Self) -> bool {
        self >= minimum
    }

    /// Checks whether `self` is compatible to the [`Version`] specified in `other`.
    ///
    /// For compatibility rules, see [`Version`].
    pub const fn compatible_with(&self, other: &Self) -> bool {
        self.major == other.major && self.minor >= other.minor
    }

    /// Walks both component lists in order and returns `less` or `greater` for the first
    /// pair that differs, or `equal` if none does.
    ///
    /// Every comparison operator on [`Version`] goes through here.
    fn relate<T>(&self, other: &Self, less: T, greater: T, equal: T) -> T {
        for (lhs, rhs) in self.to_components().iter().zip(other.to_components().iter()) {
            if lhs < rhs {
                return less;
            }
            if lhs > rhs {
                return greater;
            }
        }
        equal
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.relate(other, false, false, true)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_components().hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.relate(other, Ordering::Less, Ordering::Greater, Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.relate(other, true, false, false)
    }

    fn le(&self, other: &Self) -> bool {
        self.relate(other, true, false, true)
    }

    fn gt(&self, other: &Self) -> bool {
        self.relate(other, false, true, false)
    }

    fn ge(&self, other: &Self) -> bool {
        self.relate(other, false, true, true)
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersion;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Version> for [u64; 3] {
    fn from(version: Version) -> Self {
        version.to_components()
    }
}

impl From<Version> for (u64, u64, u64) {
    fn from(version: Version) -> Self {
        (version.major, version.minor, version.patch)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
