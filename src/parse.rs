//! Turns a version string into its `[major, minor, patch]` components.
//!
//! Parsing happens in two stages. A pattern search finds the first
//! `N`, `N.N` or `N.N.N` run anywhere in the input; whatever precedes it is
//! ignored. The text right after that run is then checked for a fourth
//! numeric segment, which the pattern alone would silently skip.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{InvalidVersion, Result};

static COMPONENTS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?").expect("component pattern is valid")
});

/// Parses `input` into `[major, minor, patch]`.
///
/// Missing `minor` and `patch` components default to `0`. Leading zeros are
/// read as plain decimal, so `"2016.01.03"` yields `[2016, 1, 3]`.
///
/// # Errors
/// - [`InvalidVersion::NonNumeric`] if `input` contains no decimal digit.
/// - [`InvalidVersion::TooManyComponents`] if `major.minor.patch` is followed by
///   another `.` and digit.
/// - [`InvalidVersion::ComponentOverflow`] if a component does not fit in a `u64`.
pub fn parse_components(input: &str) -> Result<[u64; 3]> {
    let captures = match COMPONENTS_RE.captures(input) {
        Some(captures) => captures,
        None => {
            log::debug!("Rejected version `{}`: no numeric component", input);
            return Err(InvalidVersion::NonNumeric(input.to_owned()));
        }
    };

    // group 0 always participates in a match
    let end = captures.get(0).map_or(input.len(), |m| m.end());
    if has_numeric_segment(&input[end..]) {
        log::debug!("Rejected version `{}`: more than three components", input);
        return Err(InvalidVersion::TooManyComponents(input.to_owned()));
    }

    let components = [
        component(input, &captures, 1)?,
        component(input, &captures, 2)?,
        component(input, &captures, 3)?,
    ];
    log::trace!("Parsed version `{}` as {:?}", input, components);

    Ok(components)
}

/// `true` if `rest` opens with a dot-separated run of digits.
fn has_numeric_segment(rest: &str) -> bool {
    rest.strip_prefix('.')
        .map_or(false, |segment| segment.starts_with(|c: char| c.is_ascii_digit()))
}

fn component(input: &str, captures: &Captures<'_>, group: usize) -> Result<u64> {
    match captures.get(group) {
        Some(digits) => digits.as_str().parse().map_err(|_| {
            log::debug!(
                "Rejected version `{}`: component `{}` overflows",
                input,
                digits.as_str()
            );
            InvalidVersion::ComponentOverflow(input.to_owned())
        }),
        None => Ok(0),
    }
}
