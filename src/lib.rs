#![warn(
    missing_docs,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

//! Parses `major.minor.patch` version strings into [`Version`](version::Version)
//! values and orders them.
//!
//! ```
//! use semantic_version::prelude::*;
//!
//! let old = Version::parse("1.2.3")?;
//! let new = Version::parse("v1.3")?;
//! assert!(old < new);
//! assert_eq!(new.to_components(), [1, 3, 0]);
//!
//! assert!(matches!(
//!     Version::parse("4.5.6.7"),
//!     Err(InvalidVersion::TooManyComponents(_))
//! ));
//! # Ok::<(), InvalidVersion>(())
//! ```

pub mod error;
pub mod parse;
pub mod version;

#[cfg(feature = "serde-serialize")]
mod serde;

#[cfg(test)]
mod test_util;

pub mod prelude {
    //! Re-exports everything needed to parse and compare versions.
    pub use crate::error::InvalidVersion;
    pub use crate::parse::parse_components;
    pub use crate::version::Version;
}
