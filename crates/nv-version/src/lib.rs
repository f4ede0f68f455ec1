//! NV Version - major.minor.micro version information
//!
//! This crate provides a single value type, [`Version`], which can be built
//! from integers or parsed from a dotted string, formatted back to its
//! canonical `"major.minor.micro"` form, and compared against other
//! versions or partial component tuples.
//!
//! # Example
//!
//! ```
//! use nv_version::{Comparand, Version};
//!
//! let v: Version = "6.1".parse()?;
//! assert_eq!(v.to_string(), "6.1.0");
//! assert!(v.is_greater_than_or_equal_to((6, 0)));
//! assert!(v.is_equal_to(Comparand::Major(6)));
//! # Ok::<(), nv_version::VersionError>(())
//! ```

pub mod compare;
pub mod error;
mod parse;
mod version;

pub use compare::Comparand;
pub use error::{Result, VersionError};
pub use version::{NUMBER_RADIX, Version};
