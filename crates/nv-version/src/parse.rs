//! Parsing versions from dotted strings.
//!
//! Accepted input is one to three `.`-separated integers, e.g. `"1"`,
//! `"1.2"` or `"1.2.3"`. Missing trailing components default to 0.
//! Anything else is rejected with [`VersionError::Format`]; parsing never
//! falls back to a zeroed version.

use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Result, VersionError};
use crate::version::Version;

const COMPONENT_NAMES: [&str; 3] = ["major", "minor", "micro"];

impl Version {
    /// Parses a version from a dotted string.
    ///
    /// Surrounding ASCII whitespace is ignored. Each component must be a valid
    /// `i32`; empty components and more than three components are errors.
    ///
    /// # Example
    ///
    /// ```
    /// use nv_version::Version;
    ///
    /// assert_eq!(Version::parse("1.2").unwrap(), Version::new(1, 2, 0));
    /// assert!(Version::parse("1.2.3.4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let result = parse_components(text);

        match &result {
            Ok(version) => trace!("Parsed version '{}' as {}", text, version),
            Err(e) => debug!("Rejected version string: {}", e),
        }

        result
    }
}

fn parse_components(text: &str) -> Result<Version> {
    let trimmed = text.trim_ascii();
    if trimmed.is_empty() {
        return Err(VersionError::format(text, "empty version string"));
    }

    let mut components = [0i32; 3];
    for (index, segment) in trimmed.split('.').enumerate() {
        let Some(name) = COMPONENT_NAMES.get(index) else {
            return Err(VersionError::format(
                text,
                "too many components, expected at most major.minor.micro",
            ));
        };

        if segment.is_empty() {
            return Err(VersionError::format(
                text,
                format!("{} component is empty", name),
            ));
        }

        components[index] = segment.parse::<i32>().map_err(|e| {
            VersionError::format_with_cause(
                text,
                format!("{} component '{}' is not a valid integer", name, segment),
                e,
            )
        })?;
    }

    let [major, minor, micro] = components;
    Ok(Version::new(major, minor, micro))
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}
