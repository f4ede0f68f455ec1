//! Version comparison.
//!
//! Every comparison reduces to one primitive: lexicographic comparison of
//! `(major, minor, micro)` triples. A [`Comparand`] selects how much of the
//! triple takes part. Partial comparands *ignore* the trailing components
//! instead of treating them as zero, so `2.5.9` compares equal to
//! `Comparand::Major(2)`.

use std::cmp::Ordering;

use crate::version::Version;

/// The right-hand side of a version comparison.
///
/// # Example
///
/// ```
/// use nv_version::{Comparand, Version};
/// use std::cmp::Ordering;
///
/// let v = Version::new(2, 5, 9);
/// assert_eq!(v.compare_to(Comparand::Major(2)), Ordering::Equal);
/// assert_eq!(v.compare_to((2, 5)), Ordering::Equal);
/// assert_eq!(v.compare_to((2, 5, 10)), Ordering::Less);
/// assert_eq!(v.compare_to(Comparand::Number(2_005_009)), Ordering::Equal);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparand {
    /// Compare the major number only.
    Major(i32),
    /// Compare major and minor, ignoring micro.
    MajorMinor(i32, i32),
    /// Compare all three components.
    Full(i32, i32, i32),
    /// Compare the packed number, see [`Version::number`].
    Number(i64),
    /// Compare all three components against another version.
    Version(Version),
}

impl From<(i32, i32)> for Comparand {
    fn from((major, minor): (i32, i32)) -> Self {
        Comparand::MajorMinor(major, minor)
    }
}

impl From<(i32, i32, i32)> for Comparand {
    fn from((major, minor, micro): (i32, i32, i32)) -> Self {
        Comparand::Full(major, minor, micro)
    }
}

impl From<Version> for Comparand {
    fn from(version: Version) -> Self {
        Comparand::Version(version)
    }
}

impl From<&Version> for Comparand {
    fn from(version: &Version) -> Self {
        Comparand::Version(*version)
    }
}

/// Compares two component sequences of equal length lexicographically.
fn compare_components(lhs: &[i32], rhs: &[i32]) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(l, r)| l.cmp(r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl Version {
    /// Compares this version against any [`Comparand`] shape.
    pub fn compare_to(&self, other: impl Into<Comparand>) -> Ordering {
        match other.into() {
            Comparand::Major(major) => self.compare_major(major),
            Comparand::MajorMinor(major, minor) => self.compare_major_minor(major, minor),
            Comparand::Full(major, minor, micro) => self.compare_full(major, minor, micro),
            Comparand::Number(number) => self.compare_number(number),
            Comparand::Version(version) => self.compare_version(&version),
        }
    }

    /// Compares the major number only.
    pub fn compare_major(&self, major: i32) -> Ordering {
        compare_components(&[self.major()], &[major])
    }

    /// Compares `(major, minor)`, ignoring micro.
    pub fn compare_major_minor(&self, major: i32, minor: i32) -> Ordering {
        compare_components(&[self.major(), self.minor()], &[major, minor])
    }

    /// Compares all three components.
    pub fn compare_full(&self, major: i32, minor: i32, micro: i32) -> Ordering {
        compare_components(
            &[self.major(), self.minor(), self.micro()],
            &[major, minor, micro],
        )
    }

    /// Compares the packed number against `number`.
    pub fn compare_number(&self, number: i64) -> Ordering {
        self.number().cmp(&number)
    }

    /// Compares all three components against another version.
    pub fn compare_version(&self, other: &Version) -> Ordering {
        self.compare_full(other.major(), other.minor(), other.micro())
    }

    // ============================================
    // Predicates
    // ============================================

    /// Returns true if the comparison yields `Equal`.
    pub fn is_equal_to(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_eq()
    }

    /// Returns true if the comparison does not yield `Equal`.
    pub fn is_not_equal_to(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_ne()
    }

    /// Returns true if this version is less than `other`.
    pub fn is_less_than(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_lt()
    }

    /// Returns true if this version is less than or equal to `other`.
    pub fn is_less_than_or_equal_to(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_le()
    }

    /// Returns true if this version is greater than `other`.
    pub fn is_greater_than(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_gt()
    }

    /// Returns true if this version is greater than or equal to `other`.
    pub fn is_greater_than_or_equal_to(&self, other: impl Into<Comparand>) -> bool {
        self.compare_to(other).is_ge()
    }
}
