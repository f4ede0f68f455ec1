//! The `Version` value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Radix used to pack a version into a single integer.
///
/// `number = major * NUMBER_RADIX^2 + minor * NUMBER_RADIX + micro`.
/// The packing only preserves ordering while `minor` and `micro` stay in
/// `0..NUMBER_RADIX`.
pub const NUMBER_RADIX: i64 = 1000;

/// Version information made of a major, a minor and a micro number.
///
/// Versions are ordered lexicographically by `(major, minor, micro)`.
/// Components are stored as given; negative values are accepted.
///
/// # Example
///
/// ```
/// use nv_version::Version;
///
/// let mut v = Version::new(1, 2, 3);
/// assert_eq!(v.to_string(), "1.2.3");
/// assert_eq!(v.number(), 1_002_003);
///
/// v.set_minor_micro(4, 0);
/// assert_eq!(v, Version::new(1, 4, 0));
/// ```
///
/// Serialized as its canonical string, e.g. `"1.4.0"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: i32,
    minor: i32,
    micro: i32,
}

impl Version {
    /// Creates a version from all three components.
    pub const fn new(major: i32, minor: i32, micro: i32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Creates `major.0.0`.
    pub const fn from_major(major: i32) -> Self {
        Self::new(major, 0, 0)
    }

    /// Creates `major.minor.0`.
    pub const fn from_major_minor(major: i32, minor: i32) -> Self {
        Self::new(major, minor, 0)
    }

    // ============================================
    // Getters
    // ============================================

    /// Returns the major number.
    pub const fn major(&self) -> i32 {
        self.major
    }

    /// Returns the minor number.
    pub const fn minor(&self) -> i32 {
        self.minor
    }

    /// Returns the micro number.
    pub const fn micro(&self) -> i32 {
        self.micro
    }

    /// Returns the components as a `(major, minor, micro)` tuple.
    pub const fn as_tuple(&self) -> (i32, i32, i32) {
        (self.major, self.minor, self.micro)
    }

    /// Returns the version packed into a single integer.
    ///
    /// Comparing packed numbers is equivalent to comparing versions as long
    /// as `minor` and `micro` are within `0..NUMBER_RADIX`. Outside that
    /// range the value is still computed but no longer order-preserving.
    ///
    /// ```
    /// use nv_version::Version;
    ///
    /// assert_eq!(Version::new(10, 20, 30).number(), 10_020_030);
    /// ```
    pub const fn number(&self) -> i64 {
        self.major as i64 * NUMBER_RADIX * NUMBER_RADIX
            + self.minor as i64 * NUMBER_RADIX
            + self.micro as i64
    }

    // ============================================
    // Setters
    // ============================================

    /// Sets the major number.
    pub fn set_major(&mut self, major: i32) {
        self.major = major;
    }

    /// Sets the minor number.
    pub fn set_minor(&mut self, minor: i32) {
        self.minor = minor;
    }

    /// Sets the micro number.
    pub fn set_micro(&mut self, micro: i32) {
        self.micro = micro;
    }

    /// Sets the major and minor numbers, leaving micro unchanged.
    pub fn set_major_minor(&mut self, major: i32, minor: i32) {
        self.major = major;
        self.minor = minor;
    }

    /// Sets all three components.
    pub fn set_major_minor_micro(&mut self, major: i32, minor: i32, micro: i32) {
        *self = Self::new(major, minor, micro);
    }

    /// Sets the minor and micro numbers, leaving major unchanged.
    pub fn set_minor_micro(&mut self, minor: i32, micro: i32) {
        self.minor = minor;
        self.micro = micro;
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl From<(i32,)> for Version {
    fn from((major,): (i32,)) -> Self {
        Self::from_major(major)
    }
}

impl From<(i32, i32)> for Version {
    fn from((major, minor): (i32, i32)) -> Self {
        Self::from_major_minor(major, minor)
    }
}

impl From<(i32, i32, i32)> for Version {
    fn from((major, minor, micro): (i32, i32, i32)) -> Self {
        Self::new(major, minor, micro)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
