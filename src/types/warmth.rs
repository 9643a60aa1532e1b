//! White color temperature.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// Warmth of the white channel, from 0 (coolest) to 100 (warmest).
///
/// Setting a warmth puts the strip in [`Mode::White`](crate::Mode::White).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Warmth {
    pub(crate) value: u8,
}

impl Warmth {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Create a new Warmth with the default value (0).
    ///
    /// # Examples
    ///
    /// ```
    /// use illumi_led::Warmth;
    ///
    /// assert_eq!(Warmth::new().value(), 0);
    /// ```
    pub fn new() -> Self {
        Warmth { value: Self::MIN }
    }

    /// Get the warmth value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Warmth with the given value.
    ///
    /// Returns `None` if value is outside the valid range (0-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use illumi_led::Warmth;
    ///
    /// assert!(Warmth::create(0).is_some());
    /// assert!(Warmth::create(100).is_some());
    /// assert!(Warmth::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl TryFrom<u8> for Warmth {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("warmth", value, Self::MIN, Self::MAX).map(|value| Warmth { value })
    }
}

impl From<Warmth> for u8 {
    fn from(warmth: Warmth) -> u8 {
        warmth.value
    }
}
