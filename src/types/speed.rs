//! Animation speed for scenes.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// Animation speed for scenes, with valid values from 0 to 100 percent.
///
/// Speed only affects [`Mode::Scene`](crate::Mode::Scene); it is remembered and
/// re-sent in the other modes but has no visible effect there.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Speed {
    pub(crate) value: u8,
}

impl Speed {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Create a new Speed with the default value (full speed).
    ///
    /// # Examples
    ///
    /// ```
    /// use illumi_led::Speed;
    ///
    /// assert_eq!(Speed::new().value(), 100);
    /// ```
    pub fn new() -> Self {
        Speed { value: Self::MAX }
    }

    /// Get the speed value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Create a new Speed with the given value.
    ///
    /// Returns `None` if value is outside the valid range (0-100).
    ///
    /// # Examples
    ///
    /// ```
    /// use illumi_led::Speed;
    ///
    /// assert!(Speed::create(0).is_some());
    /// assert!(Speed::create(100).is_some());
    /// assert!(Speed::create(101).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Speed {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("speed", value, Self::MIN, Self::MAX).map(|value| Speed { value })
    }
}

impl From<Speed> for u8 {
    fn from(speed: Speed) -> u8 {
        speed.value
    }
}
