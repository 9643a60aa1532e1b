//! Color saturation for RGB mode.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// Color saturation from 0 to 100 percent.
///
/// Only meaningful in [`Mode::Rgb`](crate::Mode::Rgb). The firmware expects the
/// inverted value, see [`Saturation::inverted`].
///
/// # Examples
///
/// ```
/// use illumi_led::Saturation;
///
/// assert_eq!(Saturation::new().value(), 100);
/// assert_eq!(Saturation::create(30).unwrap().inverted(), 70);
/// assert!(Saturation::create(101).is_none());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Saturation {
    pub(crate) value: u8,
}

impl Saturation {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Create a new Saturation with the default value (fully saturated).
    pub fn new() -> Self {
        Saturation { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// `100 - value`, the form the firmware works with.
    pub fn inverted(&self) -> u8 {
        Self::MAX - self.value
    }

    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Default for Saturation {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Saturation {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("saturation", value, Self::MIN, Self::MAX).map(|value| Saturation { value })
    }
}

impl From<Saturation> for u8 {
    fn from(saturation: Saturation) -> u8 {
        saturation.value
    }
}
