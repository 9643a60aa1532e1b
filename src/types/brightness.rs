//! Strip brightness.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// Brightness level from 0 to 100 percent.
///
/// Unlike saturation, brightness is sent to the firmware as-is (not inverted).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-100).
    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for Brightness {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("brightness", value, Self::MIN, Self::MAX).map(|value| Brightness { value })
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> u8 {
        brightness.value
    }
}
