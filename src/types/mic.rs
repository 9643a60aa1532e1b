//! Microphone-reactive settings.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// One of the four microphone-reactive patterns (1-4).
///
/// # Examples
///
/// ```
/// use illumi_led::MicMode;
///
/// assert_eq!(MicMode::new().value(), 1);
/// assert!(MicMode::create(0).is_none());
/// assert!(MicMode::create(4).is_some());
/// assert!(MicMode::create(5).is_none());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct MicMode {
    pub(crate) value: u8,
}

impl MicMode {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new() -> Self {
        MicMode { value: Self::MIN }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Default for MicMode {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for MicMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("mic mode", value, Self::MIN, Self::MAX).map(|value| MicMode { value })
    }
}

impl From<MicMode> for u8 {
    fn from(mode: MicMode) -> u8 {
        mode.value
    }
}

/// Microphone sensitivity from 0 to 100 percent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct MicSensitivity {
    pub(crate) value: u8,
}

impl MicSensitivity {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new() -> Self {
        MicSensitivity { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn create(value: u8) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl Default for MicSensitivity {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<u8> for MicSensitivity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        check_range("mic sensitivity", value, Self::MIN, Self::MAX)
            .map(|value| MicSensitivity { value })
    }
}

impl From<MicSensitivity> for u8 {
    fn from(sensitivity: MicSensitivity) -> u8 {
        sensitivity.value
    }
}
