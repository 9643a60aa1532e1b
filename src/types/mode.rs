//! Operating modes of the light strip.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::errors::Error;

/// The mutually exclusive operating modes of the strip.
///
/// The discriminant is the mode's canonical integer code. Besides the variant
/// itself, a mode can only be obtained from that code or from its name.
///
/// # Examples
///
/// ```
/// use illumi_led::Mode;
///
/// assert_eq!(Mode::try_from(2u8).unwrap(), Mode::Scene);
/// assert_eq!("white".parse::<Mode>().unwrap(), Mode::White);
/// assert_eq!("3".parse::<Mode>().unwrap(), Mode::Mic);
/// assert!(Mode::try_from(4u8).is_err());
/// ```
#[derive(
    Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Solid color with saturation control
    #[default]
    Rgb = 0,
    /// Tunable white
    White = 1,
    /// Built-in animated scene
    Scene = 2,
    /// Microphone-reactive pattern
    Mic = 3,
}

impl Mode {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Whether the firmware treats this mode as a color (as opposed to white) mode.
    pub fn is_color(&self) -> bool {
        !matches!(self, Mode::White)
    }
}

impl TryFrom<i64> for Mode {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Error> {
        Mode::iter()
            .find(|mode| i64::from(mode.code()) == code)
            .ok_or_else(|| Error::invalid_mode(code))
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        Mode::try_from(i64::from(code))
    }
}

impl TryFrom<i32> for Mode {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Error> {
        Mode::try_from(i64::from(code))
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Parse from a mode name (`"rgb"`, `"white"`, `"scene"`, `"mic"`, any case)
    /// or from the integer code.
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Mode::try_from(code);
        }
        Mode::iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_mode(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for mode in Mode::iter() {
            assert_eq!(Mode::try_from(i64::from(mode.code())).unwrap(), mode);
        }
    }

    #[test]
    fn test_rejects_unknown_codes() {
        assert_eq!(Mode::try_from(-1i64), Err(Error::invalid_mode(-1)));
        assert_eq!(Mode::try_from(4u8), Err(Error::invalid_mode(4)));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("RGB".parse::<Mode>().unwrap(), Mode::Rgb);
        assert_eq!(" Scene ".parse::<Mode>().unwrap(), Mode::Scene);
        assert_eq!("0".parse::<Mode>().unwrap(), Mode::Rgb);
        assert!("disco".parse::<Mode>().is_err());
        assert!("7".parse::<Mode>().is_err());
    }

    #[test]
    fn test_only_white_is_not_color() {
        assert!(Mode::Rgb.is_color());
        assert!(!Mode::White.is_color());
    }
}
