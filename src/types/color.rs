//! RGB color representation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// An RGB color with red, green, and blue components (0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub(crate) red: u8,
    pub(crate) green: u8,
    pub(crate) blue: u8,
}

impl Color {
    /// Create a color with the given RGB values.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from fractional channels, rounding each to the nearest
    /// integer (exact halves go to the even neighbour).
    ///
    /// Fails if a channel is not finite or rounds outside 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use illumi_led::Color;
    ///
    /// assert_eq!(Color::round(10.4, 20.6, 5.0).unwrap(), Color::rgb(10, 21, 5));
    /// assert!(Color::round(255.6, 0.0, 0.0).is_err());
    /// ```
    pub fn round(red: f64, green: f64, blue: f64) -> Result<Self, Error> {
        Ok(Self {
            red: round_channel("red", red)?,
            green: round_channel("green", green)?,
            blue: round_channel("blue", blue)?,
        })
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }
}

fn round_channel(field: &'static str, value: f64) -> Result<u8, Error> {
    let rounded = value.round_ties_even();
    if rounded.is_finite() && (0.0..=255.0).contains(&rounded) {
        Ok(rounded as u8)
    } else {
        Err(Error::out_of_range(field, value, 0, 255))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse from comma-separated string (e.g., "255,128,0").
    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = s
            .split(',')
            .map(|c| {
                c.trim()
                    .parse::<f64>()
                    .map_err(|_| Error::out_of_range("color", c.trim(), 0, 255))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match parts[..] {
            [r, g, b] => Self::round(r, g, b),
            _ => Err(Error::out_of_range("color", s, 0, 255)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(Color::round(0.5, 2.5, 254.5).unwrap(), Color::rgb(0, 2, 254));
        assert_eq!(Color::round(20.5, 1.5, 1.49).unwrap(), Color::rgb(20, 2, 1));
        assert_eq!(Color::round(10.4, 20.6, 255.4).unwrap(), Color::rgb(10, 21, 255));
    }

    #[test]
    fn test_round_rejects_out_of_range() {
        assert!(Color::round(-0.6, 0.0, 0.0).is_err());
        assert!(Color::round(-0.4, 0.0, 0.0).is_ok());
        assert!(Color::round(-0.5, 0.0, 0.0).is_ok());
        assert!(Color::round(255.5, 0.0, 0.0).is_err());
        assert!(Color::round(f64::NAN, 0.0, 0.0).is_err());
        assert!(Color::round(0.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("255, 128,0".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert!("255,128".parse::<Color>().is_err());
        assert!("a,b,c".parse::<Color>().is_err());
        assert!("256,0,0".parse::<Color>().is_err());
    }
}
