//! Value types for light strip settings.
//!
//! Every ranged setting is a newtype whose constructors are the only place a
//! raw number is checked. Once built, a value is always inside its range.

mod brightness;
mod color;
mod mic;
mod mode;
mod saturation;
mod scene;
mod speed;
mod warmth;

pub use brightness::Brightness;
pub use color::Color;
pub use mic::{MicMode, MicSensitivity};
pub use mode::Mode;
pub use saturation::Saturation;
pub use scene::Scene;
pub use speed::Speed;
pub use warmth::Warmth;

use crate::errors::Error;

/// Checks `value` against an inclusive range, naming `field` in the error.
pub(crate) fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<u8, Error> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::out_of_range(field, value, min.into(), max.into()))
    }
}
