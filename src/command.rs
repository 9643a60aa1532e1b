//! Binary command encoding for the strip firmware.
//!
//! Every frame starts with the sync byte `0x5A`, followed by an opcode, a
//! sub-opcode and a payload. There is no length prefix or checksum, and the
//! firmware never answers, so a wrong byte here goes unnoticed on the wire.
//!
//! Multi-byte fields are produced by [`remap`]: a linear rescale truncated to an
//! integer and packed as a little-endian `u16`.

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};

use crate::types::{
    Brightness, Color, MicMode, MicSensitivity, Saturation, Scene, Speed, Warmth,
};

/// Sync byte leading every frame.
pub const SYNC: u8 = 0x5A;

const WARMTH_RANGE: (f64, f64) = (0x040D as f64, 0x1AC0 as f64);
const LEVEL_RANGE: (f64, f64) = (0.0, 0x0FFF as f64);
const SPEED_RANGE: (f64, f64) = (0.0, 0x00FF as f64);

/// Linearly rescale `value` from `[in_min, in_max]` to `[out_min, out_max]`,
/// truncate toward zero and pack the result as a little-endian `u16`.
///
/// # Examples
///
/// ```
/// use illumi_led::command::remap;
///
/// assert_eq!(remap(0.0, 0.0, 100.0, 0.0, 4095.0), [0x00, 0x00]);
/// assert_eq!(remap(50.0, 0.0, 100.0, 0.0, 4095.0), 2047u16.to_le_bytes());
/// assert_eq!(remap(100.0, 0.0, 100.0, 0.0, 4095.0), [0xFF, 0x0F]);
/// ```
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> [u8; 2] {
    let scaled = (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
    // `as` truncates toward zero and saturates at the u16 bounds.
    (scaled.trunc() as u16).to_le_bytes()
}

fn remap_percent(value: u8, (out_min, out_max): (f64, f64)) -> [u8; 2] {
    remap(f64::from(value), 0.0, 100.0, out_min, out_max)
}

fn frame(header: &[u8], payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(header.len() + payload.len() + 1);
    buf.put_u8(SYNC);
    buf.put_slice(header);
    buf.put_slice(payload);
    buf.freeze()
}

/// Solid color. Implies RGB mode on the device.
pub fn rgb_cmd(color: Color) -> Bytes {
    frame(&[0x07, 0x01], &[color.red, color.green, color.blue])
}

/// Switch between color mode and white mode.
///
/// The two payloads are structurally different.
pub fn mode_cmd(color: bool) -> Bytes {
    if color {
        frame(&[0x07, 0xF4], &[])
    } else {
        frame(&[0x06, 0xF2], &[0xE8, 0x03])
    }
}

pub fn warmth_cmd(warmth: Warmth) -> Bytes {
    frame(&[0x06, 0x01], &remap_percent(warmth.value, WARMTH_RANGE))
}

pub fn brightness_cmd(brightness: Brightness) -> Bytes {
    frame(&[0x03, 0x01], &remap_percent(brightness.value, LEVEL_RANGE))
}

/// Saturation is sent inverted, once as a raw byte and once remapped.
pub fn saturation_cmd(saturation: Saturation) -> Bytes {
    let inverted = saturation.inverted();
    let mut payload = vec![0x00, inverted];
    payload.extend_from_slice(&remap_percent(inverted, LEVEL_RANGE));
    frame(&[0x07, 0x03], &payload)
}

pub fn on_off_cmd(on: bool) -> Bytes {
    frame(&[0x01, 0x02], &[if on { 0xFF } else { 0x00 }])
}

pub fn scene_cmd(scene: Scene) -> Bytes {
    frame(&[0x04, 0x01], &[scene.id])
}

pub fn speed_cmd(speed: Speed) -> Bytes {
    let mut payload = vec![speed.value, 0x00];
    payload.extend_from_slice(&remap_percent(speed.value, SPEED_RANGE));
    frame(&[0x04, 0x04], &payload)
}

pub fn mic_cmd(mode: MicMode) -> Bytes {
    frame(&[0x09, 0x03], &[mode.value])
}

pub fn mic_sensitivity_cmd(sensitivity: MicSensitivity) -> Bytes {
    frame(&[0x09, 0x01], &remap_percent(sensitivity.value, LEVEL_RANGE))
}

/// A single validated command, one variant per command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rgb(Color),
    Mode { color: bool },
    Warmth(Warmth),
    Brightness(Brightness),
    Saturation(Saturation),
    OnOff(bool),
    Scene(Scene),
    Speed(Speed),
    Mic(MicMode),
    MicSensitivity(MicSensitivity),
}

impl Command {
    /// Encode to the exact bytes the firmware expects.
    pub fn encode(&self) -> Bytes {
        match *self {
            Command::Rgb(color) => rgb_cmd(color),
            Command::Mode { color } => mode_cmd(color),
            Command::Warmth(warmth) => warmth_cmd(warmth),
            Command::Brightness(brightness) => brightness_cmd(brightness),
            Command::Saturation(saturation) => saturation_cmd(saturation),
            Command::OnOff(on) => on_off_cmd(on),
            Command::Scene(scene) => scene_cmd(scene),
            Command::Speed(speed) => speed_cmd(speed),
            Command::Mic(mode) => mic_cmd(mode),
            Command::MicSensitivity(sensitivity) => mic_sensitivity_cmd(sensitivity),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Rgb(_) => "rgb",
            Command::Mode { .. } => "mode",
            Command::Warmth(_) => "warmth",
            Command::Brightness(_) => "brightness",
            Command::Saturation(_) => "saturation",
            Command::OnOff(_) => "on_off",
            Command::Scene(_) => "scene",
            Command::Speed(_) => "speed",
            Command::Mic(_) => "mic",
            Command::MicSensitivity(_) => "mic_sensitivity",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Rgb(c) => write!(f, "rgb({},{},{})", c.red, c.green, c.blue),
            Command::Mode { color } => write!(f, "mode({})", if *color { "color" } else { "white" }),
            Command::Warmth(w) => write!(f, "warmth({})", w.value),
            Command::Brightness(b) => write!(f, "brightness({})", b.value),
            Command::Saturation(s) => write!(f, "saturation({})", s.value),
            Command::OnOff(on) => write!(f, "on_off({on})"),
            Command::Scene(s) => write!(f, "scene({})", s.id),
            Command::Speed(s) => write!(f, "speed({})", s.value),
            Command::Mic(m) => write!(f, "mic({})", m.value),
            Command::MicSensitivity(s) => write!(f, "mic_sensitivity({})", s.value),
        }
    }
}

/// Lowercase hex with no separators, as used in logs and history entries.
pub fn to_hex(frame: &[u8]) -> String {
    frame.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(frame: &Bytes) -> u16 {
        let n = frame.len();
        u16::from_le_bytes([frame[n - 2], frame[n - 1]])
    }

    #[test]
    fn test_remap_endpoints_and_monotonic() {
        for (lo, hi) in [(0x040D, 0x1AC0), (0, 0x0FFF), (0, 0x00FF)] {
            let (a, b) = (lo as f64, hi as f64);
            assert_eq!(u16::from_le_bytes(remap(0.0, 0.0, 100.0, a, b)), lo);
            assert_eq!(u16::from_le_bytes(remap(100.0, 0.0, 100.0, a, b)), hi);

            let mut previous = 0;
            for v in 0..=100 {
                let current = u16::from_le_bytes(remap(f64::from(v), 0.0, 100.0, a, b));
                assert!(current >= previous);
                previous = current;
            }
        }
    }

    #[test]
    fn test_remap_truncates() {
        // 1 * 4095 / 100 = 40.95
        assert_eq!(remap(1.0, 0.0, 100.0, 0.0, 4095.0), [40, 0]);
        // 99 * 255 / 100 = 252.45
        assert_eq!(remap(99.0, 0.0, 100.0, 0.0, 255.0), [252, 0]);
    }

    #[test]
    fn test_rgb_cmd() {
        assert_eq!(
            &rgb_cmd(Color::rgb(10, 21, 5))[..],
            &[0x5A, 0x07, 0x01, 10, 21, 5]
        );
    }

    #[test]
    fn test_mode_cmd() {
        assert_eq!(&mode_cmd(true)[..], &[0x5A, 0x07, 0xF4]);
        assert_eq!(&mode_cmd(false)[..], &[0x5A, 0x06, 0xF2, 0xE8, 0x03]);
    }

    #[test]
    fn test_warmth_cmd() {
        let cold = warmth_cmd(Warmth::create(0).unwrap());
        assert_eq!(&cold[..], &[0x5A, 0x06, 0x01, 0x0D, 0x04]);
        assert_eq!(tail(&warmth_cmd(Warmth::create(100).unwrap())), 0x1AC0);
        // 0x040D + 50 * (0x1AC0 - 0x040D) / 100 = 1037 + 2905.5
        assert_eq!(tail(&warmth_cmd(Warmth::create(50).unwrap())), 3942);
    }

    #[test]
    fn test_brightness_cmd_not_inverted() {
        assert_eq!(
            &brightness_cmd(Brightness::create(0).unwrap())[..],
            &[0x5A, 0x03, 0x01, 0x00, 0x00]
        );
        assert_eq!(
            &brightness_cmd(Brightness::new())[..],
            &[0x5A, 0x03, 0x01, 0xFF, 0x0F]
        );
    }

    #[test]
    fn test_saturation_cmd_inverted_twice() {
        let unsaturated = saturation_cmd(Saturation::create(0).unwrap());
        assert_eq!(&unsaturated[..], &[0x5A, 0x07, 0x03, 0x00, 100, 0xFF, 0x0F]);

        let saturated = saturation_cmd(Saturation::create(100).unwrap());
        assert_eq!(&saturated[..], &[0x5A, 0x07, 0x03, 0x00, 0, 0x00, 0x00]);

        let partial = saturation_cmd(Saturation::create(75).unwrap());
        assert_eq!(partial[4], 25);
        assert_eq!(tail(&partial), 1023);
    }

    #[test]
    fn test_on_off_cmd() {
        assert_eq!(&on_off_cmd(true)[..], &[0x5A, 0x01, 0x02, 0xFF]);
        assert_eq!(&on_off_cmd(false)[..], &[0x5A, 0x01, 0x02, 0x00]);
    }

    #[test]
    fn test_scene_cmd() {
        assert_eq!(
            &scene_cmd(Scene::create(9).unwrap())[..],
            &[0x5A, 0x04, 0x01, 0x09]
        );
    }

    #[test]
    fn test_speed_cmd() {
        assert_eq!(
            &speed_cmd(Speed::new())[..],
            &[0x5A, 0x04, 0x04, 100, 0x00, 0xFF, 0x00]
        );
        assert_eq!(
            &speed_cmd(Speed::create(50).unwrap())[..],
            &[0x5A, 0x04, 0x04, 50, 0x00, 127, 0x00]
        );
    }

    #[test]
    fn test_mic_cmds() {
        assert_eq!(
            &mic_cmd(MicMode::create(4).unwrap())[..],
            &[0x5A, 0x09, 0x03, 0x04]
        );
        assert_eq!(
            &mic_sensitivity_cmd(MicSensitivity::create(100).unwrap())[..],
            &[0x5A, 0x09, 0x01, 0xFF, 0x0F]
        );
    }

    #[test]
    fn test_every_frame_starts_with_sync() {
        let commands = [
            Command::Rgb(Color::default()),
            Command::Mode { color: false },
            Command::Warmth(Warmth::new()),
            Command::Brightness(Brightness::new()),
            Command::Saturation(Saturation::new()),
            Command::OnOff(true),
            Command::Scene(Scene::new()),
            Command::Speed(Speed::new()),
            Command::Mic(MicMode::new()),
            Command::MicSensitivity(MicSensitivity::new()),
        ];
        for command in commands {
            assert_eq!(command.encode()[0], SYNC, "{command}");
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&on_off_cmd(true)), "5a0102ff");
    }
}
