//! Light strip state and the transition function that decides what to send.

use serde::Serialize;

use crate::command::Command;
use crate::types::{
    Brightness, Color, MicMode, MicSensitivity, Mode, Saturation, Scene, Speed, Warmth,
};

/// Everything the client knows about the strip.
///
/// The device cannot be queried, so this is the only copy of the settings. It
/// is rebuilt from defaults whenever a client is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightState {
    pub mode: Mode,
    pub brightness: Brightness,
    pub saturation: Saturation,
    pub warmth: Warmth,
    pub scene: Scene,
    pub speed: Speed,
    pub mic_mode: MicMode,
    pub mic_sensitivity: MicSensitivity,
    pub power: bool,
}

impl LightState {
    pub fn new() -> Self {
        LightState {
            mode: Mode::default(),
            brightness: Brightness::new(),
            saturation: Saturation::new(),
            warmth: Warmth::new(),
            scene: Scene::new(),
            speed: Speed::new(),
            mic_mode: MicMode::new(),
            mic_sensitivity: MicSensitivity::new(),
            // A freshly powered strip is on.
            power: true,
        }
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

/// A single validated change to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Color(Color),
    Mode(Mode),
    Brightness(Brightness),
    Saturation(Saturation),
    Warmth(Warmth),
    Scene(Scene),
    Speed(Speed),
    MicMode(MicMode),
    MicSensitivity(MicSensitivity),
    Power(bool),
    /// Resend everything without changing anything.
    Refresh,
}

/// Result of applying a [`Setting`]: the new state and the commands to send, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: LightState,
    pub commands: Vec<Command>,
}

/// Apply `setting` to `state`.
///
/// Color and mic sensitivity are one-shot: only their own command is emitted.
/// Every other setting re-broadcasts the whole state via [`broadcast`].
/// Setting a color, warmth, scene or mic mode also switches the mode.
pub fn transition(state: &LightState, setting: Setting) -> Transition {
    let mut next = *state;
    match setting {
        Setting::Color(color) => {
            // The rgb command implies the mode on the device side.
            next.mode = Mode::Rgb;
            return Transition {
                state: next,
                commands: vec![Command::Rgb(color)],
            };
        }
        Setting::MicSensitivity(sensitivity) => {
            next.mic_sensitivity = sensitivity;
            return Transition {
                state: next,
                commands: vec![Command::MicSensitivity(sensitivity)],
            };
        }
        Setting::Mode(mode) => next.mode = mode,
        Setting::Brightness(brightness) => next.brightness = brightness,
        Setting::Saturation(saturation) => next.saturation = saturation,
        Setting::Warmth(warmth) => {
            next.mode = Mode::White;
            next.warmth = warmth;
        }
        Setting::Scene(scene) => {
            next.mode = Mode::Scene;
            next.scene = scene;
        }
        Setting::Speed(speed) => next.speed = speed,
        Setting::MicMode(mic_mode) => {
            next.mode = Mode::Mic;
            next.mic_mode = mic_mode;
        }
        Setting::Power(on) => next.power = on,
        Setting::Refresh => {}
    }

    Transition {
        commands: broadcast(&next),
        state: next,
    }
}

/// The full ordered command list for `state`: mode-specific commands, then
/// brightness, then on/off last so an "off" is never overridden.
pub fn broadcast(state: &LightState) -> Vec<Command> {
    let mut commands = match state.mode {
        Mode::Rgb => vec![
            Command::Mode {
                color: state.mode.is_color(),
            },
            Command::Saturation(state.saturation),
        ],
        Mode::White => vec![
            Command::Mode {
                color: state.mode.is_color(),
            },
            Command::Warmth(state.warmth),
        ],
        Mode::Scene => vec![Command::Scene(state.scene), Command::Speed(state.speed)],
        Mode::Mic => vec![Command::Mic(state.mic_mode)],
    };
    commands.push(Command::Brightness(state.brightness));
    commands.push(Command::OnOff(state.power));
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = LightState::new();
        assert_eq!(state.mode, Mode::Rgb);
        assert_eq!(state.brightness.value(), 100);
        assert_eq!(state.saturation.value(), 100);
        assert_eq!(state.warmth.value(), 0);
        assert_eq!(state.scene.id(), 0);
        assert_eq!(state.speed.value(), 100);
        assert_eq!(state.mic_mode.value(), 1);
        assert!(state.power);
    }

    #[test]
    fn test_color_is_one_shot() {
        let mut state = LightState::new();
        state.mode = Mode::Scene;
        let t = transition(&state, Setting::Color(Color::rgb(1, 2, 3)));
        assert_eq!(t.state.mode, Mode::Rgb);
        assert_eq!(t.commands, vec![Command::Rgb(Color::rgb(1, 2, 3))]);
    }

    #[test]
    fn test_mode_scene_broadcast_order() {
        let t = transition(&LightState::new(), Setting::Mode(Mode::Scene));
        assert_eq!(
            t.commands,
            vec![
                Command::Scene(Scene::new()),
                Command::Speed(Speed::new()),
                Command::Brightness(Brightness::new()),
                Command::OnOff(true),
            ]
        );
    }

    #[test]
    fn test_implicit_mode_switches() {
        let state = LightState::new();
        let warmth = Warmth::create(40).unwrap();
        assert_eq!(transition(&state, Setting::Warmth(warmth)).state.mode, Mode::White);
        let scene = Scene::create(3).unwrap();
        assert_eq!(transition(&state, Setting::Scene(scene)).state.mode, Mode::Scene);
        let mic = MicMode::create(2).unwrap();
        assert_eq!(transition(&state, Setting::MicMode(mic)).state.mode, Mode::Mic);
    }

    #[test]
    fn test_speed_and_saturation_keep_mode() {
        let mut state = LightState::new();
        state.mode = Mode::White;
        let t = transition(&state, Setting::Speed(Speed::create(10).unwrap()));
        assert_eq!(t.state.mode, Mode::White);
        let t = transition(&state, Setting::Saturation(Saturation::create(10).unwrap()));
        assert_eq!(t.state.mode, Mode::White);
        assert_eq!(t.state.saturation.value(), 10);
    }

    #[test]
    fn test_broadcast_per_mode() {
        let mut state = LightState::new();
        state.power = false;

        state.mode = Mode::Rgb;
        assert_eq!(broadcast(&state)[..2], [
            Command::Mode { color: true },
            Command::Saturation(state.saturation)
        ]);

        state.mode = Mode::White;
        assert_eq!(broadcast(&state)[..2], [
            Command::Mode { color: false },
            Command::Warmth(state.warmth)
        ]);

        state.mode = Mode::Mic;
        let commands = broadcast(&state);
        assert_eq!(commands, vec![
            Command::Mic(state.mic_mode),
            Command::Brightness(state.brightness),
            Command::OnOff(false),
        ]);
    }

    #[test]
    fn test_power_off_is_last_word() {
        let t = transition(&LightState::new(), Setting::Power(false));
        assert_eq!(t.commands.last(), Some(&Command::OnOff(false)));
        assert_eq!(
            t.commands[t.commands.len() - 2],
            Command::Brightness(Brightness::new())
        );
    }

    #[test]
    fn test_mic_sensitivity_is_one_shot() {
        let sensitivity = MicSensitivity::create(50).unwrap();
        let t = transition(&LightState::new(), Setting::MicSensitivity(sensitivity));
        assert_eq!(t.state.mode, Mode::Rgb);
        assert_eq!(t.commands, vec![Command::MicSensitivity(sensitivity)]);
    }

    #[test]
    fn test_refresh_keeps_state() {
        let state = LightState::new();
        let t = transition(&state, Setting::Refresh);
        assert_eq!(t.state, state);
        assert_eq!(t.commands, broadcast(&state));
    }
}
