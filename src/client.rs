//! The state-holding light strip client.

use std::fmt;

use serde_json::{Value, json};

use crate::command::Command;
use crate::config::ClientConfig;
use crate::errors::Error;
use crate::events::{ClientEvent, EventHook, log_events};
use crate::history::FrameHistory;
use crate::state::{LightState, Setting, Transition, transition};
use crate::transport::Transport;
use crate::types::{
    Brightness, Color, MicMode, MicSensitivity, Mode, Saturation, Scene, Speed, Warmth,
};

type Result<T> = std::result::Result<T, Error>;

/// Drives one light strip through a [`Transport`].
///
/// The strip cannot be queried, so the client keeps the full [`LightState`]
/// and re-sends it whenever a setting changes. Every setter validates first;
/// an invalid value leaves the state untouched and sends nothing.
///
/// Setters take `&mut self`. If several tasks need to drive the same strip,
/// serialize them in front of the client (for example one task per device).
///
/// # Example
///
/// ```
/// use illumi_led::{LightClient, Mode, QueueTransport};
///
/// # futures::executor::block_on(async {
/// let (transport, _frames) = QueueTransport::new();
/// let mut client = LightClient::new(transport);
///
/// client.set_scene(4).await.unwrap();
/// assert_eq!(client.mode(), Mode::Scene);
///
/// assert!(client.set_brightness(120).await.is_err());
/// assert_eq!(client.brightness(), 100);
/// # });
/// ```
pub struct LightClient<T> {
    transport: T,
    state: LightState,
    config: ClientConfig,
    history: FrameHistory,
    hook: EventHook,
}

impl<T: fmt::Debug> fmt::Debug for LightClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightClient")
            .field("transport", &self.transport)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> LightClient<T> {
    /// Create a client with default settings, logging through the `log` facade.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default(), log_events())
    }

    pub fn with_config(transport: T, config: ClientConfig, hook: EventHook) -> Self {
        LightClient {
            transport,
            state: LightState::new(),
            history: FrameHistory::with_max_entries(config.history_size),
            config,
            hook,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.config.name.as_deref()
    }

    pub fn state(&self) -> &LightState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns diagnostics including name, state and history summary.
    pub fn diagnostics(&self) -> Result<Value> {
        Ok(json!({
            "name": self.config.name,
            "state": serde_json::to_value(self.state).map_err(Error::JsonDump)?,
            "history": serde_json::to_value(self.history.summary()).map_err(Error::JsonDump)?,
        }))
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn mode_code(&self) -> u8 {
        self.state.mode.code()
    }

    pub fn brightness(&self) -> u8 {
        self.state.brightness.value()
    }

    pub fn saturation(&self) -> u8 {
        self.state.saturation.value()
    }

    pub fn warmth(&self) -> u8 {
        self.state.warmth.value()
    }

    pub fn scene(&self) -> u8 {
        self.state.scene.id()
    }

    pub fn speed(&self) -> u8 {
        self.state.speed.value()
    }

    pub fn mic_mode(&self) -> u8 {
        self.state.mic_mode.value()
    }

    pub fn mic_sensitivity(&self) -> u8 {
        self.state.mic_sensitivity.value()
    }

    pub fn is_on(&self) -> bool {
        self.state.power
    }

    pub fn is_off(&self) -> bool {
        !self.state.power
    }

    /// Set a solid color. Channels are rounded to the nearest integer.
    ///
    /// Switches to RGB mode but sends only the color frame; the device
    /// infers the mode from it.
    pub async fn set_color(&mut self, red: f64, green: f64, blue: f64) -> Result<()> {
        let color = Color::round(red, green, blue)?;
        self.apply(Setting::Color(color)).await
    }

    pub async fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.apply(Setting::Mode(mode)).await
    }

    /// Set the mode from its integer code (0 = RGB, 1 = white, 2 = scene, 3 = mic).
    pub async fn set_mode_code(&mut self, code: i64) -> Result<()> {
        let mode = Mode::try_from(code)?;
        self.apply(Setting::Mode(mode)).await
    }

    pub async fn set_brightness(&mut self, brightness: u8) -> Result<()> {
        let brightness = Brightness::try_from(brightness)?;
        self.apply(Setting::Brightness(brightness)).await
    }

    pub async fn set_saturation(&mut self, saturation: u8) -> Result<()> {
        let saturation = Saturation::try_from(saturation)?;
        self.apply(Setting::Saturation(saturation)).await
    }

    /// Set the white warmth; switches to white mode.
    pub async fn set_warmth(&mut self, warmth: u8) -> Result<()> {
        let warmth = Warmth::try_from(warmth)?;
        self.apply(Setting::Warmth(warmth)).await
    }

    /// Select a built-in scene; switches to scene mode.
    pub async fn set_scene(&mut self, scene: u8) -> Result<()> {
        let scene = Scene::try_from(scene)?;
        self.apply(Setting::Scene(scene)).await
    }

    pub async fn set_speed(&mut self, speed: u8) -> Result<()> {
        let speed = Speed::try_from(speed)?;
        self.apply(Setting::Speed(speed)).await
    }

    /// Select a microphone pattern; switches to mic mode.
    pub async fn set_mic_mode(&mut self, mic_mode: u8) -> Result<()> {
        let mic_mode = MicMode::try_from(mic_mode)?;
        self.apply(Setting::MicMode(mic_mode)).await
    }

    /// Sends only the sensitivity frame and leaves the mode alone.
    pub async fn set_mic_sensitivity(&mut self, sensitivity: u8) -> Result<()> {
        let sensitivity = MicSensitivity::try_from(sensitivity)?;
        self.apply(Setting::MicSensitivity(sensitivity)).await
    }

    pub async fn set_power(&mut self, on: bool) -> Result<()> {
        self.apply(Setting::Power(on)).await
    }

    pub async fn set_off(&mut self, off: bool) -> Result<()> {
        self.set_power(!off).await
    }

    pub async fn turn_on(&mut self) -> Result<()> {
        self.set_power(true).await
    }

    pub async fn turn_off(&mut self) -> Result<()> {
        self.set_power(false).await
    }

    /// Flip power based on the locally known state.
    pub async fn toggle(&mut self) -> Result<()> {
        self.set_power(!self.state.power).await
    }

    /// Re-send the complete state, e.g. after the link was re-established.
    pub async fn refresh(&mut self) -> Result<()> {
        self.apply(Setting::Refresh).await
    }

    /// Apply an already validated setting and send the resulting frames.
    ///
    /// The new state is kept even if the transport fails part way; call
    /// [`refresh`](Self::refresh) to bring the device back in line.
    pub async fn apply(&mut self, setting: Setting) -> Result<()> {
        let Transition { state, commands } = transition(&self.state, setting);
        self.state = state;
        (self.hook)(&ClientEvent::StateChanged {
            name: self.config.name.as_deref(),
            state: &self.state,
        });
        self.send_all(&commands).await
    }

    async fn send_all(&mut self, commands: &[Command]) -> Result<()> {
        for command in commands {
            let frame = command.encode();
            match self.transport.send(frame.clone()).await {
                Ok(()) => {
                    self.history.record(command, &frame);
                    (self.hook)(&ClientEvent::FrameSent {
                        name: self.config.name.as_deref(),
                        command,
                        frame: &frame,
                    });
                }
                Err(err) => {
                    self.history.record_error(&err.to_string());
                    (self.hook)(&ClientEvent::SendFailed {
                        name: self.config.name.as_deref(),
                        command,
                        error: &err,
                    });
                    return Err(Error::Transport(err));
                }
            }
        }
        Ok(())
    }
}
