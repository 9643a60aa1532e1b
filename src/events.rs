//! Observability hook for the client.
//!
//! The client never configures logging itself. It reports what it does through
//! a hook supplied at construction; [`log_events`] forwards to the `log` facade.

use log::{debug, warn};

use crate::command::{Command, to_hex};
use crate::state::LightState;

/// Something the client did.
#[derive(Debug)]
pub enum ClientEvent<'a> {
    /// A setting was accepted and the state replaced.
    StateChanged {
        name: Option<&'a str>,
        state: &'a LightState,
    },
    /// A frame was accepted by the transport.
    FrameSent {
        name: Option<&'a str>,
        command: &'a Command,
        frame: &'a [u8],
    },
    /// The transport refused a frame; the rest of the batch was dropped.
    SendFailed {
        name: Option<&'a str>,
        command: &'a Command,
        error: &'a std::io::Error,
    },
}

pub type EventHook = Box<dyn Fn(&ClientEvent<'_>) + Send + Sync + 'static>;

/// A hook that writes every event to the `log` facade.
pub fn log_events() -> EventHook {
    Box::new(|event: &ClientEvent<'_>| match event {
        ClientEvent::StateChanged { name, state } => {
            debug!("[{}] state: {:?}", name.unwrap_or("illumi"), state)
        }
        ClientEvent::FrameSent {
            name,
            command,
            frame,
        } => debug!(
            "[{}] sent {} {}",
            name.unwrap_or("illumi"),
            command,
            to_hex(frame)
        ),
        ClientEvent::SendFailed {
            name,
            command,
            error,
        } => warn!(
            "[{}] failed to send {}: {}",
            name.unwrap_or("illumi"),
            command,
            error
        ),
    })
}

/// A hook that drops every event.
pub fn silent() -> EventHook {
    Box::new(|_: &ClientEvent<'_>| {})
}
