//! # illumi_led
//!
//! An async Rust library for driving Illumi LED light strips.
//!
//! The strip listens on a UART-over-radio link and speaks a small write-only
//! binary protocol. This crate turns settings (color, brightness, warmth,
//! saturation, scene, speed, microphone mode, power) into the exact frames the
//! firmware expects, and keeps track of the strip's state so every change can
//! be re-sent in the order the device needs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::net::SocketAddr;
//! use illumi_led::{LightClient, Mode, UdpTransport};
//!
//! async fn control_strip() -> Result<(), Box<dyn std::error::Error>> {
//!     // Any `Transport` works; here frames go to a UDP-to-UART bridge.
//!     let bridge: SocketAddr = "192.168.1.50:7000".parse()?;
//!     let mut strip = LightClient::new(UdpTransport::connect(bridge).await?);
//!
//!     strip.set_color(255.0, 64.0, 0.0).await?;
//!     strip.set_brightness(60).await?;
//!     strip.set_mode(Mode::Scene).await?;
//!     strip.turn_off().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Command encoding**: Pure functions in [`command`] produce every frame
//! - **State tracking**: [`LightState`] and [`transition`] decide what to send
//! - **Validation**: Range-checked value types such as [`Brightness`] and [`Scene`]
//! - **Transports**: In-process [`QueueTransport`] or datagram [`UdpTransport`]
//! - **Observability**: An injected [`EventHook`] plus a bounded [`FrameHistory`]
//!
//! ## Protocol
//!
//! Frames start with the sync byte `0x5A`. The device never answers, so the
//! client only ever writes. A full update is always mode-specific frames, then
//! brightness, then on/off.
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime (via async-io)

mod client;
pub mod command;
mod config;
mod errors;
mod events;
mod history;
pub mod runtime;
mod state;
mod transport;
mod types;

// Re-export public API
pub use client::LightClient;
pub use command::Command;
pub use config::ClientConfig;
pub use errors::Error;
pub use events::{ClientEvent, EventHook, log_events, silent};
pub use history::{FrameHistory, HistoryEntry, HistorySummary};
pub use state::{LightState, Setting, Transition, broadcast, transition};
pub use transport::{QueueTransport, Transport, UdpTransport};
pub use types::{
    Brightness, Color, MicMode, MicSensitivity, Mode, Saturation, Scene, Speed, Warmth,
};
