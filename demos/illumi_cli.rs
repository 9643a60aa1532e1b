//! CLI application for driving an Illumi light strip.
//!
//! Frames are sent as UDP datagrams to a UART bridge, or printed as hex with
//! `--dry-run`. The strip cannot be queried, so each run starts from the
//! default state.
//!
//! Run with: cargo run --example illumi_cli -- --help

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use futures::StreamExt;
use illumi_led::{
    ClientConfig, LightClient, Mode, QueueTransport, Transport, UdpTransport, command, silent,
};

#[derive(Parser)]
#[command(name = "illumi-cli")]
#[command(about = "Drive an Illumi LED strip from the command line", long_about = None)]
struct Cli {
    /// Address of the UDP-to-UART bridge (not required with --dry-run)
    #[arg(short, long, global = true)]
    bridge: Option<SocketAddr>,

    /// Print the frames instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn the strip on
    On,

    /// Turn the strip off
    Off,

    /// Set a solid color (0-255 for each component)
    Color { red: f64, green: f64, blue: f64 },

    /// Set brightness (0-100)
    Brightness {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },

    /// Set saturation (0-100)
    Saturation {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },

    /// Switch to white with the given warmth (0-100)
    Warmth {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,
    },

    /// Play a built-in scene (0-9) at an optional speed (0-100)
    Scene {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=9))]
        scene: u8,
        #[arg(short, long)]
        speed: Option<u8>,
    },

    /// React to the microphone (pattern 1-4)
    Mic {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=4))]
        pattern: u8,
        #[arg(short, long)]
        sensitivity: Option<u8>,
    },

    /// Switch mode by name or code (rgb/0, white/1, scene/2, mic/3)
    Mode { mode: String },

    /// Re-send the default state
    Refresh,
}

async fn run<T: Transport>(
    client: &mut LightClient<T>,
    command: Commands,
) -> Result<(), illumi_led::Error> {
    match command {
        Commands::On => client.turn_on().await,
        Commands::Off => client.turn_off().await,
        Commands::Color { red, green, blue } => client.set_color(red, green, blue).await,
        Commands::Brightness { level } => client.set_brightness(level).await,
        Commands::Saturation { level } => client.set_saturation(level).await,
        Commands::Warmth { level } => client.set_warmth(level).await,
        Commands::Scene { scene, speed } => {
            client.set_scene(scene).await?;
            match speed {
                Some(speed) => client.set_speed(speed).await,
                None => Ok(()),
            }
        }
        Commands::Mic {
            pattern,
            sensitivity,
        } => {
            client.set_mic_mode(pattern).await?;
            match sensitivity {
                Some(sensitivity) => client.set_mic_sensitivity(sensitivity).await,
                None => Ok(()),
            }
        }
        Commands::Mode { mode } => client.set_mode(mode.parse::<Mode>()?).await,
        Commands::Refresh => client.refresh().await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.dry_run {
        let (transport, frames) = QueueTransport::new();
        let mut client =
            LightClient::with_config(transport, ClientConfig::named("dry-run"), silent());
        run(&mut client, cli.command).await?;
        drop(client);

        let frames: Vec<_> = frames.collect().await;
        for frame in frames {
            println!("{}", command::to_hex(&frame));
        }
        return Ok(());
    }

    let bridge = cli
        .bridge
        .ok_or("Bridge address is required. Use --bridge <IP:PORT> or --dry-run")?;
    let transport = UdpTransport::connect(bridge).await?;
    let mut client = LightClient::new(transport);

    match run(&mut client, cli.command).await {
        Ok(()) => println!(
            "Sent {} frame(s) to {}",
            client.history().summary().frames_sent,
            bridge
        ),
        Err(e) if e.is_validation() => eprintln!("Invalid setting, nothing sent: {}", e),
        Err(e) => eprintln!("Error: {}", e),
    }

    println!("\nDiagnostics:\n{}", serde_json::to_string_pretty(&client.diagnostics()?)?);
    Ok(())
}
