//! Console frontend for Treasure Hunter.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser)]
#[command(
    name = "treasure-hunter",
    about = "Treasure Hunter: cross the wilds, brawl in towns, and collect the treasure set",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Hunter name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Difficulty mode: n, h, e, test, lose, s (prompted if omitted)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// List the difficulty presets
    Presets,
}

/// Log to stderr so gameplay on stdout stays clean. `RUST_LOG` overrides
/// the default `warn` level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { name, mode } => commands::play::run(name.as_deref(), mode.as_deref()),
        Commands::Presets => commands::presets::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
