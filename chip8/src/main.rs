use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod keymap;
mod run;

/// Runs a CHIP-8 ROM in an SDL2 window
#[derive(Parser, Debug)]
#[command(name = "chip8", version)]
pub struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Window pixels per CHIP-8 pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Minimum milliseconds between cycles (hold Space to ignore it)
    #[arg(long, default_value_t = 1)]
    delay: u64,

    /// Seed for the random number instruction, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run::run(Args::parse())
}
