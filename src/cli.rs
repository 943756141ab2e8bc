//! Command-line interface for the noughts console.

use clap::Parser;
use noughts::Difficulty;
use std::path::PathBuf;

/// Play noughts and crosses against the computer in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Computer difficulty: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Let the computer make the first move of every game
    #[arg(long)]
    pub computer_starts: bool,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
