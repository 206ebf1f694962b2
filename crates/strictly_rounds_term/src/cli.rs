//! Command-line interface for the terminal front end.

use clap::Parser;

/// Strictly Rounds - tic-tac-toe matches in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Two-player tic-tac-toe over a fixed number of rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rounds per match (overrides the settings file)
    #[arg(short, long)]
    pub rounds: Option<String>,

    /// Path to the TOML settings file
    #[arg(short, long, default_value = "strictly_rounds.toml")]
    pub config: std::path::PathBuf,

    /// Pause before the board clears after a round, in milliseconds
    #[arg(long)]
    pub round_delay_ms: Option<u64>,

    /// Pause before the final scores are shown, in milliseconds
    #[arg(long)]
    pub summary_delay_ms: Option<u64>,
}
