//! Othello CLI - Command-line interface
//!
//! Commands:
//! - play: Play a single AI-vs-AI game
//! - evolve: Evolve positional weights with the genetic tuner

mod evolve;
mod play;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "othello")]
#[command(about = "Othello engine and positional weight evolver")]
#[command(version)]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single AI-vs-AI game with classic weights
    Play(play::PlayArgs),
    /// Run the genetic tuner
    Evolve(evolve::EvolveArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args, cli.seed),
        Commands::Evolve(args) => evolve::run(args, cli.seed),
    }
}
