//! Play command - one AI-vs-AI game
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: validate_args(), play_game(), report_game()
//! - Level 4: formatting utilities

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;

use othello_core::{AlphaBetaAI, Game, GameResult, Move, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board rows (even, at least 4)
    #[arg(long, default_value = "8")]
    pub rows: usize,

    /// Board columns (even, at least 4)
    #[arg(long, default_value = "8")]
    pub cols: usize,

    /// AI search depth
    #[arg(long, default_value = "5")]
    pub depth: i32,

    /// Time budget per move in milliseconds
    #[arg(long, default_value = "4800")]
    pub time_ms: u64,

    /// Print every move as it is played
    #[arg(long)]
    pub verbose: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    validate_args(&args)?;

    tracing::info!(
        "Playing {}x{} game (depth={}, {}ms per move)",
        args.rows,
        args.cols,
        args.depth,
        args.time_ms
    );

    let (game, moves) = play_game(&args, seed);
    report_game(&game, &moves, args.verbose);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn validate_args(args: &PlayArgs) -> Result<()> {
    for (name, side) in [("rows", args.rows), ("cols", args.cols)] {
        if side < 4 || side % 2 != 0 {
            bail!("--{} must be even and at least 4, got {}", name, side);
        }
    }
    if args.depth < 1 {
        bail!("--depth must be at least 1, got {}", args.depth);
    }
    Ok(())
}

fn play_game(args: &PlayArgs, seed: Option<u64>) -> (Game, Vec<Move>) {
    let mut ai = match seed {
        Some(s) => AlphaBetaAI::with_seed(args.depth, s),
        None => AlphaBetaAI::new(args.depth),
    }
    .with_time_limit(Duration::from_millis(args.time_ms));

    ai.play_game(Game::new(args.rows, args.cols, Player::Black))
}

fn report_game(game: &Game, moves: &[Move], verbose: bool) {
    if verbose {
        for (i, mv) in moves.iter().enumerate() {
            println!("{:>3}. ({}, {})", i + 1, mv.row, mv.col);
        }
        println!();
    }

    print!("{}", game.board());
    println!();
    println!(
        "Black {} - {} White ({} moves)",
        game.count(Player::Black),
        game.count(Player::White),
        moves.len()
    );
    println!("{}", describe_result(game.result()));
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn describe_result(result: GameResult) -> &'static str {
    match result {
        GameResult::BlackWins => "Black wins",
        GameResult::WhiteWins => "White wins",
        GameResult::Draw => "Draw",
        GameResult::Ongoing => "Unfinished",
    }
}
