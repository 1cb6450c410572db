//! Othello Core - Game engine and AI
//!
//! This crate provides the core game logic:
//! - Board geometry (rectangular grid, even sides of at least 4)
//! - Positional weight tables built from gene vectors
//! - Game state, legality and flip rules with automatic passing
//! - Position evaluation with per-side weight tables
//! - Time-bounded alpha-beta AI with tiered move ordering
//! - Individuals (gene vectors) evolved by the tuner

pub mod board;
pub mod weights;
pub mod game;
pub mod eval;
pub mod ai;
pub mod individual;

// Re-exports for convenient access
pub use board::{Board, Cell, LayoutError, DIRECTIONS};
pub use weights::{WeightClass, WeightGrid, Genes, CLASSIC_GENES, GENE_COUNT, MIN_WEIGHT, MAX_WEIGHT, clamp_weight};
pub use game::{Game, GameError, GameResult, InvalidMoveReason, Move, MoveOutcome, Player};
pub use eval::{evaluate, MIN_VALUE, MAX_VALUE};
pub use ai::{AlphaBetaAI, candidate_moves, choose_move, priority, search, DEFAULT_DEPTH, DEFAULT_TIME_LIMIT};
pub use individual::Individual;
