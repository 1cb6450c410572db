//! Othello Tournament - Fitness evaluation through game playing
//!
//! This crate provides tournament infrastructure:
//! - AI-vs-AI games between weight tables
//! - Pairwise fitness between two individuals
//! - Round-robin group play
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: play_round_robin (orchestration)
//! - Level 2: fitness (phases)
//! - Level 3: play_game, record_scores (steps)
//! - Level 4: utilities, configuration

mod config;
mod fitness;
mod game_runner;
mod tournament;

pub use config::{AiConfig, MatchConfig};
pub use fitness::{fitness, MatchWinner};
pub use game_runner::{GameOutcome, GameRunner};
pub use tournament::{play_round_robin, Standing};
