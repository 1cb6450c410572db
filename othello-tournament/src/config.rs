//! Configuration types for tournament play
//!
//! Level 4 - Utilities and configuration

use std::time::Duration;

use othello_core::{DEFAULT_DEPTH, DEFAULT_TIME_LIMIT};
use serde::{Deserialize, Serialize};

/// AI configuration for game playing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Search depth in plies
    pub depth: i32,
    /// Thinking time per move
    pub time_limit: Duration,
    /// Random seed for reproducibility (None = 42)
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Create config for alpha-beta at given depth
    pub fn alpha_beta(depth: i32) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    /// Set per-move time limit
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Settings shared by every game of a tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board rows (even, at least 4)
    pub rows: usize,
    /// Board columns (even, at least 4)
    pub cols: usize,
    /// AI configuration for both sides
    pub ai_config: AiConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            ai_config: AiConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Standard 8x8 board with the given AI
    pub fn new(ai_config: AiConfig) -> Self {
        Self {
            ai_config,
            ..Default::default()
        }
    }

    /// Set board size
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.depth, 5);
        assert_eq!(config.time_limit, Duration::from_millis(4800));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_ai_config_builders() {
        let config = AiConfig::alpha_beta(2)
            .with_time_limit(Duration::from_millis(100))
            .with_seed(7);
        assert_eq!(config.depth, 2);
        assert_eq!(config.time_limit, Duration::from_millis(100));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!((config.rows, config.cols), (8, 8));

        let small = MatchConfig::new(AiConfig::alpha_beta(1)).with_board(6, 6);
        assert_eq!((small.rows, small.cols), (6, 6));
        assert_eq!(small.ai_config.depth, 1);
    }
}
