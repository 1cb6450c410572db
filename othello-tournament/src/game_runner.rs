//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use othello_core::{AlphaBetaAI, Game, GameResult, Move, Player};

use crate::config::AiConfig;

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final game result
    pub result: GameResult,
    /// Final black bead count
    pub black_count: usize,
    /// Final white bead count
    pub white_count: usize,
    /// Move history
    pub moves: Vec<Move>,
}

/// Game runner that plays games with AI
pub struct GameRunner {
    /// AI configuration
    config: AiConfig,
    /// Random seed counter
    seed_counter: u64,
}

impl GameRunner {
    /// Create a new game runner
    pub fn new(config: AiConfig) -> Self {
        let seed_counter = config.seed.unwrap_or(42);
        Self {
            config,
            seed_counter,
        }
    }

    /// Play a game to completion, both sides driven by the engine
    pub fn play_game(&mut self, initial: Game) -> GameOutcome {
        let seed = self.next_seed();
        let mut ai = AlphaBetaAI::with_seed(self.config.depth, seed)
            .with_time_limit(self.config.time_limit);

        let (final_state, moves) = ai.play_game(initial);

        GameOutcome {
            result: final_state.result(),
            black_count: final_state.count(Player::Black),
            white_count: final_state.count(Player::White),
            moves,
        }
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }
}
