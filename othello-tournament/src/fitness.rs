//! Pairwise fitness: one full game between two individuals
//!
//! Level 2 - Phase-level implementation

use othello_core::{Game, Individual, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;
use crate::game_runner::{GameOutcome, GameRunner};

/// Which side of a pairing won
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchWinner {
    /// The individual that played Black
    First,
    /// The individual that played White (also awarded draws)
    Second,
}

/// Play `first` (Black, moves first) against `second` (White)
///
/// Both individuals' score fields are overwritten with the final bead
/// counts. `First` is returned only on a strictly higher count, so a drawn
/// game goes to `second`. The engine seed is drawn from `rng`.
pub fn fitness<R: Rng + ?Sized>(
    first: &mut Individual,
    second: &mut Individual,
    config: &MatchConfig,
    rng: &mut R,
) -> MatchWinner {
    let outcome = play_pairing(first, second, config, rng.gen());
    record_scores(first, second, &outcome);

    let winner = decide_winner(&outcome);

    tracing::debug!(
        "{:?} vs {:?}: {:?} {}-{} in {} moves, winner {:?}",
        first.genes,
        second.genes,
        outcome.result,
        outcome.black_count,
        outcome.white_count,
        outcome.moves.len(),
        winner
    );

    winner
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Build a fresh game with each individual's weights and play it out
fn play_pairing(
    first: &Individual,
    second: &Individual,
    config: &MatchConfig,
    seed: u64,
) -> GameOutcome {
    let game = Game::with_weights(
        config.rows,
        config.cols,
        Player::Black,
        first.weights(config.rows, config.cols),
        second.weights(config.rows, config.cols),
    );

    let mut runner = GameRunner::new(config.ai_config.clone().with_seed(seed));
    runner.play_game(game)
}

/// Store the final bead counts on both individuals
fn record_scores(first: &mut Individual, second: &mut Individual, outcome: &GameOutcome) {
    let black = outcome.black_count as u32;
    let white = outcome.white_count as u32;

    first.black_score = black;
    second.white_score = black;
    first.white_score = white;
    second.black_score = white;
}

/// Strictly more black beads wins for the first individual
fn decide_winner(outcome: &GameOutcome) -> MatchWinner {
    if outcome.black_count > outcome.white_count {
        MatchWinner::First
    } else {
        MatchWinner::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;
    use othello_core::GameResult;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn quick_config() -> MatchConfig {
        MatchConfig::new(AiConfig::alpha_beta(1)).with_board(6, 6)
    }

    #[test]
    fn test_fitness_records_scores() {
        let mut a = Individual::new([70, 20, 15, 5, 3, -5, -20, -40]);
        let mut b = Individual::new([-40, -20, -5, 3, 5, 15, 20, 70]);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let winner = fitness(&mut a, &mut b, &quick_config(), &mut rng);

        assert_eq!(a.black_score, b.white_score);
        assert_eq!(a.white_score, b.black_score);
        assert!(a.black_score + a.white_score <= 36);
        assert!(a.black_score + a.white_score > 4);
        let expected = if a.black_score > a.white_score {
            MatchWinner::First
        } else {
            MatchWinner::Second
        };
        assert_eq!(winner, expected);
    }

    #[test]
    fn test_fitness_is_reproducible() {
        let mut a = Individual::new([10, 20, 30, 40, 50, 60, 70, -70]);
        let mut b = Individual::new([-10, -20, -30, -40, -50, -60, -70, 70]);
        let config = quick_config();

        let first = fitness(&mut a, &mut b, &config, &mut ChaCha8Rng::seed_from_u64(3));
        let scores = (a.black_score, a.white_score);
        let second = fitness(&mut a, &mut b, &config, &mut ChaCha8Rng::seed_from_u64(3));

        assert_eq!(first, second);
        assert_eq!(scores, (a.black_score, a.white_score));
    }

    #[test]
    fn test_draw_goes_to_second() {
        let outcome = GameOutcome {
            result: GameResult::Draw,
            black_count: 18,
            white_count: 18,
            moves: vec![],
        };
        let mut a = Individual::new([0; 8]);
        let mut b = Individual::new([0; 8]);
        record_scores(&mut a, &mut b, &outcome);
        assert_eq!((a.black_score, a.white_score), (18, 18));
        assert_eq!((b.black_score, b.white_score), (18, 18));
        assert_eq!(decide_winner(&outcome), MatchWinner::Second);
    }

    #[test]
    fn test_black_majority_goes_to_first() {
        let outcome = GameOutcome {
            result: GameResult::BlackWins,
            black_count: 20,
            white_count: 16,
            moves: vec![],
        };
        assert_eq!(decide_winner(&outcome), MatchWinner::First);
    }
}
