//! Position evaluation

use crate::board::Cell;
use crate::game::{Game, Player};

/// Lower bound of any search score
pub const MIN_VALUE: i32 = -100_000;

/// Upper bound of any search score
pub const MAX_VALUE: i32 = 100_000;

/// Weighted material balance from `player`'s point of view
///
/// Each side's beads are scored with that side's own weight table, so two
/// different tables can be compared fairly in the same game. The result is
/// accumulated as a single running differential.
pub fn evaluate(game: &Game, player: Player) -> i32 {
    let own = player.cell();
    let own_weights = game.weights(player);
    let their_weights = game.weights(player.opponent());

    let mut score = 0;
    for (row, col, cell) in game.board().cells() {
        if cell == Cell::Empty {
            continue;
        }
        if cell == own {
            score += own_weights.get(row, col);
        } else {
            score -= their_weights.get(row, col);
        }
    }
    score
}
