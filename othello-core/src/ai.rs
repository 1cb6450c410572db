//! CPU-based Alpha-Beta AI

use std::time::{Duration, Instant};

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::eval::{evaluate, MAX_VALUE, MIN_VALUE};
use crate::game::{Game, Move, Player};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default search depth in plies
pub const DEFAULT_DEPTH: i32 = 5;

/// Default per-move thinking time
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(4800);

/// Number of move-ordering tiers
const PRIORITY_TIERS: usize = 8;

/// Tiers smaller than this are widened with random extra moves
const WIDEN_TARGET: usize = 6;

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Alpha-Beta AI player
pub struct AlphaBetaAI {
    pub depth: i32,
    pub time_limit: Duration,
    rng: ChaCha8Rng,
}

impl AlphaBetaAI {
    pub fn new(depth: i32) -> Self {
        Self {
            depth,
            time_limit: DEFAULT_TIME_LIMIT,
            rng: ChaCha8Rng::seed_from_u64(42),
        }
    }

    pub fn with_seed(depth: i32, seed: u64) -> Self {
        Self {
            depth,
            time_limit: DEFAULT_TIME_LIMIT,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Best move for the player to move, within the time limit
    pub fn best_move(&mut self, game: &Game) -> Option<Move> {
        let deadline = Instant::now() + self.time_limit;
        choose_move(game, game.turn(), self.depth, deadline, &mut self.rng)
    }

    /// Play both sides until neither can move
    pub fn play_game(&mut self, initial: Game) -> (Game, Vec<Move>) {
        let mut game = initial;
        let mut history = Vec::new();

        while !game.is_terminal() {
            let Some(mv) = self.best_move(&game) else {
                break;
            };
            if game.apply_move(mv).is_err() {
                break;
            }
            history.push(mv);
        }

        (game, history)
    }
}

impl Default for AlphaBetaAI {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

// ============================================================================
// MOVE ORDERING
// ============================================================================

/// Ordering tier of a square weight (0 = search first)
pub fn priority(value: i32) -> usize {
    match value {
        70.. => 0,
        20..=69 => 1,
        15..=19 => 2,
        5..=14 => 3,
        0..=4 => 4,
        -19..=-1 => 5,
        -39..=-20 => 6,
        _ => 7,
    }
}

/// Moves worth searching for `player`
///
/// Returns the best non-empty priority tier. A tier with fewer than six
/// moves is widened with `(6 - len) / 2` moves sampled from the rest.
pub fn candidate_moves<R: Rng + ?Sized>(game: &Game, player: Player, rng: &mut R) -> Vec<Move> {
    let weights = game.weights(player);
    let mut tiers: [Vec<Move>; PRIORITY_TIERS] = Default::default();

    for mv in game.legal_moves(player) {
        tiers[priority(weights.get(mv.row, mv.col))].push(mv);
    }

    let Some(best) = tiers.iter().position(|tier| !tier.is_empty()) else {
        return Vec::new();
    };

    let mut moves = std::mem::take(&mut tiers[best]);
    if moves.len() < WIDEN_TARGET {
        let rest: Vec<Move> = tiers.into_iter().flatten().collect();
        let extra = ((WIDEN_TARGET - moves.len()) / 2).min(rest.len());
        moves.extend(rest.choose_multiple(rng, extra).copied());
    }
    moves
}

// ============================================================================
// MINIMAX WITH ALPHA-BETA
// ============================================================================

/// Minimax with alpha-beta pruning
///
/// Black always maximizes and White always minimizes, so every leaf is scored
/// with [`evaluate`] from Black's point of view whichever side is at that
/// node. Children are searched on clones, so `game` is never modified.
/// Returns early with the best move so far when the window closes or the
/// deadline passes.
pub fn search<R: Rng + ?Sized>(
    game: &Game,
    player: Player,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    deadline: Instant,
    rng: &mut R,
) -> (i32, Option<Move>) {
    if Instant::now() > deadline {
        return (leaf_value(game), None);
    }

    if game.is_terminal() {
        return (leaf_value(game), None);
    }

    if depth <= 0 {
        return (leaf_value(game), None);
    }

    let moves = candidate_moves(game, player, rng);
    let Some(&first) = moves.first() else {
        return (leaf_value(game), None);
    };

    let maximizing = player == Player::Black;
    let mut best_score = if maximizing { MIN_VALUE } else { MAX_VALUE };
    let mut best_move = first;

    for mv in moves {
        let mut child = game.clone();
        if child.place(player, mv).is_err() {
            continue;
        }

        let (score, _) = search(&child, player.opponent(), depth - 1, alpha, beta, deadline, rng);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = mv;
            }
            beta = beta.min(best_score);
        }

        if alpha >= beta {
            return (best_score, Some(best_move));
        }
    }

    (best_score, Some(best_move))
}

/// Static score on the fixed Black-maximizes scale
fn leaf_value(game: &Game) -> i32 {
    evaluate(game, Player::Black)
}

/// Search from the root with a full window
pub fn choose_move<R: Rng + ?Sized>(
    game: &Game,
    player: Player,
    depth: i32,
    deadline: Instant,
    rng: &mut R,
) -> Option<Move> {
    search(game, player, depth, MIN_VALUE, MAX_VALUE, deadline, rng).1
}

// ============================================================================
// TESTS
// ============================================================================
