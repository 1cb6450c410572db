//! Game state and move rules

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Cell, DIRECTIONS};
use crate::weights::WeightGrid;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    BlackWins,
    WhiteWins,
    Draw,
}

/// A placement at (row, col)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Why a placement was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied,
    NoFlips,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            InvalidMoveReason::OutOfBounds => "cell is off the board",
            InvalidMoveReason::Occupied => "cell is occupied",
            InvalidMoveReason::NoFlips => "placement flips nothing",
        })
    }
}

/// Rule violations reported to the caller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: InvalidMoveReason,
    },
}

/// What a successful placement did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponent beads converted
    pub flipped: usize,
    /// The opponent had no reply and the mover keeps the turn
    pub passed: bool,
}

// ============================================================================
// GAME
// ============================================================================

/// One Othello match (clone to explore hypothetical futures)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    black_weights: WeightGrid,
    white_weights: WeightGrid,
    turn: Player,
    first_player: Player,
    black_count: usize,
    white_count: usize,
}

impl Game {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with the classic weight table for both sides
    ///
    /// # Panics
    /// Panics if either dimension is odd or smaller than 4.
    pub fn new(rows: usize, cols: usize, first_turn: Player) -> Self {
        Self::with_weights(
            rows,
            cols,
            first_turn,
            WeightGrid::classic(rows, cols),
            WeightGrid::classic(rows, cols),
        )
    }

    /// New game where each side evaluates with its own weights
    ///
    /// # Panics
    /// Panics if either dimension is odd or smaller than 4, or if a weight
    /// grid does not match the board.
    pub fn with_weights(
        rows: usize,
        cols: usize,
        first_turn: Player,
        black_weights: WeightGrid,
        white_weights: WeightGrid,
    ) -> Self {
        Self::from_board(Board::new(rows, cols), first_turn, black_weights, white_weights)
    }

    /// Resume from an arbitrary position with `turn` to move
    ///
    /// # Panics
    /// Panics if a weight grid does not match the board.
    pub fn from_board(
        board: Board,
        turn: Player,
        black_weights: WeightGrid,
        white_weights: WeightGrid,
    ) -> Self {
        for grid in [&black_weights, &white_weights] {
            assert!(
                grid.rows() == board.rows() && grid.cols() == board.cols(),
                "weight grid is {}x{}, board is {}x{}",
                grid.rows(),
                grid.cols(),
                board.rows(),
                board.cols()
            );
        }

        let black_count = board.count(Cell::Black);
        let white_count = board.count(Cell::White);
        Self {
            board,
            black_weights,
            white_weights,
            turn,
            first_player: turn,
            black_count,
            white_count,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Player to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Cell at (row, col); `None` when off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Weight table `player` evaluates with
    pub fn weights(&self, player: Player) -> &WeightGrid {
        match player {
            Player::Black => &self.black_weights,
            Player::White => &self.white_weights,
        }
    }

    /// Bead count for a side
    pub fn count(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black_count,
            Player::White => self.white_count,
        }
    }

    pub fn empty_count(&self) -> usize {
        self.rows() * self.cols() - self.black_count - self.white_count
    }

    // ========================================================================
    // LEGALITY
    // ========================================================================

    /// Number of opponent beads a bead at (row, col) would flip along `dir`
    fn flips_in_direction(&self, row: usize, col: usize, dir: (isize, isize), player: Player) -> usize {
        let own = player.cell();
        let theirs = player.opponent().cell();
        let mut run = 0;
        let mut pos = self.board.step(row, col, dir);

        while let Some((r, c)) = pos {
            match self.board.get(r, c) {
                Some(cell) if cell == theirs => run += 1,
                Some(cell) if cell == own => return run,
                _ => return 0,
            }
            pos = self.board.step(r, c, dir);
        }
        0
    }

    fn check_move(&self, row: usize, col: usize, player: Player) -> Result<(), InvalidMoveReason> {
        match self.board.get(row, col) {
            None => Err(InvalidMoveReason::OutOfBounds),
            Some(Cell::Empty) => {
                let flips = DIRECTIONS
                    .iter()
                    .any(|&dir| self.flips_in_direction(row, col, dir, player) > 0);
                if flips {
                    Ok(())
                } else {
                    Err(InvalidMoveReason::NoFlips)
                }
            }
            Some(_) => Err(InvalidMoveReason::Occupied),
        }
    }

    /// Check if `player` may place at (row, col)
    pub fn legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        self.check_move(row, col, player).is_ok()
    }

    /// All legal placements for `player`, row-major
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        self.board
            .cells()
            .filter(|&(row, col, cell)| cell == Cell::Empty && self.legal_move(row, col, player))
            .map(|(row, col, _)| Move::new(row, col))
            .collect()
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board
            .cells()
            .any(|(row, col, cell)| cell == Cell::Empty && self.legal_move(row, col, player))
    }

    /// Neither side can move
    pub fn is_terminal(&self) -> bool {
        !self.has_any_legal_move(Player::Black) && !self.has_any_legal_move(Player::White)
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Place a bead for the player to move
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        self.place(self.turn, mv)
    }

    /// Place a bead for `player`, flip every bracketed run, then advance the turn
    ///
    /// On error the game is left untouched.
    pub fn place(&mut self, player: Player, mv: Move) -> Result<MoveOutcome, GameError> {
        let Move { row, col } = mv;
        self.check_move(row, col, player)
            .map_err(|reason| GameError::InvalidMove { row, col, reason })?;

        let own = player.cell();
        let mut flipped = 0;
        for &dir in &DIRECTIONS {
            let run = self.flips_in_direction(row, col, dir, player);
            let mut pos = (row, col);
            for _ in 0..run {
                if let Some(next) = self.board.step(pos.0, pos.1, dir) {
                    self.board.set(next.0, next.1, own);
                    pos = next;
                }
            }
            flipped += run;
        }
        self.board.set(row, col, own);

        let (mine, theirs) = match player {
            Player::Black => (&mut self.black_count, &mut self.white_count),
            Player::White => (&mut self.white_count, &mut self.black_count),
        };
        *mine += flipped + 1;
        *theirs -= flipped;

        let passed = self.advance_turn(player);
        Ok(MoveOutcome { flipped, passed })
    }

    /// Hand the turn to the opponent if it can move; returns true on a pass
    fn advance_turn(&mut self, mover: Player) -> bool {
        let opponent = mover.opponent();
        if self.has_any_legal_move(opponent) {
            self.turn = opponent;
            false
        } else {
            self.turn = mover;
            true
        }
    }

    // ========================================================================
    // RESULT
    // ========================================================================

    /// Game result by bead majority once neither side can move
    pub fn result(&self) -> GameResult {
        if !self.is_terminal() {
            return GameResult::Ongoing;
        }
        match self.black_count.cmp(&self.white_count) {
            std::cmp::Ordering::Greater => GameResult::BlackWins,
            std::cmp::Ordering::Less => GameResult::WhiteWins,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Winning side; `None` while ongoing or on a draw
    pub fn winner(&self) -> Option<Player> {
        match self.result() {
            GameResult::BlackWins => Some(Player::Black),
            GameResult::WhiteWins => Some(Player::White),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn from_layout(rows: &[&str], turn: Player) -> Game {
        let board = Board::from_rows(rows).unwrap();
        let (r, c) = (board.rows(), board.cols());
        Game::from_board(board, turn, WeightGrid::classic(r, c), WeightGrid::classic(r, c))
    }

    fn assert_conserved(game: &Game) {
        let total = game.count(Player::Black) + game.count(Player::White) + game.empty_count();
        assert_eq!(total, game.rows() * game.cols());
        assert_eq!(game.count(Player::Black), game.board().count(Cell::Black));
        assert_eq!(game.count(Player::White), game.board().count(Cell::White));
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new(8, 8, Player::Black);
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.first_player(), Player::Black);
        assert_eq!(game.count(Player::Black), 2);
        assert_eq!(game.count(Player::White), 2);
        assert_eq!(game.result(), GameResult::Ongoing);
        assert_conserved(&game);
    }

    #[test]
    fn test_opening_moves() {
        let game = Game::new(8, 8, Player::Black);
        let moves = game.legal_moves(Player::Black);
        assert_eq!(
            moves,
            vec![Move::new(2, 3), Move::new(3, 2), Move::new(4, 5), Move::new(5, 4)]
        );
    }

    #[test]
    fn test_first_move_flips_and_passes_turn() {
        let mut game = Game::new(8, 8, Player::Black);
        let outcome = game.apply_move(Move::new(2, 3)).unwrap();

        assert_eq!(outcome, MoveOutcome { flipped: 1, passed: false });
        assert_eq!(game.cell(2, 3), Some(Cell::Black));
        assert_eq!(game.cell(3, 3), Some(Cell::Black));
        assert_eq!(game.cell(4, 4), Some(Cell::White));
        assert_eq!(game.count(Player::Black), 4);
        assert_eq!(game.count(Player::White), 1);
        assert_eq!(game.turn(), Player::White);
        assert_conserved(&game);
    }

    #[test]
    fn test_multi_direction_flip() {
        let mut game = from_layout(
            &["......", ".WWW..", ".W.W..", ".WWW..", "B.B.B.", "......"],
            Player::Black,
        );
        // Black at (2,2) brackets (3,1), (3,2) and (3,3) against row 4
        let outcome = game.apply_move(Move::new(2, 2)).unwrap();
        assert_eq!(outcome.flipped, 3);
        assert_eq!(game.cell(3, 1), Some(Cell::Black));
        assert_eq!(game.cell(3, 2), Some(Cell::Black));
        assert_eq!(game.cell(3, 3), Some(Cell::Black));
        assert_eq!(game.cell(1, 2), Some(Cell::White));
        assert_conserved(&game);
    }

    #[test]
    fn test_invalid_moves_leave_state_untouched() {
        let mut game = Game::new(8, 8, Player::Black);
        let before = game.clone();

        let occupied = game.apply_move(Move::new(3, 3));
        assert_eq!(
            occupied,
            Err(GameError::InvalidMove { row: 3, col: 3, reason: InvalidMoveReason::Occupied })
        );
        let no_flips = game.apply_move(Move::new(0, 0));
        assert_eq!(
            no_flips,
            Err(GameError::InvalidMove { row: 0, col: 0, reason: InvalidMoveReason::NoFlips })
        );
        let off_board = game.apply_move(Move::new(8, 2));
        assert_eq!(
            off_board,
            Err(GameError::InvalidMove { row: 8, col: 2, reason: InvalidMoveReason::OutOfBounds })
        );

        assert_eq!(game, before);
    }

    #[test]
    fn test_error_message() {
        let err = GameError::InvalidMove { row: 1, col: 2, reason: InvalidMoveReason::Occupied };
        assert_eq!(err.to_string(), "invalid move at (1, 2): cell is occupied");
    }

    #[test]
    fn test_forced_pass_keeps_turn() {
        // White takes the corner; Black is left with no reply
        let mut game = from_layout(&[".B..", "B...", "W...", "...."], Player::White);
        let outcome = game.apply_move(Move::new(0, 0)).unwrap();

        assert!(outcome.passed);
        assert_eq!(game.turn(), Player::White);
        assert!(!game.has_any_legal_move(Player::Black));
        assert!(game.has_any_legal_move(Player::White));
        assert!(!game.is_terminal());
    }

    #[test]
    fn test_terminal_when_one_color_remains() {
        let mut game = from_layout(&["BW..", "....", "....", "...."], Player::Black);
        game.apply_move(Move::new(0, 2)).unwrap();

        assert!(game.is_terminal());
        assert_eq!(game.result(), GameResult::BlackWins);
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.count(Player::White), 0);
    }

    #[test]
    fn test_draw_result() {
        let game = from_layout(&["BBWW", "BBWW", "BBWW", "BBWW"], Player::Black);
        assert!(game.is_terminal());
        assert_eq!(game.result(), GameResult::Draw);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_legal_move_rejects_off_board() {
        let game = Game::new(4, 4, Player::Black);
        assert!(!game.legal_move(4, 0, Player::Black));
        assert!(!game.legal_move(0, usize::MAX, Player::Black));
        assert!(game.legal_move(0, 1, Player::Black));
    }

    #[test]
    fn test_mover_gains_at_least_two() {
        let mut game = Game::new(6, 6, Player::Black);
        while let Some(&mv) = game.legal_moves(game.turn()).first() {
            let mover = game.turn();
            let before = game.count(mover);
            game.apply_move(mv).unwrap();
            assert!(game.count(mover) >= before + 2);
            assert_conserved(&game);
        }
        assert!(game.is_terminal());
    }

    #[test]
    fn test_terminal_iff_nobody_moves() {
        let mut game = Game::new(4, 4, Player::Black);
        loop {
            let nobody = !game.has_any_legal_move(Player::Black)
                && !game.has_any_legal_move(Player::White);
            assert_eq!(game.is_terminal(), nobody);
            let moves = game.legal_moves(game.turn());
            match moves.last() {
                Some(&mv) => {
                    game.apply_move(mv).unwrap();
                }
                None => break,
            }
        }
    }
}
