//! Game state machine for Othello
//!
//! Owns the grid, the player to move and the single-slot undo snapshot.
//! Every mutating operation validates fully before touching any state, so
//! a rejected action leaves the game exactly as it was.

use log::{info, warn};
use thiserror::Error;

use crate::board::{Cell, Grid, Player, Pos, BOARD_SIZE};
use crate::rules::{captures_for_move, has_legal_move};

/// Rejection reasons for a placement attempt. The board and the turn are
/// unchanged whenever one of these comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Coordinates outside the board; a caller contract violation rather
    /// than a game outcome.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a stone.
    #[error("field already occupied")]
    Occupied,
    /// The placement would bracket no opponent stones.
    #[error("move captures no stones")]
    NoCaptures,
}

/// Rejection reason for a pass request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassError {
    /// The current player still has a legal move somewhere.
    #[error("a legal move is still available")]
    LegalMoveExists,
}

/// A running Othello game.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current_player: Player,
    /// Snapshot taken by the last committed move or pass; `None` until the
    /// first commit and after every revert.
    previous: Option<Grid>,
}

impl Game {
    /// Start a new game with the four-stone opening, Black to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::opening(),
            current_player: Player::Black,
            previous: None,
        }
    }

    /// The player whose turn it is
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Read a single cell
    #[inline]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.grid.get(pos)
    }

    /// Borrow the whole grid (rendering, rule queries)
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of cells held by `player`
    pub fn score(&self, player: Player) -> usize {
        self.grid.count(player)
    }

    /// Place a stone for the current player at (row, col).
    ///
    /// On success the placed cell and every bracketed opponent run flip to
    /// the mover, the turn passes to the opponent, and the flipped positions
    /// are returned. On failure nothing changes.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Vec<Pos>, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            warn!("position ({row}, {col}) is outside the board");
            return Err(MoveError::OutOfBounds { row, col });
        }
        let pos = Pos::new(row, col);

        if !self.grid.is_empty(pos) {
            warn!("field already occupied");
            return Err(MoveError::Occupied);
        }

        let mover = self.current_player;
        let captured = captures_for_move(&self.grid, pos, mover);
        if captured.is_empty() {
            warn!("invalid move");
            return Err(MoveError::NoCaptures);
        }

        self.previous = Some(self.grid);
        info!("flip stones {captured:?}");
        self.grid.set(pos, Cell::Stone(mover));
        for &flip in &captured {
            self.grid.set(flip, Cell::Stone(mover));
        }
        self.current_player = mover.opposite();

        Ok(captured)
    }

    /// Give up the turn. Only allowed when the current player has no legal
    /// move anywhere on the board.
    pub fn request_pass(&mut self) -> Result<(), PassError> {
        if has_legal_move(&self.grid, self.current_player) {
            warn!("pass denied, {} still has a legal move", self.current_player);
            return Err(PassError::LegalMoveExists);
        }

        info!("{} passes", self.current_player);
        self.previous = Some(self.grid);
        self.current_player = self.current_player.opposite();

        Ok(())
    }

    /// Discard the last committed move or pass and restore the state before
    /// it. A no-op when nothing has been committed yet; a second call
    /// without an intervening commit is likewise a no-op.
    pub fn revert(&mut self) {
        if let Some(snapshot) = self.previous.take() {
            info!("reverting to previous state");
            self.grid = snapshot;
            self.current_player = self.current_player.opposite();
        }
    }

    /// The game is over when neither side has a legal move.
    pub fn is_over(&self) -> bool {
        !has_legal_move(&self.grid, self.current_player)
            && !has_legal_move(&self.grid, self.current_player.opposite())
    }

    /// Side holding more cells, or `None` on a tie. Meaningful once
    /// [`Game::is_over`] reports true.
    pub fn winner(&self) -> Option<Player> {
        let black = self.score(Player::Black);
        let white = self.score(Player::White);

        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;
    use crate::rules;

    /// Black at (0,0), White at (0,1): Black can bracket at (0,2), White
    /// has no move anywhere.
    fn corner_pair() -> Game {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), Cell::Stone(Player::Black));
        grid.set(Pos::new(0, 1), Cell::Stone(Player::White));
        Game {
            grid,
            current_player: Player::White,
            previous: None,
        }
    }

    #[test]
    fn test_opening_position() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.cell(Pos::new(3, 3)), Cell::Stone(Player::White));
        assert_eq!(game.cell(Pos::new(3, 4)), Cell::Stone(Player::Black));
        assert_eq!(game.cell(Pos::new(4, 3)), Cell::Stone(Player::Black));
        assert_eq!(game.cell(Pos::new(4, 4)), Cell::Stone(Player::White));
        assert_eq!(game.score(Player::Black), 2);
        assert_eq!(game.score(Player::White), 2);
        assert_eq!(game.grid().occupied(), 4);
    }

    #[test]
    fn test_first_move_flips_one_stone() {
        let mut game = Game::new();

        let captured = game.apply_move(2, 3).unwrap();
        assert_eq!(captured, vec![Pos::new(3, 3)]);

        // Black now holds the placed cell plus the flipped one
        assert_eq!(game.cell(Pos::new(2, 3)), Cell::Stone(Player::Black));
        assert_eq!(game.cell(Pos::new(3, 3)), Cell::Stone(Player::Black));
        assert_eq!(game.score(Player::Black), 4);
        assert_eq!(game.score(Player::White), 1);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_move_changes_only_origin_and_captures() {
        let mut game = Game::new();
        let before = *game.grid();

        let captured = game.apply_move(2, 3).unwrap();

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row, col);
                if pos == Pos::new(2, 3) || captured.contains(&pos) {
                    assert_eq!(game.cell(pos), Cell::Stone(Player::Black));
                } else {
                    assert_eq!(game.cell(pos), before.get(pos));
                }
            }
        }
        // Every captured cell held the opponent beforehand
        for &pos in &captured {
            assert_eq!(before.get(pos), Cell::Stone(Player::White));
        }
    }

    #[test]
    fn test_multi_direction_flip() {
        let mut grid = Grid::new();
        // B W _ W B in row 1 plus W B below the gap: placing at (1,2)
        // flips west, east and south at once
        grid.set(Pos::new(1, 0), Cell::Stone(Player::Black));
        grid.set(Pos::new(1, 1), Cell::Stone(Player::White));
        grid.set(Pos::new(1, 3), Cell::Stone(Player::White));
        grid.set(Pos::new(1, 4), Cell::Stone(Player::Black));
        grid.set(Pos::new(2, 2), Cell::Stone(Player::White));
        grid.set(Pos::new(3, 2), Cell::Stone(Player::Black));
        let mut game = Game {
            grid,
            current_player: Player::Black,
            previous: None,
        };

        let captured = game.apply_move(1, 2).unwrap();
        assert_eq!(captured.len(), 3);
        assert!(captured.contains(&Pos::new(1, 1)));
        assert!(captured.contains(&Pos::new(1, 3)));
        assert!(captured.contains(&Pos::new(2, 2)));
        assert_eq!(game.score(Player::Black), 7);
        assert_eq!(game.score(Player::White), 0);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap();
        let before = *game.grid();

        assert_eq!(game.apply_move(3, 3), Err(MoveError::Occupied));
        assert_eq!(*game.grid(), before);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_no_captures_rejected() {
        let mut game = Game::new();
        let before = *game.grid();

        // (0,0) touches nothing
        assert_eq!(game.apply_move(0, 0), Err(MoveError::NoCaptures));
        assert_eq!(*game.grid(), before);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();

        assert_eq!(
            game.apply_move(8, 0),
            Err(MoveError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            game.apply_move(0, 42),
            Err(MoveError::OutOfBounds { row: 0, col: 42 })
        );
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.grid().occupied(), 4);
    }

    #[test]
    fn test_rejected_move_keeps_undo_slot() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap();
        let after_move = *game.grid();

        // A rejected attempt must not overwrite the snapshot
        assert_eq!(game.apply_move(3, 3), Err(MoveError::Occupied));
        game.revert();

        assert_ne!(*game.grid(), after_move);
        assert_eq!(game.grid().occupied(), 4);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_revert_restores_move() {
        let mut game = Game::new();
        let before = *game.grid();

        game.apply_move(2, 3).unwrap();
        game.revert();

        assert_eq!(*game.grid(), before);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_second_revert_is_noop() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap();

        game.revert();
        let after_revert = *game.grid();
        game.revert();

        assert_eq!(*game.grid(), after_revert);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_revert_on_fresh_game_is_noop() {
        let mut game = Game::new();
        game.revert();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.grid().occupied(), 4);
    }

    #[test]
    fn test_single_undo_level() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap(); // Black
        let after_first = *game.grid();
        game.apply_move(2, 2).unwrap(); // White brackets (3,3) diagonally

        // One revert goes back one commit, a second one goes nowhere
        game.revert();
        assert_eq!(*game.grid(), after_first);
        assert_eq!(game.current_player(), Player::White);

        game.revert();
        assert_eq!(*game.grid(), after_first);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_pass_denied_when_move_exists() {
        let mut game = Game::new();
        assert_eq!(game.request_pass(), Err(PassError::LegalMoveExists));
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_pass_allowed_without_moves() {
        let mut game = corner_pair();
        game.request_pass().unwrap();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.grid().occupied(), 2);
    }

    #[test]
    fn test_revert_after_pass() {
        let mut game = corner_pair();
        game.request_pass().unwrap();

        game.revert();

        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.grid().occupied(), 2);
    }

    #[test]
    fn test_pass_matches_legal_scan() {
        let mut game = corner_pair();
        assert!(!rules::has_legal_move(game.grid(), Player::White));
        assert!(game.request_pass().is_ok());

        // Black, now on turn, does have (0,2)
        assert!(rules::has_legal_move(game.grid(), Player::Black));
        assert_eq!(game.request_pass(), Err(PassError::LegalMoveExists));
    }

    #[test]
    fn test_score_conservation() {
        let mut game = Game::new();
        for (row, col) in [(2, 3), (2, 2), (3, 2)] {
            game.apply_move(row, col).unwrap();
            let total = game.score(Player::Black) + game.score(Player::White);
            assert_eq!(total, game.grid().occupied());
            assert!(total <= TOTAL_CELLS);
        }
    }

    #[test]
    fn test_not_over_at_opening() {
        let game = Game::new();
        assert!(!game.is_over());
        assert_eq!(game.winner(), None); // 2-2
    }

    #[test]
    fn test_over_when_neither_side_moves() {
        let mut grid = Grid::new();
        grid.set(Pos::new(0, 0), Cell::Stone(Player::Black));
        let game = Game {
            grid,
            current_player: Player::Black,
            previous: None,
        };

        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Player::Black));
    }

    #[test]
    fn test_winner_by_count() {
        let mut game = Game::new();
        game.apply_move(2, 3).unwrap();
        // 4-1 for Black at this point
        assert_eq!(game.winner(), Some(Player::Black));
    }
}
