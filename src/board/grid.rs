//! Grid storage for the Othello board

use std::fmt;

use super::{Cell, Player, Pos, BOARD_SIZE};

/// 8x8 matrix of cells.
///
/// A plain value type: the undo snapshot is taken by copying the whole
/// grid, so it stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a grid with the standard four-stone opening: White on the
    /// main diagonal of the center block, Black on the anti-diagonal.
    pub fn opening() -> Self {
        let mut grid = Self::new();
        let mid = BOARD_SIZE / 2 - 1;
        grid.set(Pos::new(mid, mid), Cell::Stone(Player::White));
        grid.set(Pos::new(mid, mid + 1), Cell::Stone(Player::Black));
        grid.set(Pos::new(mid + 1, mid), Cell::Stone(Player::Black));
        grid.set(Pos::new(mid + 1, mid + 1), Cell::Stone(Player::White));
        grid
    }

    /// Get the cell at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row][pos.col]
    }

    /// Set the cell at a position
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Count the cells holding a player's stones
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Stone(player))
            .count()
    }

    /// Total number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Stone(Player::Black) => 'B',
                    Cell::Stone(Player::White) => 'W',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
