//! Legal-move queries
//!
//! A placement is legal iff the target cell is empty and at least one
//! direction yields a capture. The whole-board queries re-scan every cell
//! from scratch; the work is bounded by the fixed board size and they only
//! run on explicit requests, so no incremental bookkeeping is kept.

use crate::board::{Grid, Player, Pos, BOARD_SIZE};

use super::capture::{captured_in_direction, DIRECTIONS};

/// Check whether `player` may place a stone at `pos`.
pub fn is_legal_move(grid: &Grid, pos: Pos, player: Player) -> bool {
    grid.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| !captured_in_direction(grid, pos, player, dir).is_empty())
}

/// Collect every legal move for `player`, in row-major order.
pub fn legal_moves(grid: &Grid, player: Player) -> Vec<Pos> {
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row, col);
            if is_legal_move(grid, pos, player) {
                moves.push(pos);
            }
        }
    }

    moves
}

/// Check whether `player` has any legal move. Stops at the first hit.
pub fn has_legal_move(grid: &Grid, player: Player) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_legal_move(grid, Pos::new(row, col), player) {
                return true;
            }
        }
    }

    false
}
