//! Sandwich capture rules for Othello
//!
//! Capture pattern: X-O...O-X along a straight line, where X is the moving
//! player's stone and O is a gap-free run of opponent stones. Every stone
//! in the run flips to the mover's color. One parameterized scan covers
//! all eight compass directions.

use crate::board::{Cell, Grid, Player, Pos};

/// Direction vectors for capture scanning (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // Diagonal ↖
    (-1, 0),  // Vertical ↑
    (-1, 1),  // Diagonal ↗
    (0, -1),  // Horizontal ←
    (0, 1),   // Horizontal →
    (1, -1),  // Diagonal ↙
    (1, 0),   // Vertical ↓
    (1, 1),   // Diagonal ↘
];

/// Scan one direction from `origin` and collect the opponent run that would
/// be captured if `mover` placed a stone there.
///
/// The walk accumulates opponent stones until it hits one of:
/// - the mover's own stone: the run is bracketed, return it;
/// - an empty cell or the board edge: no bracket, return nothing.
///
/// # Arguments
/// * `grid` - Current board state
/// * `origin` - Empty cell where the stone would be placed
/// * `mover` - Color of the stone being placed
/// * `dir` - Unit direction vector (dr, dc)
///
/// # Returns
/// Positions to flip, ordered outward from `origin`; empty if the direction
/// captures nothing.
pub fn captured_in_direction(grid: &Grid, origin: Pos, mover: Player, dir: (i32, i32)) -> Vec<Pos> {
    let opponent = mover.opposite();
    let (dr, dc) = dir;
    let mut run = Vec::new();

    let mut row = origin.row as i32 + dr;
    let mut col = origin.col as i32 + dc;
    while Pos::is_valid(row, col) {
        let pos = Pos::new(row as usize, col as usize);
        match grid.get(pos) {
            Cell::Stone(player) if player == opponent => run.push(pos),
            // Own stone closes the bracket; the run is still empty when that
            // stone sits directly next to the origin.
            Cell::Stone(_) => return run,
            Cell::Empty => return Vec::new(),
        }
        row += dr;
        col += dc;
    }

    // Ran off the board without a closing stone
    Vec::new()
}

/// Find all positions flipped by placing `mover` at `origin`: the union of
/// the eight directional runs. Rays from a single origin never overlap, so
/// concatenating them is the union.
pub fn captures_for_move(grid: &Grid, origin: Pos, mover: Player) -> Vec<Pos> {
    let mut captured = Vec::new();

    for &dir in &DIRECTIONS {
        captured.extend(captured_in_direction(grid, origin, mover, dir));
    }

    captured
}
