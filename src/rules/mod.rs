//! Game rules for Othello
//!
//! This module implements the rule set for Othello:
//! - Capture scanning (sandwich capture over eight directions)
//! - Legal-move queries (per cell, per player, whole board)

pub mod capture;
pub mod legal;

// Re-exports for convenient access
pub use capture::{captured_in_direction, captures_for_move, DIRECTIONS};
pub use legal::{has_legal_move, is_legal_move, legal_moves};
