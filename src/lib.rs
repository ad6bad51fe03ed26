//! Othello game engine with an egui front end
//!
//! Implements the sandwich-capture family of rules on a standard 8x8 board:
//! - Legal placement requires bracketing at least one opponent run
//! - A committed move flips every bracketed stone and advances the turn
//! - Passing is gated on a whole-board legal-move scan
//! - A single-slot snapshot reverts the last committed move or pass
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Cells, players, positions and the grid itself
//! - [`rules`]: Capture scanning and legal-move queries
//! - [`game`]: The game state machine tying the rules together
//! - [`ui`]: egui rendering and input mapping
//!
//! # Quick Start
//!
//! ```
//! use othello::{Game, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::Black);
//!
//! // Black brackets the white stone at (3, 3) from above
//! let flipped = game.apply_move(2, 3).unwrap();
//! assert_eq!(flipped.len(), 1);
//! assert_eq!(game.score(Player::Black), 4);
//! assert_eq!(game.current_player(), Player::White);
//!
//! // One level of undo restores the opening
//! game.revert();
//! assert_eq!(game.score(Player::Black), 2);
//! assert_eq!(game.current_player(), Player::Black);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Cell, Grid, Player, Pos, BOARD_SIZE};
pub use game::{Game, MoveError, PassError};
