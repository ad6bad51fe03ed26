//! GUI module for the Othello game
//!
//! This module provides a native Rust GUI using egui/eframe. The board view
//! maps pointer input to cells; all rule decisions stay in the game engine.

mod app;
mod board_view;
mod theme;

pub use app::OthelloApp;
