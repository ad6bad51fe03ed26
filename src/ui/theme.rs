//! Theme constants for the Othello GUI
//!
//! The `Player` to display-color mapping lives here; the core model never
//! carries a color.

use egui::Color32;

use crate::board::Player;

// Board colors - classic green felt with black field lines
pub const BOARD_BG: Color32 = Color32::from_rgb(0, 140, 0);
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const STONE_RIM: Color32 = Color32::from_rgb(70, 70, 80);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 44, 48);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Sizes
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const STONE_RADIUS_RATIO: f32 = 0.3;

/// Display color for a player's stones.
pub fn stone_color(player: Player) -> Color32 {
    match player {
        Player::Black => BLACK_STONE,
        Player::White => WHITE_STONE,
    }
}

// Functions for colors that can't be const
pub fn hover_valid(player: Player) -> Color32 {
    match player {
        Player::Black => Color32::from_rgba_unmultiplied(0, 0, 0, 110),
        Player::White => Color32::from_rgba_unmultiplied(255, 255, 255, 110),
    }
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}
