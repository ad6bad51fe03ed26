//! Board rendering for the Othello GUI

use crate::{Cell, Grid, Player, Pos, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks are forwarded for every in-bounds cell; whether the move is
    /// allowed is the game engine's call. The hover preview only hints.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        grid: &Grid,
        current_turn: Player,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Draw field lines
        self.draw_grid(&painter);

        // Draw placed stones
        self.draw_stones(&painter, grid);

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = crate::rules::is_legal_move(grid, board_pos, current_turn);

                    // Draw hover preview
                    let hover_color = if is_valid {
                        super::theme::hover_valid(current_turn)
                    } else {
                        super::theme::hover_invalid()
                    };
                    self.draw_hover_preview(&painter, board_pos, hover_color);

                    // Check for click
                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the 9x9 field lines enclosing the 8x8 cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let length = BOARD_SIZE as f32 * self.cell_size;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, length);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(length, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, grid: &Grid) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row, col);
                if let Cell::Stone(player) = grid.get(pos) {
                    self.draw_stone(painter, pos, player);
                }
            }
        }
    }

    /// Draw a single stone centered in its cell
    fn draw_stone(&self, painter: &Painter, pos: Pos, player: Player) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center, radius, stone_color(player));

        // Thin rim on white stones
        if player == Player::White {
            painter.circle_stroke(center, radius, Stroke::new(1.0, STONE_RIM));
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, color: egui::Color32) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to a board cell (integer division by the
    /// cell size)
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;

        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Center pixel of a cell
    fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
