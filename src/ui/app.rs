//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use log::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::board::{Player, Pos};
use crate::game::Game;

/// Main Othello application
pub struct OthelloApp {
    game: Game,
    board_view: BoardView,
    /// Last rejection shown to the player; cleared by the next accepted
    /// action.
    message: Option<String>,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
            message: None,
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.game = Game::new();
        self.message = None;
    }

    /// Attempt to place at the clicked cell; rejections surface in the
    /// message card.
    fn try_move(&mut self, pos: Pos) {
        debug!(
            "{} on row:{} and column:{}",
            self.game.current_player(),
            pos.row,
            pos.col
        );
        match self.game.apply_move(pos.row, pos.col) {
            Ok(_) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn try_pass(&mut self) {
        match self.game.request_pass() {
            Ok(()) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn undo(&mut self) {
        self.game.revert();
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Pass (P)").clicked() {
                        self.try_pass();
                        ui.close_menu();
                    }
                    if ui.button("Undo (R)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} to move", self.game.current_player()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context, game_over: bool) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui, game_over);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            // Logo stones
            ui.label(
                RichText::new("●○")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(180, 180, 185)),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("sandwich and flip").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui, game_over: bool) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.game.current_player() == Player::Black;
            let (symbol, accent) = if is_black {
                ("●", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let glyph_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                // Stone circle background
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol,
                    egui::FontId::proportional(28.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = self.game.current_player().to_string().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if game_over {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("Your move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            self.render_score_row(ui, Player::Black);
            ui.add_space(6.0);
            self.render_score_row(ui, Player::White);
        });
    }

    /// Render a single score row with a stone icon
    fn render_score_row(&self, ui: &mut egui::Ui, player: Player) {
        let (symbol, symbol_color) = match player {
            Player::Black => ("●", egui::Color32::from_rgb(60, 60, 65)),
            Player::White => ("○", egui::Color32::from_rgb(200, 200, 205)),
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(18.0).color(symbol_color));
            ui.add_space(4.0);
            ui.label(
                RichText::new(player.to_string().to_uppercase())
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{}", self.game.score(player)))
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("Pass (P)").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.try_pass();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("Undo (R)").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(RichText::new("New (N)").size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.new_game();
                    }
                });
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let black = self.game.score(Player::Black);
        let white = self.game.score(Player::White);
        let winner = self.game.winner();

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    match winner {
                        Some(winner) => {
                            let (symbol, accent) = if winner == Player::Black {
                                ("●", egui::Color32::from_rgb(70, 70, 75))
                            } else {
                                ("○", egui::Color32::from_rgb(220, 220, 225))
                            };

                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 60.0);
                                ui.label(RichText::new(symbol).size(32.0).color(accent));
                                ui.add_space(8.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(winner.to_string().to_uppercase())
                                            .size(18.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    );
                                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                                });
                            });
                        }
                        None => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                        }
                    }

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{black} - {white}"))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);

                    // New game button
                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.new_game();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, game_over: bool) {
        CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(egui::Color32::from_rgb(40, 42, 46))
                    .inner_margin(10.0),
            )
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.game.grid(),
                    self.game.current_player(),
                    game_over,
                );

                // Handle click
                if let Some(pos) = clicked {
                    self.try_move(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let mut quit = false;

        ctx.input(|i| {
            // P - Pass the turn
            if i.key_pressed(egui::Key::P) {
                self.try_pass();
            }

            // R - Revert the last move or pass
            if i.key_pressed(egui::Key::R) {
                self.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }

            // Q - Quit, handled outside the input lock
            if i.key_pressed(egui::Key::Q) {
                quit = true;
            }
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Whole-board scan, bounded by the fixed 8x8 size
        let game_over = self.game.is_over();

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx, game_over);
        self.render_board(ctx, game_over);
    }
}
