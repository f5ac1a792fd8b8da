use crate::game_service::{ClickOutcome, GameService};

use eframe::egui;
use tic_tac_toe_engine::{Play, Symbol};
use tracing::{debug, error};

const CELL_SIZE: f32 = 100.0;

pub struct GameApp {
    game_service: GameService,
    error_message: Option<String>,
}

impl GameApp {
    pub fn new(game_service: GameService) -> Self {
        Self {
            game_service,
            error_message: None,
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.handle_game_ui(ui);
        });

        self.show_outcome(ctx);
    }
}

impl GameApp {
    fn handle_game_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.group(|ui| {
                ui.set_width(400.0);
                ui.set_height(500.0);

                if !self.game_service.is_started() {
                    ui.add_space(200.0);
                    if ui
                        .add(
                            egui::Button::new(egui::RichText::new("Start Game").size(25.0))
                                .min_size(egui::vec2(160.0, 50.0)),
                        )
                        .clicked()
                    {
                        self.game_service.start();
                    }
                    return;
                }

                self.display_current_player(ui);

                ui.add_space(10.0);

                self.render_board(ui);

                if let Some(error) = &self.error_message {
                    ui.add_space(10.0);
                    ui.colored_label(egui::Color32::RED, error);
                }
            });
        });
    }

    fn display_current_player(&self, ui: &mut egui::Ui) {
        let player = &self.game_service.view().current_player;
        let turn_message = format!("🕐 {} ({})", player.name(), player.symbol());

        ui.label(
            egui::RichText::new(turn_message)
                .size(30.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let mut clicked = None;

        ui.vertical_centered(|ui| {
            for (row, cells) in self.game_service.view().cells.chunks(3).enumerate() {
                ui.horizontal(|ui| {
                    ui.add_space(40.0);
                    for (col, cell) in cells.iter().enumerate() {
                        let index = row * 3 + col;
                        let button = ui.add_enabled(
                            self.game_service.can_play(index),
                            egui::Button::new(cell_text(*cell))
                                .min_size(egui::vec2(CELL_SIZE, CELL_SIZE)),
                        );
                        if button.clicked() {
                            clicked = Some(index);
                        }
                    }
                });
            }
        });

        if let Some(index) = clicked {
            self.handle_click(index);
        }
    }

    fn handle_click(&mut self, index: usize) {
        match self.game_service.click(index) {
            Ok(ClickOutcome::Played(Play::Moved(_))) => self.error_message = None,
            Ok(outcome) => debug!("Board unchanged after click on cell {}: {:?}", index, outcome),
            Err(err) => {
                error!("❌ Click on cell {} rejected: {}", index, err);
                self.error_message = Some(format!("Error making move: {}", err));
            }
        }
    }

    fn show_outcome(&mut self, ctx: &egui::Context) {
        let Some(message) = self.game_service.view().outcome.as_ref().map(|o| o.message()) else {
            return;
        };

        let mut acknowledged = false;
        egui::Window::new("Game over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(message)
                            .size(30.0)
                            .color(egui::Color32::from_rgb(255, 0, 0)),
                    );
                    ui.add_space(10.0);
                    if ui
                        .button(
                            egui::RichText::new("🔄 Play again")
                                .size(25.0)
                                .color(egui::Color32::from_rgb(240, 148, 0)),
                        )
                        .clicked()
                    {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.game_service.acknowledge_outcome();
        }
    }
}

fn cell_text(cell: Option<Symbol>) -> egui::RichText {
    match cell {
        Some(Symbol::X) => egui::RichText::new("X")
            .size(50.0)
            .color(egui::Color32::from_rgb(255, 99, 71)),
        Some(Symbol::O) => egui::RichText::new("O")
            .size(50.0)
            .color(egui::Color32::from_rgb(34, 139, 34)),
        None => egui::RichText::new(" ")
            .size(50.0)
            .color(egui::Color32::from_rgb(180, 180, 180)),
    }
}
