use eframe::egui;

use crate::CommandSender;
use crate::state::SharedState;
use super::game::SnakeGameUi;

pub struct ArcadeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: SnakeGameUi,
}

impl ArcadeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, cell_size: f32) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: SnakeGameUi::new(cell_size),
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
        }

        let snapshot = self.shared_state.get_snapshot();
        let game_over = self.shared_state.get_game_over();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui
                .render_game(ui, ctx, &snapshot, &game_over, &self.command_sender);
        });
    }
}
