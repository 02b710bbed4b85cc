use arcade_common::{Cell, Direction, GameOverNotification, SimulationSnapshot, SimulationState, SnakeCommand};
use eframe::egui;

use crate::CommandSender;

const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x9b, 0xbc, 0x0f);
const GRID_LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x8b, 0xac, 0x0f);
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x30, 0x62, 0x30);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x38, 0x0f);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xd9, 0x3a, 0x2b);
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3d, 0x4c, 0x2f);

/// Maps a pressed key to a game command.
pub fn command_for_key(key: egui::Key) -> Option<SnakeCommand> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(SnakeCommand::Turn(Direction::Up)),
        egui::Key::ArrowDown | egui::Key::S => Some(SnakeCommand::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(SnakeCommand::Turn(Direction::Left)),
        egui::Key::ArrowRight | egui::Key::D => Some(SnakeCommand::Turn(Direction::Right)),
        egui::Key::Space | egui::Key::P => Some(SnakeCommand::TogglePause),
        egui::Key::Enter | egui::Key::R => Some(SnakeCommand::Reset),
        _ => None,
    }
}

pub struct SnakeGameUi {
    cell_size: f32,
}

impl SnakeGameUi {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &Option<SimulationSnapshot>,
        game_over: &Option<GameOverNotification>,
        command_sender: &CommandSender,
    ) {
        let Some(snapshot) = snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("Starting game...");
            });
            return;
        };

        self.handle_input(ctx, command_sender);

        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new(format!("SCORE: {}", snapshot.score))
                    .monospace()
                    .strong()
                    .color(TEXT_COLOR),
            );
            ui.add_space(8.0);

            self.render_board(ui, snapshot);
            ui.add_space(8.0);

            match snapshot.state {
                SimulationState::Terminated => {
                    self.render_game_over(ui, snapshot, game_over, command_sender);
                }
                SimulationState::Paused => {
                    ui.label(egui::RichText::new("PAUSED").size(20.0).strong());
                    self.render_controls(ui, snapshot, command_sender);
                }
                SimulationState::Running => {
                    self.render_controls(ui, snapshot, command_sender);
                }
            }
        });
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let commands: Vec<SnakeCommand> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => command_for_key(*key),
                    _ => None,
                })
                .collect()
        });

        for command in commands {
            command_sender.send(command);
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &SimulationSnapshot) {
        let grid_size = snapshot.grid_size as f32;
        let board_size = egui::vec2(grid_size * self.cell_size, grid_size * self.cell_size);
        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 8.0, BOARD_COLOR);
        for i in 1..snapshot.grid_size {
            let offset = i as f32 * self.cell_size;
            let stroke = egui::Stroke::new(1.0, GRID_LINE_COLOR);
            painter.line_segment(
                [
                    egui::pos2(rect.min.x + offset, rect.min.y),
                    egui::pos2(rect.min.x + offset, rect.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.min.x, rect.min.y + offset),
                    egui::pos2(rect.max.x, rect.min.y + offset),
                ],
                stroke,
            );
        }

        let food_rect = self.cell_rect(rect.min, snapshot.food);
        painter.circle_filled(food_rect.center(), self.cell_size * 0.35, FOOD_COLOR);

        for (i, segment) in snapshot.snake.iter().enumerate().rev() {
            let color = if i == 0 { HEAD_COLOR } else { SNAKE_COLOR };
            painter.rect_filled(self.cell_rect(rect.min, *segment).shrink(1.5), 3.0, color);
        }
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        let min = egui::pos2(
            origin.x + cell.x as f32 * self.cell_size,
            origin.y + cell.y as f32 * self.cell_size,
        );
        egui::Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size))
    }

    fn render_controls(
        &self,
        ui: &mut egui::Ui,
        snapshot: &SimulationSnapshot,
        command_sender: &CommandSender,
    ) {
        let button_size = egui::vec2(48.0, 40.0);
        let turn_button = |ui: &mut egui::Ui, label: &str, direction: Direction| {
            if ui.add_sized(button_size, egui::Button::new(label)).clicked() {
                command_sender.send(SnakeCommand::Turn(direction));
            }
        };

        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - button_size.x) / 2.0).max(0.0));
            turn_button(ui, "Up", Direction::Up);
        });
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - button_size.x * 3.0) / 2.0).max(0.0));
            turn_button(ui, "Left", Direction::Left);
            turn_button(ui, "Down", Direction::Down);
            turn_button(ui, "Right", Direction::Right);
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - 200.0) / 2.0).max(0.0));
            let pause_label = if snapshot.state == SimulationState::Paused {
                "Resume (Space)"
            } else {
                "Pause (Space)"
            };
            if ui.button(pause_label).clicked() {
                command_sender.send(SnakeCommand::TogglePause);
            }
            if ui.button("Restart (R)").clicked() {
                command_sender.send(SnakeCommand::Reset);
            }
        });
        ui.label("Arrow keys or WASD to steer");
    }

    fn render_game_over(
        &self,
        ui: &mut egui::Ui,
        snapshot: &SimulationSnapshot,
        game_over: &Option<GameOverNotification>,
        command_sender: &CommandSender,
    ) {
        ui.label(
            egui::RichText::new("GAME OVER")
                .color(egui::Color32::RED)
                .size(28.0)
                .strong(),
        );

        let (score, length) = match game_over {
            Some(notification) => (notification.score, notification.length),
            None => (snapshot.score, snapshot.snake.len()),
        };
        ui.label(format!("Score: {}", score));
        ui.label(format!("Length: {}", length));
        if let Some(reason) = snapshot.end_reason {
            ui.label(
                egui::RichText::new(format!("The snake {}", reason))
                    .small()
                    .color(egui::Color32::GRAY),
            );
        }

        ui.add_space(10.0);
        if ui.button("Play Again (Enter)").clicked() {
            command_sender.send(SnakeCommand::Reset);
        }
    }
}
