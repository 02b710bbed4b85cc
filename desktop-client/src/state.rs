use arcade_common::{GameOverNotification, SimulationSnapshot};
use eframe::egui;
use std::sync::{Arc, Mutex};

/// State shared between the game loop thread and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    snapshot: Arc<Mutex<Option<SimulationSnapshot>>>,
    game_over: Arc<Mutex<Option<GameOverNotification>>>,
    repaint_context: Arc<Mutex<Option<egui::Context>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_snapshot(&self, snapshot: SimulationSnapshot) {
        if !snapshot.is_terminated() {
            *self.game_over.lock().unwrap() = None;
        }
        *self.snapshot.lock().unwrap() = Some(snapshot);
        self.request_repaint();
    }

    pub fn get_snapshot(&self) -> Option<SimulationSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_game_over(&self, notification: GameOverNotification) {
        *self.game_over.lock().unwrap() = Some(notification);
        self.request_repaint();
    }

    pub fn get_game_over(&self) -> Option<GameOverNotification> {
        self.game_over.lock().unwrap().clone()
    }

    pub fn set_repaint_context(&self, ctx: egui::Context) {
        *self.repaint_context.lock().unwrap() = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = self.repaint_context.lock().unwrap().as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
        self.request_repaint();
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }
}
