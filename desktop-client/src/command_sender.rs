use arcade_common::{SnakeCommand, log};
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<SnakeCommand>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<SnakeCommand>) -> Self {
        Self { tx }
    }

    pub fn send(&self, command: SnakeCommand) {
        if let Err(e) = self.tx.send(command) {
            log!("Failed to send command {:?}: {}", e.0, e);
        }
    }
}
