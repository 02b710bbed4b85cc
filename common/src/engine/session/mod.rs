mod snake_session;

use std::future::Future;

use crate::games::snake::{DeathReason, SimulationSnapshot};

pub use snake_session::run_game_loop;

/// Receives everything the tick driver publishes.
pub trait SimulationBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SimulationSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverNotification {
    pub score: u32,
    pub length: usize,
    pub reason: DeathReason,
    pub tick: u64,
}

impl GameOverNotification {
    pub fn from_snapshot(snapshot: &SimulationSnapshot, reason: DeathReason) -> Self {
        Self {
            score: snapshot.score,
            length: snapshot.snake.len(),
            reason,
            tick: snapshot.tick,
        }
    }
}
