use arcade_common::{GameOverNotification, SimulationBroadcaster, SimulationSnapshot};
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SimulationBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SimulationSnapshot) {
        self.shared_state.update_snapshot(snapshot);
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.shared_state.set_game_over(notification);
    }
}
