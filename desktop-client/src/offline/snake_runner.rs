use arcade_common::{GridSimulation, SessionRng, SnakeCommand, SnakeSettings, log, run_game_loop};
use tokio::sync::mpsc;

use crate::state::SharedState;
use super::LocalBroadcaster;

pub async fn run_snake_game(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
    settings: SnakeSettings,
) {
    let rng = SessionRng::from_random();
    log!("Starting snake game with seed {}", rng.seed());

    let simulation = GridSimulation::new(settings, rng);
    let broadcaster = LocalBroadcaster::new(shared_state);
    let last = run_game_loop(simulation, command_rx, broadcaster).await;

    log!(
        "Snake game closed with score {} after {} ticks",
        last.score,
        last.tick
    );
}
