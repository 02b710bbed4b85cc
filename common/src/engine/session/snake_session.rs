use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::games::session_rng::RandomSource;
use crate::games::snake::{GridSimulation, SimulationSnapshot, SnakeCommand, StepOutcome};
use crate::log;
use super::{GameOverNotification, SimulationBroadcaster};

/// Drives `simulation` until `command_rx` is closed and returns the last state.
///
/// Steps happen once per tick interval and only while the game is running;
/// the first one comes a full interval after start. Commands are applied
/// between steps. Resuming from pause or resetting restarts the interval.
pub async fn run_game_loop<R, B>(
    mut simulation: GridSimulation<R>,
    mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
    broadcaster: B,
) -> SimulationSnapshot
where
    R: RandomSource,
    B: SimulationBroadcaster,
{
    let period = simulation.settings().tick_interval;
    let mut tick_interval_timer = interval_at(Instant::now() + period, period);
    tick_interval_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    log!(
        "Snake loop started: {}x{} grid, {}ms per tick",
        simulation.grid_size(),
        simulation.grid_size(),
        period.as_millis()
    );
    broadcaster.broadcast_state(simulation.snapshot()).await;

    loop {
        tokio::select! {
            _ = tick_interval_timer.tick(), if simulation.is_running() => {
                let outcome = simulation.step();
                let snapshot = simulation.snapshot();

                if let StepOutcome::Collided(reason) = outcome {
                    let notification = GameOverNotification::from_snapshot(&snapshot, reason);
                    broadcaster.broadcast_state(snapshot).await;
                    broadcaster.broadcast_game_over(notification).await;
                } else {
                    broadcaster.broadcast_state(snapshot).await;
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };

                let was_running = simulation.is_running();
                simulation.apply(command);
                if command == SnakeCommand::Reset || (!was_running && simulation.is_running()) {
                    tick_interval_timer.reset();
                }

                broadcaster.broadcast_state(simulation.snapshot()).await;
            }
        }
    }

    log!("Snake loop stopped at tick {}", simulation.tick());
    simulation.snapshot()
}
