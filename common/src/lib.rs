pub mod config;
pub mod engine;
pub mod games;
pub mod logger;

pub use engine::session::{GameOverNotification, SimulationBroadcaster, run_game_loop};
pub use games::session_rng::{RandomSource, SessionRng};
pub use games::snake::{
    Cell, DeathReason, Direction, GridSimulation, SimulationSnapshot, SimulationState,
    SnakeCommand, SnakeSettings, StepOutcome,
};
