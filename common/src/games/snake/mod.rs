mod game_state;
mod settings;
mod types;

pub use game_state::{GridSimulation, SimulationSnapshot};
pub use settings::{
    DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL, FOOD_SCORE, MAX_GRID_SIZE, MAX_TICK_INTERVAL,
    MIN_GRID_SIZE, MIN_TICK_INTERVAL, SnakeSettings,
};
pub use types::{Cell, DeathReason, Direction, SimulationState, SnakeCommand, StepOutcome};
