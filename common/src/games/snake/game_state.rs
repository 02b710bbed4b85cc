use std::collections::{HashSet, VecDeque};

use crate::games::session_rng::{RandomSource, SessionRng};
use crate::log;
use super::settings::{FOOD_SCORE, SnakeSettings};
use super::types::{Cell, DeathReason, Direction, SimulationState, SnakeCommand, StepOutcome};

/// Read-only view of a simulation handed to the presentation side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSnapshot {
    pub grid_size: usize,
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub score: u32,
    pub state: SimulationState,
    pub end_reason: Option<DeathReason>,
    pub tick: u64,
}

impl SimulationSnapshot {
    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SimulationState::Terminated
    }
}

/// Single-player grid snake.
///
/// The body never overlaps itself and stays inside the grid while the game is
/// running. A step that would break either rule ends the game instead of
/// being applied.
pub struct GridSimulation<R: RandomSource = SessionRng> {
    settings: SnakeSettings,
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    food: Cell,
    direction: Direction,
    pending_direction: Direction,
    score: u32,
    state: SimulationState,
    end_reason: Option<DeathReason>,
    tick: u64,
    rng: R,
}

impl<R: RandomSource> GridSimulation<R> {
    /// `settings` is expected to be validated; a zero grid size panics on the
    /// first food placement.
    pub fn new(settings: SnakeSettings, rng: R) -> Self {
        let start = Self::start_cell(settings.grid_size);
        let mut simulation = Self {
            settings,
            body: VecDeque::from([start]),
            body_set: HashSet::from([start]),
            food: start,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            state: SimulationState::Running,
            end_reason: None,
            tick: 0,
            rng,
        };
        simulation.food = simulation.random_cell();
        simulation
    }

    fn start_cell(grid_size: usize) -> Cell {
        Cell::new(grid_size / 2, grid_size / 2)
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn grid_size(&self) -> usize {
        self.settings.grid_size
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn end_reason(&self) -> Option<DeathReason> {
        self.end_reason
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.state == SimulationState::Running
    }

    /// Buffers `requested` for the next step. A request opposite to the last
    /// accepted direction is dropped, as is any request after the game ended.
    /// Later requests overwrite earlier ones.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.state == SimulationState::Terminated
            || requested.is_opposite(&self.pending_direction)
        {
            return;
        }
        self.pending_direction = requested;
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            SimulationState::Running => SimulationState::Paused,
            SimulationState::Paused => SimulationState::Running,
            SimulationState::Terminated => return,
        };
        log!("Game {:?} at tick {}", self.state, self.tick);
    }

    pub fn reset(&mut self) {
        let start = Self::start_cell(self.settings.grid_size);
        self.body = VecDeque::from([start]);
        self.body_set = HashSet::from([start]);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.state = SimulationState::Running;
        self.end_reason = None;
        self.tick = 0;
        self.food = self.random_cell();
        log!("Game reset, food at {}", self.food);
    }

    pub fn apply(&mut self, command: SnakeCommand) {
        match command {
            SnakeCommand::Turn(direction) => self.set_direction(direction),
            SnakeCommand::TogglePause => self.toggle_pause(),
            SnakeCommand::Reset => self.reset(),
        }
    }

    /// Advances the game by one tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.state != SimulationState::Running {
            return StepOutcome::Skipped;
        }

        self.tick += 1;
        self.direction = self.pending_direction;

        let next_head = match self.calculate_next_head() {
            Ok(cell) => cell,
            Err(reason) => {
                self.state = SimulationState::Terminated;
                self.end_reason = Some(reason);
                log!(
                    "Snake {} at tick {}. Final score: {}, length: {}",
                    reason,
                    self.tick,
                    self.score,
                    self.body.len()
                );
                return StepOutcome::Collided(reason);
            }
        };

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if next_head == self.food {
            self.score += FOOD_SCORE;
            // Food may land on the body; it becomes reachable once the snake moves off it.
            self.food = self.random_cell();
            log!(
                "Ate food at {}. Score: {}, next food at {}",
                next_head,
                self.score,
                self.food
            );
            StepOutcome::Ate
        } else {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
            StepOutcome::Moved
        }
    }

    fn calculate_next_head(&self) -> Result<Cell, DeathReason> {
        let next_head = self
            .head()
            .neighbor(self.direction, self.settings.grid_size)
            .ok_or(DeathReason::WallCollision)?;

        // The tail still counts even though it would move away this tick.
        if self.body_set.contains(&next_head) {
            return Err(DeathReason::SelfCollision);
        }

        Ok(next_head)
    }

    fn random_cell(&mut self) -> Cell {
        let size = self.settings.grid_size;
        let x = self.rng.random_range(0..size);
        let y = self.rng.random_range(0..size);
        Cell::new(x, y)
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            grid_size: self.settings.grid_size,
            snake: self.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            state: self.state,
            end_reason: self.end_reason,
            tick: self.tick,
        }
    }

    #[cfg(test)]
    fn set_body(&mut self, cells: &[(usize, usize)], direction: Direction) {
        self.body = cells.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        self.body_set = self.body.iter().copied().collect();
        self.direction = direction;
        self.pending_direction = direction;
    }

    #[cfg(test)]
    fn set_food(&mut self, x: usize, y: usize) {
        self.food = Cell::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::session_rng::tests::ScriptedRng;

    fn create_simulation(rng_values: &[usize]) -> GridSimulation<ScriptedRng> {
        GridSimulation::new(SnakeSettings::default(), ScriptedRng::new(rng_values))
    }

    fn cells(simulation: &GridSimulation<ScriptedRng>) -> Vec<(usize, usize)> {
        simulation.snake().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_new_starts_at_center_moving_right() {
        let simulation = create_simulation(&[3, 3]);
        assert_eq!(cells(&simulation), vec![(7, 7)]);
        assert_eq!(simulation.food(), Cell::new(3, 3));
        assert_eq!(simulation.direction(), Direction::Right);
        assert_eq!(simulation.score(), 0);
        assert_eq!(simulation.state(), SimulationState::Running);
    }

    #[test]
    fn test_step_moves_without_growing() {
        let mut simulation = create_simulation(&[0, 0]);
        assert_eq!(simulation.step(), StepOutcome::Moved);
        assert_eq!(cells(&simulation), vec![(8, 7)]);
        assert_eq!(simulation.tick(), 1);
    }

    #[test]
    fn test_eating_grows_scores_and_places_food_from_source() {
        let mut simulation = create_simulation(&[8, 7, 2, 11]);
        assert_eq!(simulation.step(), StepOutcome::Ate);
        assert_eq!(cells(&simulation), vec![(8, 7), (7, 7)]);
        assert_eq!(simulation.score(), 10);
        assert_eq!(simulation.food(), Cell::new(2, 11));

        assert_eq!(simulation.step(), StepOutcome::Moved);
        assert_eq!(cells(&simulation), vec![(9, 7), (8, 7)]);
        assert_eq!(simulation.score(), 10);
    }

    #[test]
    fn test_score_increases_by_ten_per_food() {
        let mut simulation = create_simulation(&[8, 7, 9, 7, 10, 7, 0, 0]);
        let mut last_score = 0;
        for expected in [10, 20, 30] {
            simulation.step();
            assert_eq!(simulation.score(), expected);
            assert!(simulation.score() >= last_score);
            last_score = simulation.score();
        }
        assert_eq!(simulation.snake().len(), 4);
    }

    #[test]
    fn test_food_may_land_on_body() {
        let mut simulation = create_simulation(&[8, 7, 7, 7]);
        simulation.step();
        assert_eq!(simulation.food(), Cell::new(7, 7));
        assert!(simulation.snake().contains(&Cell::new(7, 7)));

        assert_eq!(simulation.step(), StepOutcome::Moved);
        assert_eq!(cells(&simulation), vec![(9, 7), (8, 7)]);
        assert_eq!(simulation.food(), Cell::new(7, 7));
        assert_eq!(simulation.state(), SimulationState::Running);
    }

    #[test]
    fn test_reverse_direction_is_rejected() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_direction(Direction::Left);
        assert_eq!(simulation.pending_direction(), Direction::Right);
        simulation.step();
        assert_eq!(simulation.head(), Cell::new(8, 7));
    }

    #[test]
    fn test_turn_applies_on_next_step() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_direction(Direction::Down);
        assert_eq!(simulation.direction(), Direction::Right);
        simulation.step();
        assert_eq!(simulation.direction(), Direction::Down);
        assert_eq!(simulation.head(), Cell::new(7, 8));
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_direction(Direction::Up);
        simulation.set_direction(Direction::Left);
        assert_eq!(simulation.pending_direction(), Direction::Left);
        simulation.step();
        assert_eq!(simulation.direction(), Direction::Left);
        assert_eq!(simulation.head(), Cell::new(6, 7));
    }

    #[test]
    fn test_turn_opposite_to_pending_is_dropped() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_direction(Direction::Up);
        simulation.set_direction(Direction::Down);
        assert_eq!(simulation.pending_direction(), Direction::Up);
        simulation.step();
        assert_eq!(simulation.head(), Cell::new(7, 6));
    }

    #[test]
    fn test_wall_collision_terminates_without_moving() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_body(&[(14, 7)], Direction::Right);
        let before = simulation.snapshot();

        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(simulation.state(), SimulationState::Terminated);
        assert_eq!(simulation.end_reason(), Some(DeathReason::WallCollision));
        assert_eq!(simulation.snapshot().snake, before.snake);
        assert_eq!(simulation.food(), before.food);
        assert_eq!(simulation.score(), before.score);
    }

    #[test]
    fn test_wall_collision_on_top_and_left_edges() {
        let mut simulation = create_simulation(&[5, 5]);
        simulation.set_body(&[(0, 3)], Direction::Left);
        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::WallCollision)
        );

        simulation.reset();
        simulation.set_body(&[(3, 0)], Direction::Up);
        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::WallCollision)
        );
    }

    #[test]
    fn test_self_collision_terminates() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_body(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)], Direction::Left);
        simulation.set_direction(Direction::Down);

        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::SelfCollision)
        );
        assert_eq!(simulation.state(), SimulationState::Terminated);
        assert_eq!(
            cells(&simulation),
            vec![(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]
        );
    }

    #[test]
    fn test_moving_into_tail_cell_collides() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_body(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Left);
        simulation.set_direction(Direction::Down);

        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_terminated_ignores_steps_turns_and_pause() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.set_body(&[(14, 7)], Direction::Right);
        simulation.step();
        let tick = simulation.tick();

        simulation.set_direction(Direction::Up);
        assert_eq!(simulation.pending_direction(), Direction::Right);
        simulation.toggle_pause();
        assert_eq!(simulation.state(), SimulationState::Terminated);
        assert_eq!(simulation.step(), StepOutcome::Skipped);
        assert_eq!(simulation.tick(), tick);
    }

    #[test]
    fn test_paused_step_is_skipped() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.toggle_pause();
        assert_eq!(simulation.step(), StepOutcome::Skipped);
        assert_eq!(cells(&simulation), vec![(7, 7)]);
        assert_eq!(simulation.tick(), 0);
    }

    #[test]
    fn test_turn_while_paused_is_kept() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.toggle_pause();
        simulation.set_direction(Direction::Up);
        simulation.toggle_pause();
        simulation.step();
        assert_eq!(simulation.head(), Cell::new(7, 6));
    }

    #[test]
    fn test_double_toggle_pause_is_identity() {
        let mut simulation = create_simulation(&[8, 7, 1, 1]);
        simulation.step();
        let before = simulation.snapshot();

        simulation.toggle_pause();
        assert_eq!(simulation.state(), SimulationState::Paused);
        simulation.toggle_pause();

        assert_eq!(simulation.snapshot(), before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut simulation = create_simulation(&[8, 7, 9, 7, 4, 9]);
        simulation.step();
        simulation.step();
        simulation.set_direction(Direction::Up);
        simulation.set_body(&[(0, 0), (1, 0), (2, 0)], Direction::Up);
        simulation.step();
        assert_eq!(simulation.state(), SimulationState::Terminated);

        simulation.reset();

        assert_eq!(simulation.snake().len(), 1);
        assert_eq!(simulation.head(), Cell::new(7, 7));
        assert_eq!(simulation.score(), 0);
        assert_eq!(simulation.state(), SimulationState::Running);
        assert_eq!(simulation.direction(), Direction::Right);
        assert_eq!(simulation.end_reason(), None);
        assert_eq!(simulation.tick(), 0);
        assert!(simulation.food().is_within(15));
    }

    #[test]
    fn test_reset_from_paused_runs() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.toggle_pause();
        simulation.reset();
        assert_eq!(simulation.state(), SimulationState::Running);
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut simulation = create_simulation(&[0, 0]);
        simulation.apply(SnakeCommand::Turn(Direction::Down));
        assert_eq!(simulation.pending_direction(), Direction::Down);
        simulation.apply(SnakeCommand::TogglePause);
        assert_eq!(simulation.state(), SimulationState::Paused);
        simulation.apply(SnakeCommand::Reset);
        assert_eq!(simulation.state(), SimulationState::Running);
        assert_eq!(simulation.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_custom_grid_size() {
        let settings = SnakeSettings {
            grid_size: 6,
            ..SnakeSettings::default()
        };
        let mut simulation = GridSimulation::new(settings, ScriptedRng::new(&[0, 0]));
        assert_eq!(simulation.head(), Cell::new(3, 3));
        simulation.step();
        simulation.step();
        assert_eq!(
            simulation.step(),
            StepOutcome::Collided(DeathReason::WallCollision)
        );
        assert_eq!(simulation.head(), Cell::new(5, 3));
    }

    #[test]
    fn test_running_invariants_hold_over_random_play() {
        let mut simulation = GridSimulation::new(SnakeSettings::default(), SessionRng::new(42));
        let mut turns = SessionRng::new(7);

        for _ in 0..5_000 {
            let direction = Direction::ALL[turns.random_range(0..4)];
            simulation.set_direction(direction);

            let length_before = simulation.snake().len();
            let score_before = simulation.score();
            let outcome = simulation.step();

            match outcome {
                StepOutcome::Ate => {
                    assert_eq!(simulation.snake().len(), length_before + 1);
                    assert_eq!(simulation.score(), score_before + FOOD_SCORE);
                }
                StepOutcome::Moved => {
                    assert_eq!(simulation.snake().len(), length_before);
                    assert_eq!(simulation.score(), score_before);
                }
                StepOutcome::Collided(_) => {
                    assert_eq!(simulation.snake().len(), length_before);
                    simulation.reset();
                    continue;
                }
                StepOutcome::Skipped => unreachable!("simulation is always running here"),
            }

            let snake = simulation.snake();
            assert!(snake.iter().all(|c| c.is_within(15)));
            let distinct: HashSet<Cell> = snake.iter().copied().collect();
            assert_eq!(distinct.len(), snake.len());
            assert!(simulation.food().is_within(15));
        }
    }
}
