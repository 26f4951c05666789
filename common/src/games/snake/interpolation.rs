use std::time::Duration;

use super::game_state::SnakeGameState;
use super::snapshot::{RenderSnapshot, StepResult, lerp};
use super::types::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct TickOutput {
    pub render: RenderSnapshot,
    /// Set when this tick ran a logical step.
    pub step: Option<StepResult>,
}

/// Advances the simulation once per elapsed step and blends each segment
/// between its cell before the last step and its current cell.
pub struct InterpolationDriver {
    step_duration: Duration,
    elapsed_fraction: f64,
    previous_positions: Vec<Point>,
    running: bool,
}

impl InterpolationDriver {
    pub fn new(step_duration: Duration) -> Self {
        Self {
            step_duration,
            elapsed_fraction: 0.0,
            previous_positions: Vec::new(),
            running: true,
        }
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn elapsed_fraction(&self) -> f64 {
        self.elapsed_fraction
    }

    pub fn previous_positions(&self) -> &[Point] {
        &self.previous_positions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// No further steps until `restart`. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn restart(&mut self) {
        self.elapsed_fraction = 0.0;
        self.previous_positions.clear();
        self.running = true;
    }

    pub fn tick(&mut self, state: &mut SnakeGameState, delta_seconds: f64) -> TickOutput {
        let mut step = None;

        if self.running && !state.game_over() {
            self.elapsed_fraction += self.progress_for(delta_seconds);

            if self.elapsed_fraction >= 1.0 {
                self.elapsed_fraction = 0.0;
                self.previous_positions = state.snake.positions();

                let result = state.step();
                if result.is_game_over() {
                    self.stop();
                }
                step = Some(result);
            }
        }

        TickOutput {
            render: self.render(state),
            step,
        }
    }

    pub fn render(&self, state: &SnakeGameState) -> RenderSnapshot {
        let segments = state
            .snake
            .body
            .iter()
            .enumerate()
            .map(|(index, current)| {
                let previous = self.previous_positions.get(index).unwrap_or(current);
                lerp(*previous, *current, self.elapsed_fraction)
            })
            .collect();

        RenderSnapshot {
            segments,
            food: state.food,
            score: state.score,
            game_over: state.game_over(),
            step_fraction: self.elapsed_fraction,
            field_size: state.field_size,
        }
    }

    fn progress_for(&self, delta_seconds: f64) -> f64 {
        let step_seconds = self.step_duration.as_secs_f64();
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return 0.0;
        }
        if step_seconds <= 0.0 {
            return 1.0;
        }
        delta_seconds / step_seconds
    }
}
