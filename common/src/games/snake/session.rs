use crate::games::SessionRng;
use crate::log;
use super::game_state::SnakeGameState;
use super::interpolation::{InterpolationDriver, TickOutput};
use super::observer::SnakeObserver;
use super::settings::SnakeSessionSettings;
use super::snapshot::{GameSnapshot, RenderSnapshot};
use super::types::Direction;

/// One game: simulation, step driver and the observer told about progress.
pub struct SnakeSession<O: SnakeObserver> {
    state: SnakeGameState,
    driver: InterpolationDriver,
    observer: O,
}

impl<O: SnakeObserver> SnakeSession<O> {
    pub fn create(settings: &SnakeSessionSettings, seed: u64, observer: O) -> Self {
        log!(
            "Creating snake session {}x{}, step {:?}, seed {}",
            settings.field_width,
            settings.field_height,
            settings.step_duration,
            seed
        );
        Self {
            state: SnakeGameState::new(settings, SessionRng::new(seed)),
            driver: InterpolationDriver::new(settings.step_duration),
            observer,
        }
    }

    /// Pushes the initial score to the observer.
    pub fn start(&mut self) {
        self.notify();
    }

    pub fn tick(&mut self, delta_seconds: f64) -> TickOutput {
        let output = self.driver.tick(&mut self.state, delta_seconds);
        if output.step.is_some() {
            self.notify();
        }
        output
    }

    pub fn change_direction(&mut self, direction: Direction) {
        self.state.change_direction(direction);
    }

    pub fn restart(&mut self) {
        self.driver.stop();
        self.state.reset();
        self.driver.restart();
        self.notify();
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn render(&self) -> RenderSnapshot {
        self.driver.render(&self.state)
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.state
    }

    fn notify(&mut self) {
        self.observer
            .on_update(self.state.score, self.state.game_over());
    }
}
