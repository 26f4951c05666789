use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::snapshot::{GameSnapshot, StepResult};
use super::types::{DeathReason, Direction, FieldSize, Point};

const START_DIRECTION: Direction = Direction::Right;
const FALLBACK_FOOD: Point = Point { x: 0, y: 0 };

pub struct SnakeGameState {
    pub snake: Snake,
    pub food: Point,
    pub score: u32,
    pub field_size: FieldSize,
    pub score_per_food: u32,
    pub steps: u64,
    rng: SessionRng,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSessionSettings, rng: SessionRng) -> Self {
        let field_size = settings.field_size();
        let mut state = Self {
            snake: Snake::new(field_size.center(), START_DIRECTION),
            food: FALLBACK_FOOD,
            score: 0,
            field_size,
            score_per_food: settings.score_per_food,
            steps: 0,
            rng,
        };
        state.spawn_food();
        state
    }

    pub fn game_over(&self) -> bool {
        !self.snake.is_alive()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.snake.death_reason
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Queues a turn for the next step. Reversals and turns after death are ignored.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.snake.is_alive() && !direction.is_opposite(&self.snake.direction) {
            self.snake.pending_direction = Some(direction);
        }
    }

    pub fn step(&mut self) -> StepResult {
        if self.game_over() {
            return StepResult::Halted;
        }

        self.snake.apply_pending_direction();

        let Some(head) = self.snake.head() else {
            return self.kill(DeathReason::SelfCollision);
        };
        let next_head = head.moved(self.snake.direction);

        if !self.field_size.contains(next_head) {
            return self.kill(DeathReason::WallCollision);
        }

        if self.snake.occupies(&next_head) {
            return self.kill(DeathReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += self.score_per_food;
            log!(
                "Ate food at ({}, {}). Score: {}, length: {}",
                next_head.x,
                next_head.y,
                self.score,
                self.snake.len()
            );
            self.spawn_food();
        } else {
            self.snake.pop_tail();
        }

        self.steps += 1;
        StepResult::Continued(self.snapshot())
    }

    /// Back to a fresh single-segment snake in the center, whatever happened before.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.field_size.center(), START_DIRECTION);
        self.score = 0;
        self.steps = 0;
        self.spawn_food();
        log!("Game reset, food at ({}, {})", self.food.x, self.food.y);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            body: self.snake.positions(),
            food: self.food,
            score: self.score,
            game_over: self.game_over(),
            death_reason: self.snake.death_reason,
            steps: self.steps,
        }
    }

    fn kill(&mut self, reason: DeathReason) -> StepResult {
        self.snake.death_reason = Some(reason);
        log!(
            "Game over: {:?} after {} steps, score {}",
            reason,
            self.steps,
            self.score
        );
        StepResult::GameOver(self.snapshot())
    }

    fn spawn_food(&mut self) {
        let empty: Vec<Point> = self
            .field_size
            .cells()
            .filter(|cell| !self.snake.occupies(cell))
            .collect();

        self.food = match self.rng.choose(&empty) {
            Some(cell) => *cell,
            None => {
                log!("No empty cell left for food, using ({}, {})", FALLBACK_FOOD.x, FALLBACK_FOOD.y);
                FALLBACK_FOOD
            }
        };
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, body: &[Point], direction: Direction) {
        self.snake = Snake::from_body(body.iter().copied(), direction);
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }
}
