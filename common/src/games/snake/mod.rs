mod game_state;
mod interpolation;
mod observer;
mod session;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use game_state::SnakeGameState;
pub use interpolation::{InterpolationDriver, TickOutput};
pub use observer::{NoopObserver, SnakeObserver};
pub use session::SnakeSession;
pub use settings::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_SCORE_PER_FOOD, DEFAULT_STEP_DURATION,
    SnakeSessionSettings,
};
pub use snake::Snake;
pub use snapshot::{BoardLayout, GameSnapshot, RenderPoint, RenderSnapshot, StepResult, lerp};
pub use types::{DeathReason, Direction, FieldSize, Point};
