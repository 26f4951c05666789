use std::time::Duration;

use super::types::FieldSize;

pub const DEFAULT_FIELD_WIDTH: usize = 20;
pub const DEFAULT_FIELD_HEIGHT: usize = 20;
pub const DEFAULT_SCORE_PER_FOOD: u32 = 10;
pub const DEFAULT_STEP_DURATION: Duration = Duration::from_millis(190);

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub score_per_food: u32,
    pub step_duration: Duration,
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            step_duration: DEFAULT_STEP_DURATION,
        }
    }
}
