use std::time::Duration;

use common::config::Validate;
use common::games::snake::{
    DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_SCORE_PER_FOOD, DEFAULT_STEP_DURATION,
    SnakeSessionSettings,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub columns: u32,
    pub rows: u32,
    pub step_duration_ms: u32,
    pub score_per_food: u32,
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.columns < 5 || self.rows < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.columns > 100 || self.rows > 100 {
            return Err("field dimensions must not exceed 100x100".to_string());
        }
        if self.step_duration_ms < 50 {
            return Err("step_duration_ms must be at least 50".to_string());
        }
        if self.step_duration_ms > 2000 {
            return Err("step_duration_ms must not exceed 2000".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_FIELD_WIDTH as u32,
            rows: DEFAULT_FIELD_HEIGHT as u32,
            step_duration_ms: DEFAULT_STEP_DURATION.as_millis() as u32,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
        }
    }
}

impl From<&SnakeConfig> for SnakeSessionSettings {
    fn from(cfg: &SnakeConfig) -> Self {
        Self {
            field_width: cfg.columns as usize,
            field_height: cfg.rows as usize,
            score_per_food: cfg.score_per_food,
            step_duration: Duration::from_millis(cfg.step_duration_ms as u64),
        }
    }
}
