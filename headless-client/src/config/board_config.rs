use common::config::Validate;
use common::games::snake::{BoardLayout, FieldSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub cell_size: f64,
    pub margin: f64,
}

impl BoardConfig {
    pub fn layout(&self, field_size: FieldSize) -> BoardLayout {
        BoardLayout::new(field_size, self.cell_size, self.margin)
    }
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err("cell_size must be positive".to_string());
        }
        if self.margin.is_nan() || self.margin < 0.0 {
            return Err("margin must not be negative".to_string());
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cell_size: BoardLayout::DEFAULT_CELL_SIZE,
            margin: BoardLayout::DEFAULT_MARGIN,
        }
    }
}
