use super::types::{DeathReason, FieldSize, Point};

/// Logical state after a step, head first.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub body: Vec<Point>,
    pub food: Point,
    pub score: u32,
    pub game_over: bool,
    pub death_reason: Option<DeathReason>,
    pub steps: u64,
}

impl GameSnapshot {
    pub fn length(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    Continued(GameSnapshot),
    GameOver(GameSnapshot),
    /// The game was already over, nothing changed.
    Halted,
}

impl StepResult {
    pub fn snapshot(&self) -> Option<&GameSnapshot> {
        match self {
            StepResult::Continued(snapshot) | StepResult::GameOver(snapshot) => Some(snapshot),
            StepResult::Halted => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        !matches!(self, StepResult::Continued(_))
    }
}

/// Continuous position in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
}

impl RenderPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Nearest grid cell.
    pub fn to_cell(self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Point> for RenderPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x as f64, point.y as f64)
    }
}

/// Linear blend between two grid positions.
pub fn lerp(previous: Point, current: Point, t: f64) -> RenderPoint {
    let previous = RenderPoint::from(previous);
    let current = RenderPoint::from(current);
    RenderPoint::new(
        previous.x + (current.x - previous.x) * t,
        previous.y + (current.y - previous.y) * t,
    )
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub segments: Vec<RenderPoint>,
    pub food: Point,
    pub score: u32,
    pub game_over: bool,
    pub step_fraction: f64,
    pub field_size: FieldSize,
}

/// Maps grid coordinates to drawable space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f64,
    pub margin: f64,
}

impl BoardLayout {
    pub const DEFAULT_CELL_SIZE: f64 = 30.0;
    pub const DEFAULT_MARGIN: f64 = 20.0;

    pub fn new(field_size: FieldSize, cell_size: f64, margin: f64) -> Self {
        Self {
            columns: field_size.width,
            rows: field_size.height,
            cell_size,
            margin,
        }
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.margin, self.margin)
    }

    /// Center of the cell at `point`.
    pub fn screen_point(&self, point: RenderPoint) -> (f64, f64) {
        let (origin_x, origin_y) = self.origin();
        (
            origin_x + (point.x + 0.5) * self.cell_size,
            origin_y + (point.y + 0.5) * self.cell_size,
        )
    }

    pub fn board_size(&self) -> (f64, f64) {
        (
            self.columns as f64 * self.cell_size,
            self.rows as f64 * self.cell_size,
        )
    }

    pub fn scene_size(&self) -> (f64, f64) {
        let (width, height) = self.board_size();
        (width + 2.0 * self.margin, height + 2.0 * self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let previous = Point::new(3, 4);
        let current = Point::new(4, 4);
        assert_eq!(lerp(previous, current, 0.0), RenderPoint::new(3.0, 4.0));
        assert_eq!(lerp(previous, current, 1.0), RenderPoint::new(4.0, 4.0));
    }

    #[test]
    fn test_lerp_stays_on_segment() {
        let previous = Point::new(10, 10);
        let current = Point::new(10, 9);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let p = lerp(previous, current, t);
            assert_eq!(p.x, 10.0);
            assert!((9.0..=10.0).contains(&p.y));
            assert!((p.y - (10.0 - t)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_screen_point_is_cell_center() {
        let layout = BoardLayout::new(FieldSize::new(20, 20), 30.0, 20.0);
        assert_eq!(layout.screen_point(RenderPoint::new(0.0, 0.0)), (35.0, 35.0));
        assert_eq!(layout.screen_point(RenderPoint::new(10.0, 2.0)), (335.0, 95.0));
        assert_eq!(layout.scene_size(), (640.0, 640.0));
    }

    #[test]
    fn test_halted_has_no_snapshot() {
        assert!(StepResult::Halted.snapshot().is_none());
        assert!(StepResult::Halted.is_game_over());
    }
}
