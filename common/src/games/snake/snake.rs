use std::collections::{HashSet, VecDeque};

use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub death_reason: Option<DeathReason>,
}

impl Snake {
    pub fn new(start_pos: Point, direction: Direction) -> Self {
        Self::from_body([start_pos], direction)
    }

    /// Builds a snake from segments given head first. Duplicate cells are dropped.
    pub fn from_body(segments: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        for segment in segments {
            if body_set.insert(segment) {
                body.push_back(segment);
            }
        }

        Self {
            body,
            body_set,
            direction,
            pending_direction: None,
            death_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn positions(&self) -> Vec<Point> {
        self.body.iter().copied().collect()
    }

    /// Promotes the pending direction to the active one.
    pub fn apply_pending_direction(&mut self) {
        if let Some(new_direction) = self.pending_direction.take() {
            self.direction = new_direction;
        }
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake_is_single_segment() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right);
        assert_eq!(snake.positions(), vec![Point::new(10, 10)]);
        assert!(snake.is_alive());
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_push_and_pop_keep_set_in_sync() {
        let mut snake = Snake::new(Point::new(1, 1), Direction::Right);
        snake.push_head(Point::new(2, 1));
        assert!(snake.occupies(&Point::new(2, 1)));
        assert_eq!(snake.pop_tail(), Some(Point::new(1, 1)));
        assert!(!snake.occupies(&Point::new(1, 1)));
        assert_eq!(snake.body.len(), snake.body_set.len());
    }

    #[test]
    fn test_apply_pending_direction_clears_it() {
        let mut snake = Snake::new(Point::new(1, 1), Direction::Right);
        snake.pending_direction = Some(Direction::Up);
        snake.apply_pending_direction();
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_from_body_drops_duplicates() {
        let snake = Snake::from_body(
            [Point::new(1, 1), Point::new(1, 2), Point::new(1, 1)],
            Direction::Up,
        );
        assert_eq!(snake.len(), 2);
    }
}
