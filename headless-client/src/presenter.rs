use common::games::snake::{BoardLayout, Point, RenderSnapshot};

const EMPTY_CELL: char = '.';
const HEAD_CELL: char = '@';
const BODY_CELL: char = 'o';
const FOOD_CELL: char = '*';

/// Draws frames as text, top row first.
pub struct TextPresenter {
    layout: BoardLayout,
    last_board: Option<(String, u32, bool)>,
}

impl TextPresenter {
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            last_board: None,
        }
    }

    /// Full frame text, or `None` when the drawn cells, score and status match the last one.
    pub fn frame_if_changed(&mut self, frame: &RenderSnapshot) -> Option<String> {
        let board = self.board_to_string(frame);
        let key = (board, frame.score, frame.game_over);
        if self.last_board.as_ref() == Some(&key) {
            return None;
        }
        let mut out = key.0.clone();
        out.push_str(&self.status_line(frame));
        self.last_board = Some(key);
        Some(out)
    }

    #[cfg(test)]
    fn render_to_string(&self, frame: &RenderSnapshot) -> String {
        let mut out = self.board_to_string(frame);
        out.push_str(&self.status_line(frame));
        out
    }

    fn board_to_string(&self, frame: &RenderSnapshot) -> String {
        let columns = self.layout.columns;
        let rows = self.layout.rows;
        let mut grid = vec![vec![EMPTY_CELL; columns]; rows];

        let mut put = |cell: Point, glyph: char| {
            if cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < columns && (cell.y as usize) < rows {
                grid[cell.y as usize][cell.x as usize] = glyph;
            }
        };

        put(frame.food, FOOD_CELL);
        for segment in frame.segments.iter().skip(1) {
            put(segment.to_cell(), BODY_CELL);
        }
        if let Some(head) = frame.segments.first() {
            put(head.to_cell(), HEAD_CELL);
        }

        let border = format!("+{}+", "-".repeat(columns));
        let mut out = String::with_capacity((columns + 3) * (rows + 3));
        out.push_str(&border);
        out.push('\n');
        for row in grid.iter().rev() {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');
        out
    }

    fn status_line(&self, frame: &RenderSnapshot) -> String {
        let head = frame
            .segments
            .first()
            .map(|head| {
                let (x, y) = self.layout.screen_point(*head);
                format!(" head at ({:.1}, {:.1})", x, y)
            })
            .unwrap_or_default();

        if frame.game_over {
            format!("YOU DIED  score {}{}", frame.score, head)
        } else {
            format!("score {}  length {}{}", frame.score, frame.segments.len(), head)
        }
    }
}
