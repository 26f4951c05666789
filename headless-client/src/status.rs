use chrono::{DateTime, Local};
use common::games::snake::SnakeObserver;
use common::log;
use ringbuffer::{AllocRingBuffer, RingBuffer};

#[derive(Clone, Debug, PartialEq)]
pub struct StatusEvent {
    pub at: DateTime<Local>,
    pub score: u32,
    pub game_over: bool,
}

/// Keeps the latest score notifications and the best score seen.
pub struct StatusBoard {
    history: AllocRingBuffer<StatusEvent>,
    best_score: u32,
    games_finished: u32,
    last: Option<(u32, bool)>,
}

impl StatusBoard {
    pub fn new(history_size: usize) -> Self {
        Self {
            history: AllocRingBuffer::new(history_size.max(1)),
            best_score: 0,
            games_finished: 0,
            last: None,
        }
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    pub fn current_score(&self) -> u32 {
        self.last.map(|(score, _)| score).unwrap_or(0)
    }

    pub fn history(&self) -> impl Iterator<Item = &StatusEvent> {
        self.history.iter()
    }
}

impl SnakeObserver for StatusBoard {
    fn on_update(&mut self, score: u32, game_over: bool) {
        let previous = self.last.replace((score, game_over));

        self.history.enqueue(StatusEvent {
            at: Local::now(),
            score,
            game_over,
        });
        self.best_score = self.best_score.max(score);

        if game_over && previous.map(|(_, was_over)| !was_over).unwrap_or(true) {
            self.games_finished += 1;
            log!(
                "Game over with score {} (best {}, games {})",
                score,
                self.best_score,
                self.games_finished
            );
        } else if previous.is_some_and(|(last_score, _)| score > last_score) {
            log!("Score: {}", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_best_score_across_games() {
        let mut board = StatusBoard::new(8);
        board.on_update(0, false);
        board.on_update(10, false);
        board.on_update(20, true);
        board.on_update(0, false);
        board.on_update(10, true);
        assert_eq!(board.best_score(), 20);
        assert_eq!(board.games_finished(), 2);
        assert_eq!(board.current_score(), 10);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut board = StatusBoard::new(3);
        for score in 0..10 {
            board.on_update(score * 10, false);
        }
        let scores: Vec<u32> = board.history().map(|event| event.score).collect();
        assert_eq!(scores, vec![70, 80, 90]);
    }

    #[test]
    fn test_repeated_game_over_counts_once() {
        let mut board = StatusBoard::new(4);
        board.on_update(30, true);
        board.on_update(30, true);
        assert_eq!(board.games_finished(), 1);
    }
}
