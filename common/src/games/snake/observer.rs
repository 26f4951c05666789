/// Receives score and game-over after every logical step and on reset.
///
/// Called on whatever thread drives the session; forwarding to a UI thread is
/// up to the implementor.
pub trait SnakeObserver {
    fn on_update(&mut self, score: u32, game_over: bool);
}

impl<F> SnakeObserver for F
where
    F: FnMut(u32, bool),
{
    fn on_update(&mut self, score: u32, game_over: bool) {
        self(score, game_over)
    }
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl SnakeObserver for NoopObserver {
    fn on_update(&mut self, _score: u32, _game_over: bool) {}
}
