//! Progress notification seam between generation and whatever displays it.

/// Receives periodic progress updates during generation.
pub trait Progress {
    /// `done` items of `total` have been produced so far.
    fn update(&mut self, done: usize, total: usize);

    /// Generation has ended with `done` items kept out of `total` requested.
    fn finish(&mut self, _done: usize, _total: usize) {}
}

/// Discards all notifications.
pub struct Silent;

impl Progress for Silent {
    fn update(&mut self, _done: usize, _total: usize) {}
}
