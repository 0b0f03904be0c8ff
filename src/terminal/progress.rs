//! Progress sinks for the CLI: a boxed bar on a terminal, log events otherwise.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{cursor, execute, terminal};
use tracing::{info, warn};

use super::output::{format_number, progress_bar_box};
use crate::pass::Progress;

/// Redraws a 3-line progress bar in place on stdout.
pub struct TerminalProgress {
    started: Instant,
    drawn: bool,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            drawn: false,
        }
    }

    fn draw(&mut self, done: usize, total: usize) -> io::Result<()> {
        let mut out = io::stdout().lock();
        if self.drawn {
            execute!(out, cursor::MoveUp(3))?;
        } else {
            execute!(out, cursor::Hide)?;
            self.drawn = true;
        }

        let pct = done as f32 / total.max(1) as f32 * 100.0;
        let avg = self.started.elapsed().as_secs_f32() / done.max(1) as f32;
        let eta = avg * total.saturating_sub(done) as f32;
        let stats = format!(
            "{} of {} • {:.1}% • ETA: {:.1}s",
            format_number(done),
            format_number(total),
            pct,
            eta
        );
        progress_bar_box(&mut out, pct, &stats)
    }

    fn clear(&mut self) -> io::Result<()> {
        if !self.drawn {
            return Ok(());
        }
        self.drawn = false;
        execute!(
            io::stdout(),
            cursor::MoveUp(3),
            terminal::Clear(terminal::ClearType::FromCursorDown),
            cursor::Show
        )
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for TerminalProgress {
    fn update(&mut self, done: usize, total: usize) {
        if let Err(e) = self.draw(done, total) {
            warn!("progress display failed: {e}");
        }
    }

    fn finish(&mut self, _done: usize, _total: usize) {
        let _ = self.clear();
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        if self.drawn {
            let _ = execute!(io::stdout(), cursor::Show);
            let _ = io::stdout().flush();
        }
    }
}

/// Emits progress as `tracing` events.
pub struct LogProgress;

impl Progress for LogProgress {
    fn update(&mut self, done: usize, total: usize) {
        info!("Progress: {}/{}", format_number(done), format_number(total));
    }

    fn finish(&mut self, done: usize, total: usize) {
        info!("Generated {}/{}", format_number(done), format_number(total));
    }
}
