//! Raw mode + alternate screen, restored on drop

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Terminal cleanup guard.
///
/// Created before the alternate screen is entered, so a failure anywhere
/// after raw mode is on still leaves the shell usable.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        Self::enter_with(out, true)
    }

    fn enter_with(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let mut guard = Self { out, raw_mode };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            tracing::warn!(error = %e, "Failed to restore terminal");
        }
    }
}
