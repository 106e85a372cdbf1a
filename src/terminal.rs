//! Raw mode and the alternate screen, undone when the session is dropped.

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Holds the terminal in raw mode on the alternate screen.
///
/// Dropping the session restores the terminal, so every early return after
/// [`TerminalSession::enter`] leaves the shell usable.
pub struct TerminalSession<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// the cursor hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched; anything already
    /// changed is undone first.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut session = TerminalSession { out, active: true };
        execute!(session.out, EnterAlternateScreen, cursor::Hide)?;
        Ok(session)
    }

    /// Leaves the alternate screen, shows the cursor and disables raw mode.
    /// Only the first call does anything.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, LeaveAlternateScreen, cursor::Show)?;
        disable_raw_mode()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}
