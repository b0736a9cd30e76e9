//! Terminal mode lifecycle.
//!
//! Raw mode, the alternate screen and mouse capture are switched on by
//! [`TerminalGuard::enter`] and switched back off when the guard drops, so a
//! failed setup step or an early `?` still leaves the shell usable. Panics
//! unwind through the guard too, but the message would be printed on the
//! alternate screen first; [`install_panic_hook`] restores before reporting.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

/// Holds the terminal in raw/alternate-screen mode until dropped.
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W, mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever did get switched on
        let mut guard = TerminalGuard { out, mouse };
        execute!(guard.out, EnterAlternateScreen)?;
        if mouse {
            execute!(guard.out, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("restoring terminal");
        restore(&mut self.out, self.mouse);
    }
}

/// Leave raw mode and the alternate screen and show the cursor again.
///
/// Every step is attempted even if an earlier one fails.
pub fn restore<W: Write>(out: &mut W, mouse: bool) {
    let _ = disable_raw_mode();
    if mouse {
        let _ = execute!(out, DisableMouseCapture);
    }
    let _ = execute!(out, LeaveAlternateScreen, Show);
}

/// Restore the terminal before the default panic message is printed.
pub fn install_panic_hook(mouse: bool) {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(&mut io::stdout(), mouse);
        default_hook(info);
    }));
}
