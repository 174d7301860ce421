//! Raw-mode terminal setup with guaranteed restore.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type CatalogTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was when dropped, or when a panic
/// unwinds past it. Restoring happens at most once.
pub struct TerminalGuard {
    armed: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn arm() -> Self {
        let armed = Arc::new(AtomicBool::new(true));

        let hook_armed = Arc::clone(&armed);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if hook_armed.swap(false, Ordering::SeqCst) {
                restore_terminal();
            }
            previous(info);
        }));

        Self { armed }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed.swap(false, Ordering::SeqCst) {
            restore_terminal();
        }
    }
}

/// Best effort: every step runs even if an earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
}

/// Enter raw mode on the alternate screen with mouse reporting enabled.
pub fn setup_terminal() -> io::Result<(CatalogTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // Armed before the remaining steps so a failure below still restores.
    let guard = TerminalGuard::arm();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    Ok((terminal, guard))
}
