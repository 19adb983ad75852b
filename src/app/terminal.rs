use std::io::{self, Stdout};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};

static RESTORE_ON_PANIC: Once = Once::new();

/// Owns the alternate screen for the lifetime of a form session.
///
/// Raw mode is left again on drop, and also when the process panics mid-draw.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave_screen();
                return Err(err).context("failed to initialize terminal");
            }
        };
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave_screen();
                previous(info);
            }));
        });
        log::debug!("entered alternate screen");
        Ok(Self { terminal })
    }

    pub fn render(&mut self, paint: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(paint)
            .context("failed to draw form")?;
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        log::debug!("terminal resized to {width}x{height}");
        self.terminal
            .resize(Rect::new(0, 0, width, height))
            .context("failed to resize terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave_screen();
        log::debug!("left alternate screen");
    }
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
