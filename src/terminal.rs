//! Raw-mode / alternate-screen handling for the interactive session.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

pub type SessionTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal for the length of a session and hands it back on drop.
pub struct TerminalSession {
    terminal: SessionTerminal,
    restored: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        debug!("entered alternate screen");

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout))?,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut SessionTerminal {
        &mut self.terminal
    }

    /// Leave raw mode explicitly so errors surface to the caller.
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        leave()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            let _ = leave();
        }
    }
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    debug!("left alternate screen");
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = leave();
        original_hook(panic_info);
    }));
}
