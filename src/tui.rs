use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use ratatui::{DefaultTerminal, Terminal, prelude::CrosstermBackend};

use anyhow::Result;

/// Initializes the terminal in raw mode and alternate screen, with mouse
/// capture so that pills and thumbnails can be clicked.
///
/// Returns a [`DefaultTerminal`] that must later be passed to [`restore`].
pub fn init() -> Result<DefaultTerminal> {
    if !io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("cardapio browse requires an interactive terminal");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(error) =
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    {
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
        return Err(error.into());
    }

    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(error) => {
            let _ = execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture
            );
            let _ = disable_raw_mode();
            Err(error.into())
        }
    }
}

/// Combines the result of the menu loop with the result of [`restore`].
///
/// A loop error wins; a restore failure after it is only logged.
pub fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Err(error), Err(restore_error)) => {
            tracing::error!(error = %restore_error, "Failed to restore terminal");
            Err(error)
        }
        (Err(error), Ok(())) => Err(error),
        (Ok(()), restore) => restore,
    }
}

/// Restores the terminal to its normal mode and leaves the alternate screen.
pub fn restore(mut terminal: DefaultTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
