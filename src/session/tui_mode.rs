//! TUI mode execution

use super::SessionData;
use super::messages::{print_session_exit_success, print_session_shutdown, print_session_starting};
use crate::ui;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the dashboard in the terminal.
///
/// Raw mode and the alternate screen are entered up front and restored before
/// any error from the render loop is reported, so the shell comes back usable
/// either way. Worker handles are awaited after the terminal is released.
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.environment);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = ui::App::new(
        session.environment.clone(),
        session.event_receiver,
        session.shutdown_sender.clone(),
    );
    let result = ui::run(&mut terminal, app).await;

    // Restore the terminal before propagating the loop's result.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result?;

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
