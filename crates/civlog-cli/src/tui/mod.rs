//! Terminal session for `civlog close`.
//!
//! The renderer owns only presentation state (column scroll, quit flag); all
//! page state lives in the partitioner and is read back through snapshots.

mod app;
mod mapper;
mod ui;

pub use app::CloseApp;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the interactive session until the operator quits, then hand the app
/// back so the caller can report what was closed.
pub fn run(mut app: CloseApp) -> Result<CloseApp> {
    // Installed before the terminal is touched so a failure leaves it as is
    ctrlc::set_handler(move || {
        let _ = restore_terminal();
        std::process::exit(130);
    })?;

    enable_raw_mode()?;
    let result = session(&mut app);
    let restored = restore_terminal();

    result?;
    restored?;
    Ok(app)
}

fn session(app: &mut CloseApp) -> Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    event_loop(&mut terminal, app)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut CloseApp,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && let Some(input) = mapper::key_input(&key)
        {
            app.handle_input(input);
        }
    }
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use civlog_engine::PagePartitioner;

    #[test]
    fn test_handler_failure_leaves_terminal_alone() {
        // only one handler per process: the session's own install must fail
        ctrlc::set_handler(|| {}).unwrap();

        let app = CloseApp::new(PagePartitioner::new(Vec::new(), 10), "voos.csv");
        assert!(run(app).is_err());
        assert!(!crossterm::terminal::is_raw_mode_enabled().unwrap());
    }
}
