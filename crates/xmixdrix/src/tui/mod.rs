//! Terminal UI: the rendering surface and input layer around the engine.

mod app;
mod input;
mod ui;

pub use app::{App, Control};
pub use ui::{board_cells, cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::Config;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the player quits.
///
/// The terminal is restored before returning, whether the loop ended
/// normally or with an error.
#[instrument(skip_all)]
pub fn run(config: Config) -> Result<()> {
    info!("Starting X Mix Drix TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        disable_raw_mode()?;
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_loop(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        let mut cells = [Rect::default(); 9];
        terminal.draw(|frame| cells = draw(frame, app))?;

        match event::read()? {
            // Release/repeat events are reported on some platforms.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Control::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse, &cells),
            _ => {}
        }
    }
}
