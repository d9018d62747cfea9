pub mod event_loop;
pub mod search;
pub mod state;
pub mod theme;
pub mod view;

use std::io;

use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::config::AppConfig;
use crate::rows::RowSet;
use crate::tui::state::App;

pub fn run(cfg: AppConfig) -> Result<()> {
    let rows = match &cfg.rows_file {
        Some(path) => RowSet::from_file(path)?,
        None => RowSet::sample(),
    };
    info!(rows = rows.len(), "loaded rows");
    let mut app = App::new(&cfg, rows);

    struct TuiGuard;
    impl Drop for TuiGuard {
        fn drop(&mut self) {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();
        }
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let _guard = TuiGuard;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    app.event_loop(&mut terminal)
}
