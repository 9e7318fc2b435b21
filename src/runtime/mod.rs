use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::app::App;
use crate::logging;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let _log_guard = match logging::init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("retag: failed to set up logging, continuing without it: {e}");
            None
        }
    };

    let mut app = App::new(&settings, settings::filename_parser(&settings));

    // CLI argument, then configured root, then ask.
    let root = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.library.root.clone());
    match root {
        Some(dir) => app.browse(&dir),
        None => {
            let cwd = env::current_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            app.open_browse_prompt(cwd);
        }
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("terminal ready");

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);
    if let Err(e) = &run_result {
        error!(error = %e, "event loop failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    run_result
}
