use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{error::Error, fs, io, sync::Mutex};
use tracing_subscriber::EnvFilter;

mod actions;
mod app;
mod calendar;
mod config;
mod entry_index;
mod error;
mod grid;
mod input;
mod models;
mod month_window;
mod navigator;
mod runtime;
mod storage;
mod ui;
mod viewport;

use app::App;
use config::Config;

const LOG_FILTER_ENV: &str = "JOURNAL_CAL_LOG";
const LOG_FILE_NAME: &str = "journal-cal.log";

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    // Config errors abort before raw mode.
    let config = Config::load().inspect_err(|err| tracing::error!(%err, "invalid config"))?;
    let mut app = App::new(config).inspect_err(|err| tracing::error!(%err, "invalid config"))?;
    tracing::info!(entries = app.entries.len(), "starting");

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Keyboard enhancement flags may fail on unsupported terminals; nothing depends on them.
    let _ = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    );

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "terminal loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        runtime::tick(app);

        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            input::handle_event(app, event::read()?);
        }

        if app.should_quit {
            tracing::info!("quit");
            return Ok(());
        }
    }
}

/// Logs go to a file in the data directory; the terminal is in raw mode.
/// Without a writable log file the app runs unlogged.
fn init_logging() {
    let dir = config::default_data_dir();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
