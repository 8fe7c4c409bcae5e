//! Terminal UI for Strictly River

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use strictly_river::PuzzleConfig;
use tracing::{error, info, instrument};

use app::App;

/// How long to wait for a key when nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the interactive puzzle.
pub fn run_tui(config: PuzzleConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly River TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(failed_attempts = app.failed_attempts(), "Exiting");

    res
}

/// Draw, wait for a key or the next replay tick, repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let interval = app.config().replay_interval();
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &*app))?;

        if app.should_quit() {
            return Ok(());
        }

        let timeout = if app.is_replaying() {
            interval.saturating_sub(last_step.elapsed())
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let was_replaying = app.is_replaying();
            app.handle_key(key.code);
            if app.is_replaying() && !was_replaying {
                last_step = Instant::now();
            }
        }

        if app.is_replaying() && last_step.elapsed() >= interval {
            app.advance_replay();
            last_step = Instant::now();
        }
    }
}
