//! Sign-in TUI - terminal sign-in form
//!
//! A Ratatui-based sign-in card with email/phone and password validation,
//! English/Korean labels, light/dark palettes, and submission to a remote
//! account service.

mod account;
mod app;
mod config;
mod keymap;
mod logging;
mod state;
mod ui;
mod validation;

use account::AccountClient;
use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppState;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Poll interval while idle
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Faster polling while the spinner is animating
const BUSY_POLL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; the terminal is not ours to write to once the UI is up
    let log_guard = logging::init(TuiConfig::log_dir().as_deref()).unwrap_or_else(|err| {
        eprintln!("Logging disabled: {err:#}");
        None
    });

    let mut config = TuiConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err:#}");
        TuiConfig::default()
    });
    let client = AccountClient::new(config.endpoint(), config.request_timeout())?;
    tracing::info!(endpoint = client.endpoint(), "account service configured");

    let state = AppState::new(
        config.language.unwrap_or_default(),
        config.theme.unwrap_or_default(),
    );
    let mut app = App::new(state, Arc::new(client));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Remember appearance for the next session
    config.language = Some(app.state.language);
    config.theme = Some(app.state.theme);
    if let Err(err) = config.save() {
        tracing::warn!("Failed to save config: {err:#}");
    }

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Event loop failed: {err:#}");
        // process::exit skips destructors
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.on_tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.state.is_submitting() {
            BUSY_POLL
        } else {
            IDLE_POLL
        };

        // crossterm polling blocks; keep it off the runtime's worker so the
        // submission task can make progress
        let next_event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(poll_duration)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        })?;

        if let Some(Event::Key(key)) = next_event {
            // Windows reports releases too
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
