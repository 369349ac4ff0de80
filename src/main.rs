//! Diet TUI - Terminal User Interface for personalized diet plans
//!
//! A Ratatui-based TUI that collects patient details and requests a
//! diet plan from the plan generation service.

mod app;
mod config;
mod service;
mod state;
mod ui;

use anyhow::{Context, Result};
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use service::PlanServiceClient;
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load_or_default();
    let settings = config.service_settings_from_env();
    let client = PlanServiceClient::new(&settings).context("Failed to build HTTP client")?;
    tracing::info!(url = %client.url(), timeout = ?settings.timeout, "Starting diet-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client));
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file under the data dir; the terminal belongs to the UI
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "diet_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file() -> Option<File> {
    let path = TuiConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    File::options().create(true).append(true).open(path).ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply plan requests that settled since the last frame
        app.drain_resolutions();

        // Plan scrolling is bounded by the panel size
        let size = terminal.size()?;
        let (plan_width, plan_height) = ui::plan_viewport(Rect::new(0, 0, size.width, size.height));
        app.state.set_plan_viewport(plan_width, plan_height);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling keeps the spinner moving while a request is pending
        let poll_duration = if app.state.submission.is_pending() {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        app.on_tick();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
