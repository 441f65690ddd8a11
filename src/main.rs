//! Asset TUI - Terminal form for creating portfolio assets
//!
//! A Ratatui-based form that posts new assets to the asset service, plus a
//! one-shot `create` command for scripts.

mod app;
mod cli;
mod config;
mod controller;
mod platform;
mod service;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use controller::{Outcome, SubmitController};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use service::{AssetClient, AssetService};
use state::FormState;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Event poll interval; also how often settled submissions are picked up
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Log file written while the interactive UI owns the terminal
const LOG_FILE_NAME: &str = "asset-tui.log";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the guard flushes the log file on exit
    let log_guard = init_logging(cli.command.is_some());

    let config = AppConfig::load()?;
    let service_url = config.service_url(cli.service_url.as_deref());
    let client = AssetClient::new(&service_url, config.request_timeout())?;
    tracing::info!(endpoint = client.endpoint(), "Using asset service");
    let service: Arc<dyn AssetService> = Arc::new(client);

    if let Some(Commands::Create { name, price }) = cli.command {
        let controller = SubmitController::new(service);
        let created = run_create(&controller, &name, &price).await;
        std::process::exit(if created { 0 } else { 1 });
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(service, service_url);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Headless commands log to stderr. The interactive UI logs to a file, since
/// anything written to the terminal would land on top of the frame.
fn init_logging(headless: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "asset_tui=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if headless {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
        return None;
    }

    let (writer, guard) = log_writer(config::log_dir().as_deref());
    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Some(guard)
}

/// Non-blocking writer for `dir`/`LOG_FILE_NAME`, discarding output when no
/// log file can be opened
fn log_writer(dir: Option<&Path>) -> (NonBlocking, WorkerGuard) {
    let appender = dir.and_then(|dir| {
        fs::create_dir_all(dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(dir)
            .ok()
    });

    match appender {
        Some(appender) => tracing_appender::non_blocking(appender),
        None => tracing_appender::non_blocking(io::sink()),
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up submissions answered since the last frame
        app.poll_settled();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Ignore key release events on platforms that report them
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        // Let spawned submissions make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Create one asset from command line input.
///
/// Prints the service response on success. Returns whether the asset was
/// created.
async fn run_create(controller: &SubmitController, name: &str, price: &str) -> bool {
    let mut form = FormState::new();
    form.set_name(name);
    form.set_price(price);

    match controller.submit_create(&mut form).await {
        Outcome::Success(response) => {
            println!("{response}");
            true
        }
        Outcome::Failure(err) => {
            eprintln!("Error creating asset: {err}");
            false
        }
    }
}
