//! bwtui - Terminal UI for browsing a Bitwarden vault
//!
//! Built with Ratatui and crossterm.

mod app;
mod config;
mod handlers;
mod ui;

use anyhow::{Context, Result};
use bwtui_core::{BitwardenCli, ClipboardSink, Expired, Notifier, Repository, ThreadTimer};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::{App, AppState};
use config::Config;

/// bwtui - Terminal UI for browsing a Bitwarden vault
#[derive(Parser, Debug)]
#[command(name = "bwtui", version)]
#[command(about = "Browse and copy Bitwarden credentials from the terminal")]
struct Args {
    /// Initial filter pattern (case-insensitive regex)
    filter: Option<String>,

    /// Search string passed to `bw list items --search`
    #[arg(long)]
    search: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = Config::load(args.config)?;

    // Load the vault before touching the terminal
    let source = BitwardenCli::new(config.bw_command.clone());
    let repository = Repository::load(&source, args.search.as_deref())
        .context("failed getting items from vault")?;

    let (expired_tx, expired_rx) = mpsc::channel();
    let timer = ThreadTimer::spawn(expired_tx).context("failed to start feedback timer")?;
    let feedback = Notifier::new(Box::new(timer), config.feedback_timeout());
    let mut clipboard = config.clipboard();

    let mut app = App::new(repository, config.keys.clone(), feedback);
    if let Some(filter) = args.filter {
        app.set_filter_text(filter);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app, clipboard.as_mut(), &expired_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to stderr unless a file is given. Only errors are shown on stderr
/// by default since anything written there lands on the alternate screen.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let default_directive = if log_file.is_some() {
        "bwtui=info"
    } else {
        "bwtui=error"
    };
    let filter = EnvFilter::from_default_env().add_directive(default_directive.parse()?);
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            subscriber
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => subscriber.with_writer(io::stderr).init(),
    }

    tracing::info!("Starting bwtui");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    clipboard: &mut dyn ClipboardSink,
    expired: &Receiver<Expired>,
) -> Result<()> {
    loop {
        // Timer expiries are applied here so all state changes stay on this thread
        for expiry in expired.try_iter() {
            app.feedback.expire(expiry);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll with a timeout so expiries are picked up without a key press
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if let Some(effect) = handlers::handle_key(app, key) {
                    handlers::run_effect(app, clipboard, effect);
                }
            }
        }

        if matches!(app.state, AppState::Quit) {
            break;
        }
    }

    tracing::info!("Quitting");
    Ok(())
}
