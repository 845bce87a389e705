mod app;
mod config;
mod domain;
mod input;
mod logging;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use config::{AppConfig, ConfigOverrides};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{format_day_label, trip_dates};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "trip")]
#[command(about = "A terminal trip planner for logging vacation activities and costs", long_about = None)]
struct Cli {
    /// Path to a JSON config file. Defaults to ~/.config/trip-organizer/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Title shown in the header
    #[arg(long, global = true)]
    title: Option<String>,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long, global = true)]
    end: Option<String>,

    /// Log file path. Defaults to ~/.cache/trip-organizer/trip.log
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every day of the trip window
    Dates,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        title: cli.title.clone(),
        start: cli.start.clone(),
        end: cli.end.clone(),
    };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)?;

    match cli.command {
        Some(Commands::Dates) => {
            println!("{} ({})", config.title, config.trip.range_label());
            for date in trip_dates(&config.trip) {
                println!("{}  {}", date.format("%Y-%m-%d"), format_day_label(date));
            }
            Ok(())
        }
        None => {
            if let Some(log_path) = cli.log_file.or_else(logging::default_log_path) {
                logging::init(&log_path)?;
            }
            run_tui(config)
        }
    }
}

fn run_tui(config: AppConfig) -> Result<()> {
    info!(title = %config.title, start = %config.trip.start, end = %config.trip.end, "starting trip organizer");

    let mut app = AppState::new(config);

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(
        activities = app.store.len(),
        total = app.total_cost(),
        "session ended"
    );

    if let Err(err) = &result {
        error!(%err, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        // Only process key press events (ignore key release)
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if input::is_external_edit_key(app, &key) {
            // Hand the terminal to $EDITOR, then take it back
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

            let edited = input::edit_notes_external(app);

            enable_raw_mode()?;
            execute!(terminal.backend_mut(), EnterAlternateScreen)?;
            terminal.clear()?;

            if let Err(err) = edited {
                error!(%err, "failed to edit notes externally");
            }
            continue;
        }

        if input::handle_key(app, key)? {
            return Ok(());
        }
    }
}
