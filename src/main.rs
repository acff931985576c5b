mod app;
mod config;
mod domain;
mod engine;
mod input;
mod logging;
mod notifications;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use config::{
    config_file, ensure_pomodoro_dir, init_local_dir, load_settings, log_file, save_settings,
    Settings,
};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use domain::{format_clock, Mode};
use engine::{IntervalScheduler, TimerEngine};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A terminal pomodoro timer with focus, short break and long break sessions", long_about = None)]
struct Cli {
    /// Mode to load at startup (focus, short or long). Overrides config.json.
    #[arg(short, long)]
    mode: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomodoro directory with a default config.json
    Init,
    /// List the available modes and their durations
    Modes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir()?;
            let dir = init_local_dir(&current_dir)?;
            save_settings(config_file(&dir), &Settings::default())?;
            println!("Initialized pomodoro directory: {}", dir.display());
            println!("Edit {} to change the start mode and alerts.", config_file(&dir).display());
            Ok(())
        }
        Some(Commands::Modes) => {
            for mode in Mode::all() {
                println!(
                    "{:<6} {:<12} {}",
                    mode.to_tag(),
                    mode.name(),
                    format_clock(mode.duration_secs())
                );
            }
            Ok(())
        }
        None => run_tui(cli.mode),
    }
}

fn run_tui(mode_override: Option<String>) -> Result<()> {
    let dir = ensure_pomodoro_dir()?;
    if let Err(e) = logging::init(&log_file(&dir)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let settings = load_settings(config_file(&dir))?;
    // Reject bad modes before the terminal is taken over
    let start_mode = match mode_override {
        Some(tag) => Mode::from_tag(&tag)?,
        None => settings.start_mode()?,
    };
    let engine = TimerEngine::with_mode(start_mode, IntervalScheduler::new());
    tracing::info!(mode = %start_mode, time_left = engine.time_left(), "starting pomodoro");

    let mut app = AppState::new(engine, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "pomodoro exited with an error");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let poll_rate = app.settings.poll_interval();

    loop {
        // Apply any seconds that elapsed since the last pass
        app.update();

        if let Some(title) = app.take_title() {
            execute!(terminal.backend_mut(), SetTitle(title))?;
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}
