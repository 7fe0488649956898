mod app;
mod ui;

use std::fs::File;
use std::io::{self, stdout, Stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use app::App;
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use tictactoe::Symbol;
use tictactoe_driver::SessionConfig;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use ui::ScreenLayout;

#[derive(Parser)]
struct Args {
    /// Path to a session config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The symbol that is selected at the start, "X" or "O". Overrides the config file.
    #[arg(short, long)]
    default_symbol: Option<Symbol>,

    /// Write log messages to this file. Without it, nothing is logged.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        initialize_logging(path, args.log_level)?;
    }

    let config = SessionConfig::resolve(args.config.as_deref(), args.default_symbol)?;
    info!(default_symbol = %config.default_symbol, "Starting session");
    let mut app = App::new(config.default_symbol);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Restore the terminal before reporting any error
    let result = run(&mut terminal, &mut app);

    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    let state = app.state();
    info!(filled = state.board.num_filled(), "Session ended");
    Ok(result?)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let mut layout: Option<ScreenLayout> = None;
    while !app.should_quit {
        let state = app.state();
        let cursor = app.cursor;
        terminal.draw(|frame| layout = ui::draw(frame, &state, cursor))?;
        handle_events(app, layout.as_ref())?;
    }
    Ok(())
}

fn handle_events(app: &mut App, layout: Option<&ScreenLayout>) -> io::Result<()> {
    if event::poll(std::time::Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => {
                if let Some(layout) = layout {
                    app.handle_mouse(mouse, layout);
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn initialize_logging(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}
