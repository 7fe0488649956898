use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::Parser;
use tictactoe::{visualize_board, Symbol};
use tictactoe_driver::{Recorder, Session, SessionConfig};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Read requests from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Path to a session config JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The symbol that is selected at the start, "X" or "O". Overrides the config file.
    #[arg(short, long)]
    default_symbol: Option<Symbol>,

    /// Record the session's requests and responses as JSON into this file
    #[arg(short, long)]
    record_to: Option<PathBuf>,

    /// Draw the board on stderr after every change
    #[arg(short, long, default_value_t = false)]
    pretty: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let config = SessionConfig::resolve(args.config.as_deref(), args.default_symbol)?;
    info!(default_symbol = %config.default_symbol, "Starting session");

    let mut recorder = if let Some(path) = args.record_to {
        Some(Recorder::new(path)?)
    } else {
        None
    };

    let mut session = Session::new(&config);
    if args.pretty {
        eprintln!("{}", visualize_board(&session.controller_mut().current_state()));
        session
            .controller_mut()
            .subscribe(|state| eprintln!("{}", visualize_board(state)));
    }

    // Responses go to stdout, logging goes to stderr.
    let reader: Box<dyn BufRead> = match args.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let summary = session.run(reader, io::stdout().lock(), &mut recorder)?;

    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Session finished"
    );
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
