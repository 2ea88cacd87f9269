//! Fair RPS
//!
//! Interactive provably-fair rock-paper-scissors.
//! Moves come from the command line; rounds are played on stdin/stdout.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fair_rps::{
    config::DEFAULT_LOG_FILTER, game::moves::USAGE_EXAMPLE, GameConfig, MoveSet, OsEntropy,
    RoundController, SessionSummary, Shell, VERSION,
};

/// Provably-fair rock-paper-scissors over any odd number of unique moves.
#[derive(Parser, Debug)]
#[command(name = "fair-rps", version, about)]
struct Args {
    /// Move names, e.g. `rock paper scissors`. Odd count, at least 3, unique.
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);
    info!("Fair RPS v{}", VERSION);

    let moves = match MoveSet::new(args.moves) {
        Ok(moves) => moves,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: fair-rps <MOVE> <MOVE> <MOVE>...  (e.g. fair-rps {})", USAGE_EXAMPLE);
            return ExitCode::FAILURE;
        }
    };

    match play(moves, &config) {
        Ok(summary) => {
            info!(?summary, "goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

fn play(moves: MoveSet, config: &GameConfig) -> anyhow::Result<SessionSummary> {
    info!(moves = %moves, key_len = config.key_len, "starting session");

    let mut controller = RoundController::with_key_len(moves, OsEntropy, config.key_len)
        .context("could not commit the first round")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    shell.run(&mut controller).context("game session aborted")
}
