//! Console referee.
//!
//! Reads one round per line (`<user> <opponent>`) from stdin or a script
//! file and prints each round and the final result.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rps_referee::driver::{run_match, JsonPresenter, LineMoveSource, Presenter, TextPresenter};
use rps_referee::{MatchConfig, MatchEngine, MoveSource};
use tracing_subscriber::EnvFilter;

/// Rock-Paper-Scissors-Plus referee
#[derive(Parser)]
#[command(name = "referee")]
#[command(about = "Adjudicate a Rock-Paper-Scissors-Plus match", long_about = None)]
#[command(version)]
struct Cli {
    /// Read moves from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print one JSON record per round instead of text
    #[arg(long)]
    json: bool,

    /// Round wins that end the match early
    #[arg(long, default_value_t = MatchConfig::default().wins_to_clinch)]
    wins_to_clinch: u32,

    /// Maximum number of rounds
    #[arg(long, default_value_t = MatchConfig::default().max_rounds)]
    max_rounds: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rps_referee=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = MatchConfig::default()
        .with_wins_to_clinch(cli.wins_to_clinch)
        .with_max_rounds(cli.max_rounds);
    let mut engine = MatchEngine::with_config(config).context("invalid match configuration")?;

    let mut source: Box<dyn MoveSource> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            Box::new(LineMoveSource::new(BufReader::new(file)))
        }
        None => {
            if !cli.json {
                println!("=== Rock-Paper-Scissors-Plus Referee ===");
                println!(
                    "Rules: at most {} rounds, first to {} wins.",
                    config.max_rounds, config.wins_to_clinch
                );
                println!("Moves: rock, paper, scissors, bomb (once). Invalid input loses the round.");
                println!("Enter one round per line: <your move> <opponent move>");
            }
            Box::new(LineMoveSource::new(io::stdin().lock()))
        }
    };

    let stdout = io::stdout().lock();
    let mut presenter: Box<dyn Presenter> = if cli.json {
        Box::new(JsonPresenter::new(stdout))
    } else {
        Box::new(TextPresenter::new(stdout))
    };

    let summary = run_match(&mut engine, source.as_mut(), presenter.as_mut())
        .context("match driver failed")?;

    if summary.result.is_none() {
        tracing::warn!(
            round = summary.state.round_number,
            "input ended before the match concluded"
        );
    }

    Ok(())
}
