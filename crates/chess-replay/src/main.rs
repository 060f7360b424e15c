use chess_engine::Game;
use chess_replay::{replay, script, ReplayConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess Replay - Plays a move script and reports the outcome.
#[derive(Parser)]
#[command(name = "chess-replay")]
#[command(about = "Replays a UCI move script and prints a JSON report")]
struct Args {
    /// Move script, one UCI move per line
    script: PathBuf,

    /// Path to the TOML config file
    #[arg(long, default_value_os_t = ReplayConfig::default_path())]
    config: PathBuf,

    /// Embed the final game state in the report
    #[arg(long)]
    include_state: bool,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ReplayConfig::load(&args.config)?;
    if args.include_state {
        config.include_state = true;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Script: {:?}", args.script);
    tracing::info!("Config: {:?}", config);

    let lines = script::load(&args.script)?;
    let report = replay(Game::new(), &lines, &config);

    match args.output {
        Some(path) => {
            report.write_json(&path)?;
            tracing::info!("Report written to {:?}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
