//! Static-evaluation worker
//!
//! Feeds a FEN to the engine's `eval` command and prints the parsed
//! position report, game phase, and piece locations as one JSON object.

mod config;
mod engine;
mod error;

use eval_core::{EvalOutcome, GamePhase, PieceLocation, PositionReport};
use serde::Serialize;
use tracing::info;

use crate::config::WorkerConfig;
use crate::engine::EvalEngine;
use crate::error::WorkerError;

#[derive(Debug, Serialize)]
struct EvalOutput {
    fen: String,
    phase: GamePhase,
    piece_locations: Vec<PieceLocation>,
    /// `null` for the initial position and for the engine's
    /// "no analysis available" outcome.
    analysis: Option<PositionReport>,
}

async fn run(fen: String) -> Result<String, WorkerError> {
    let phase = eval_core::game_phase(&fen)?;
    let piece_locations = eval_core::piece_locations(&fen)?;

    let analysis = if eval_core::is_initial_position(&fen) {
        info!("Initial position, skipping engine run");
        None
    } else {
        let config = WorkerConfig::load()?;
        let engine = EvalEngine::new(&config.stockfish_path);
        let raw = engine.static_eval(&fen).await?;
        match eval_core::parse_report(&raw)? {
            EvalOutcome::NoAnalysis => {
                info!("Engine produced no analysis for this position");
                None
            }
            EvalOutcome::Report(report) => Some(report),
        }
    };

    let output = EvalOutput {
        fen,
        phase,
        piece_locations,
        analysis,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let fen = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: eval-worker \"<FEN>\""))?;

    let rendered = run(fen).await?;
    println!("{rendered}");

    Ok(())
}
