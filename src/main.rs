//! Negotiation sparring CLI - reads a preparation as JSON on stdin and
//! writes the coaching analysis as JSON on stdout.
//!
//! The analyzer backend is selected via configuration; the deterministic
//! rule engine is the default and always remains the safety net.

use std::io::Read;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use negotiation_sparring::adapters::ai::build_analyzer;
use negotiation_sparring::config::AppConfig;
use negotiation_sparring::domain::preparation::{FeedbackMode, PreparationInput};

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    preparation: PreparationInput,
    #[serde(default)]
    mode: FeedbackMode,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let analyzer = build_analyzer(&config.analysis);
    let info = analyzer.analyzer_info();
    info!(analyzer = info.name, model = ?info.model, "analyzer ready");

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: AnalyzeRequest = serde_json::from_str(&input)?;

    let analysis = analyzer.analyze(&request.preparation, request.mode).await?;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
