//! Run the chart pipeline over a JSON position payload and print the result.
//!
//! Usage: `chart_probe <payload.json> [mode.toml]`
//!
//! The payload carries `mode`, `inner` body entries and, for transit and
//! synastry, `outer` entries plus optional upstream `crossAspects`.
//! Malformed entries are skipped with a warning.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use urania::config::{load_mode_config, ChartModeConfig};
use urania::{ChartPipeline, Payload};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <payload.json> [mode.toml]", args[0]);
    }

    let text = fs::read_to_string(&args[1])
        .with_context(|| format!("Failed to read payload {}", args[1]))?;
    let payload = Payload::from_json_str(&text)
        .with_context(|| format!("Failed to parse payload {}", args[1]))?;

    let mode_config = match args.get(2) {
        Some(path) => load_mode_config(Path::new(path))?,
        None => ChartModeConfig::for_mode(payload.mode),
    };
    let pipeline = ChartPipeline::new(mode_config);

    let output = serde_json::to_string_pretty(&payload.render(&pipeline))?;
    println!("{}", output);
    Ok(())
}
