//! probe-runner: headless flag evaluation over a financial statement file.
//!
//! Usage:
//!   probe-runner --input data.json
//!   probe-runner --input data.json --thresholds thresholds.json

use anyhow::{Context, Result};
use finprobe_core::{config::RuleThresholds, probe::FlagProbe, record::FinancialRecord};
use std::env;

/// Input file shape: the record arrives wrapped under a `data` key.
#[derive(serde::Deserialize)]
struct ProbeInput {
    data: FinancialRecord,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = str_arg(&args, "--input").unwrap_or("data.json");
    let thresholds_path = str_arg(&args, "--thresholds");

    let thresholds = match thresholds_path {
        Some(path) => RuleThresholds::load(path)?,
        None => RuleThresholds::default(),
    };

    log::info!(
        "input={input} thresholds={}",
        thresholds_path.unwrap_or("(defaults)")
    );

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Cannot read {input}"))?;
    let parsed: ProbeInput = serde_json::from_str(&content)
        .with_context(|| format!("Cannot parse {input}"))?;

    let report = FlagProbe::new(&thresholds).probe(&parsed.data)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
