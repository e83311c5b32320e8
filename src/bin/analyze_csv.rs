// src/bin/analyze_csv.rs
// Runs the analysis engine over an OHLC CSV file and prints the JSON report.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use candle_signal_engine::data::load_candles_from_path;
use candle_signal_engine::AnalysisEngine;

#[derive(Parser, Debug)]
#[command(name = "analyze-csv")]
#[command(about = "Estimate zones, classify the latest candle pattern and print a trade signal")]
struct Args {
    /// CSV file with a header row containing open, high, low and close columns
    #[arg(short, long)]
    input: PathBuf,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn setup_logging(debug: bool) {
    use env_logger::{Builder, Target};
    use log::LevelFilter;

    let mut builder = Builder::from_default_env();
    builder.target(Target::Stderr);

    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Warn);
    }

    builder.init();
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let candles = load_candles_from_path(&args.input)?;
    log::info!("Loaded {} candles from {}", candles.len(), args.input.display());

    let report = AnalysisEngine::default().analyze(candles)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.debug);

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Analysis of {} failed: {}", args.input.display(), e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
