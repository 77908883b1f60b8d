//! Main entry point for the wellness insight report generator
//!
//! This binary sets up logging, parses command line arguments, loads the
//! record snapshot, and writes the structured and flat exports of one
//! report.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use wellness_insights::{export, InsightEngine, JsonFileSource, UserId, DEFAULT_WINDOW_DAYS};

/// Command line arguments for the wellness insight report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot holding the recorded series
    #[arg(long)]
    input: PathBuf,

    /// User to generate the report for
    #[arg(long)]
    user: Uuid,

    /// Analysis window in days
    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
    days: u32,

    /// Destination for the structured JSON export
    /// Defaults to wellness_report_<user>_<date>.json in the working directory
    #[arg(long)]
    output: Option<PathBuf>,

    /// Destination for the flat CSV export
    /// Defaults to wellness_report_<user>_<date>.csv in the working directory
    #[arg(long)]
    flat: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("wellness_insights={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the result summary
        .init();

    info!("Starting wellness insight report generation");

    let source = JsonFileSource::open(&args.input)?;
    let engine = InsightEngine::new(source);

    let user_id = UserId(args.user);
    let report = engine.generate_report(&user_id, args.days)?;

    let basename = report.default_basename();
    let json_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.json", basename)));
    let flat_path = args
        .flat
        .unwrap_or_else(|| PathBuf::from(format!("{}.csv", basename)));

    export::write_structured(&report, &json_path)?;
    export::write_flat(&report, &flat_path)?;

    println!(
        "Report for user {} ({} day window): {} recommendation(s)",
        user_id,
        report.analysis_period.days,
        report.recommendations.len()
    );
    println!("  structured: {}", json_path.display());
    println!("  flat:       {}", flat_path.display());

    info!("Report generation complete");
    Ok(())
}
