//! CLI entry point: runs the acquisition pipeline against the RERA Odisha
//! listing site, prints the records, and writes JSON/CSV outputs.

use std::path::PathBuf;

use clap::Parser;
use rera_engine::{write_outputs, AcquisitionPipeline, BrowserSettings, SessionSettings};
use rera_logging::LogDestination;

const OUTPUT_PREFIX: &str = "rera_odisha";

#[derive(Parser)]
#[command(
    name = "rera-harvester",
    about = "Extracts project registrations from the RERA Odisha listing site"
)]
struct Cli {
    /// Directory where the JSON and CSV outputs are written.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip the headless-browser fallback strategy.
    #[arg(long)]
    no_browser: bool,

    /// Chrome/Chromium executable for the browser strategy.
    #[arg(long)]
    chrome_path: Option<PathBuf>,

    /// Also write logs to ./rera_scrape.log.
    #[arg(long)]
    log_file: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rera_logging::initialize(if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });

    let browser = if cli.no_browser {
        None
    } else {
        Some(BrowserSettings {
            executable: cli.chrome_path.clone(),
            ..BrowserSettings::default()
        })
    };
    let pipeline = AcquisitionPipeline::with_default_strategies(SessionSettings::default(), browser);

    let records = pipeline.run().await;

    println!("\nExtracted Project Data:");
    println!("{}", "=".repeat(50));
    for (index, record) in records.iter().enumerate() {
        println!("\nProject {}:", index + 1);
        for (label, value) in record.fields() {
            println!("  {label}: {value}");
        }
    }

    let summary = write_outputs(&cli.output_dir, OUTPUT_PREFIX, &records)?;
    log::info!("JSON saved to {}", summary.json_path.display());
    log::info!("CSV saved to {}", summary.csv_path.display());

    println!("\nTotal projects processed: {}", summary.record_count);
    Ok(())
}
