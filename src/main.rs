use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use csv_processor::{CsvProcessor, LocalEnvLoader, OutputConfig, ProcessedOutput};

/// Select columns and filter rows of a CSV table.
///
/// Output is written to `$CSV_OUTPUT_PATH$CSV_OUTPUT_NAME.csv`
/// (default `output/processed_data.csv`) and echoed to stdout.
#[derive(Parser, Debug)]
#[command(name = "csv-processor", version)]
struct Args {
    /// Input CSV file, or `-` for stdin.
    input: PathBuf,

    /// Comma-separated columns to keep (all when empty).
    #[arg(default_value = "")]
    columns: String,

    /// Row filters such as `price>=100` or `status!=closed`; all must match.
    filters: Vec<String>,
}

fn run(args: &Args) -> Result<ProcessedOutput> {
    let config = OutputConfig::from_loader(&LocalEnvLoader::new());
    let processor = CsvProcessor::new(config);
    let row_filters = args.filters.join("\n");

    let output = if args.input.as_os_str() == "-" {
        let mut csv_data = String::new();
        std::io::stdin()
            .read_to_string(&mut csv_data)
            .context("reading CSV from stdin")?;
        processor.process_data(&csv_data, &args.columns, &row_filters)?
    } else {
        processor.process_file(&args.input, &args.columns, &row_filters)?
    };
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            log::info!("processed table saved to {}", output.path.display());
            println!("{}", output.text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
