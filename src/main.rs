use brain_insights::Result;
use brain_insights::preprocess::{PreprocessOptions, preprocess_files};
use brain_insights::telemetry;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "preprocessor", version)]
#[command(about = "Convert per-record CSV measurements into chart specs (JSON on stdout)", long_about = None)]
struct Cli {
    /// CSV files with `index`, `Label` and numeric data columns.
    #[arg(value_name = "CSV_FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    telemetry::init_tracing();

    // 1) Read + parse all files, build charts with one shared y-axis scale.
    let output = preprocess_files(&cli.files, &PreprocessOptions::default())?;

    // 2) Emit. Nothing reaches stdout unless every file succeeded.
    let json = serde_json::to_string_pretty(&output)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
