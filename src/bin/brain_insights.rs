use brain_insights::Result;
use brain_insights::fragment::{RegionSeries, load_brain_insights};
use brain_insights::telemetry;
use brain_insights::view::DatasetCollection;
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brain-insights", version)]
#[command(about = "Convert Brain Insights Format CSVs into per-region chart series", long_about = None)]
struct Cli {
    /// CSV files with a `fragment_description` column and one column per region.
    #[arg(value_name = "CSV_FILE", required = true)]
    files: Vec<PathBuf>,

    /// Combine the series of one region across all files into a single chart.
    #[arg(short, long)]
    region: Option<String>,
}

#[derive(Serialize)]
struct FileSeries<'a> {
    name: &'a str,
    regions: &'a RegionSeries,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let parsed = cli
        .files
        .par_iter()
        .map(|path| load_brain_insights(path))
        .collect::<Result<Vec<_>>>()?;

    let mut datasets = DatasetCollection::default();
    for (path, regions) in cli.files.iter().zip(parsed) {
        datasets.add(path.display().to_string(), regions);
    }

    let json = match &cli.region {
        Some(region) => serde_json::to_string_pretty(&datasets.region_chart(region))?,
        None => {
            let files: Vec<FileSeries<'_>> = datasets
                .datasets()
                .iter()
                .map(|d| FileSeries {
                    name: &d.name,
                    regions: &d.regions,
                })
                .collect();
            serde_json::to_string_pretty(&files)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
