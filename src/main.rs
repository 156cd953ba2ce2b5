use std::path::PathBuf;

use clap::Parser;
use log::info;

use skill_metrics::io::load_array;
use skill_metrics::{MetricResult, MissingValues, Rmsd};

#[derive(Parser)]
#[command(
    name = "skill-metrics",
    version,
    about = "Root-mean-square deviation between two JSON arrays"
)]
struct Cli {
    /// JSON file holding the predicted field.
    #[arg(short, long)]
    predicted: PathBuf,
    /// JSON file holding the reference field.
    #[arg(short, long)]
    reference: PathBuf,
    /// How NaN / null elements are treated: propagate or ignore.
    #[arg(short, long, default_value = "propagate")]
    missing: MissingValues,
    /// Print a JSON report instead of the bare value.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run_cli() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run_cli() -> MetricResult<()> {
    let cli = Cli::parse();
    let predicted = load_array(&cli.predicted)?;
    let reference = load_array(&cli.reference)?;

    let report = Rmsd::report(&predicted, &reference, cli.missing)?;
    info!(
        "rmsd of {} against {}: {}",
        cli.predicted.display(),
        cli.reference.display(),
        report.rmsd
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.rmsd);
    }
    Ok(())
}
