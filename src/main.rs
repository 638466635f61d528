use std::path::PathBuf;

use clap::Parser;
use climb_simulation::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "climb-sim")]
#[command(about = "Longitudinal climb trajectory simulator for a fixed-wing airliner")]
#[command(version)]
struct Args {
    /// JSON file overriding the built-in aircraft and mission parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Destination for the per-step CSV export
    #[arg(short, long, default_value = "flight_profile.csv")]
    output: PathBuf,

    /// Simulated time limit in seconds
    #[arg(long)]
    max_time: Option<f64>,

    /// Suppress periodic progress lines
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(max_time) = args.max_time {
        config.run.max_time = max_time;
    }
    if args.quiet {
        config.run.progress_interval = 0;
    }

    let controller = TrajectoryController::new(config)?;
    let run = controller.simulate();

    if let Some(last) = run.path.last() {
        info!("{}", last.summary_line());
    }
    if let Some(summary) = FlightSummary::from_run(&run, &controller.config().mission) {
        Telemetry::log_summary(&summary);
    }

    write_csv_file(&args.output, &run.path)?;
    info!("Export complete: {}", args.output.display());

    Ok(())
}
