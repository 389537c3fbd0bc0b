//! hotel — replay a day of elevator traffic through the rust_lift dispatcher.
//!
//! Reads a building from TOML (or uses the reference building), takes the
//! request stream from a CSV file or generates one, runs every request to
//! delivery, writes `completions.csv` / `car_positions.csv`, and prints the
//! wait-time summary.
//!
//! ```text
//! RUST_LOG=info cargo run -p hotel -- --config demos/hotel/hotel.toml \
//!     --input demos/hotel/requests.csv --output output/hotel
//! ```

mod config;

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use lift_core::BuildingConfig;
use lift_dispatch::{DispatcherBuilder, replay};
use lift_output::{CsvWriter, OutputObserver};
use lift_schedule::{TrafficProfile, generate_requests, load_requests_csv};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[clap(author, version, about = "Multi-car elevator dispatch simulator")]
struct Cli {
    /// Building TOML file.  Omit for the reference building.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Request stream: `tick,origin,destination` per line.
    #[clap(long, conflicts_with = "generate")]
    input: Option<PathBuf>,

    /// Generate this many random requests instead of reading a file.
    #[clap(long)]
    generate: Option<usize>,

    /// Seed for `--generate`.
    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// Largest gap between generated requests, in ticks.
    #[clap(long, default_value_t = 3)]
    max_gap: u64,

    /// Directory for the CSV output files.
    #[clap(long, default_value = "output/hotel")]
    output: PathBuf,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // 1. Building.
    let building = match &cli.config {
        Some(path) => config::load(path)?,
        None => BuildingConfig::default(),
    };
    let range = building.validate()?;
    println!("=== hotel — rust_lift dispatcher ===");
    println!(
        "Floors: {range}  |  Cars: {}  |  Door: {} ticks",
        building.car_count, building.door_open_ticks
    );

    // 2. Request stream.
    let records = match (&cli.input, cli.generate) {
        (Some(path), _) => load_requests_csv(path)?,
        (None, Some(n)) => {
            let profile = TrafficProfile {
                requests:      n,
                max_gap_ticks: cli.max_gap,
                ..TrafficProfile::default()
            };
            generate_requests(&profile, range, cli.seed)
        }
        (None, None) => bail!("either --input or --generate is required"),
    };
    println!("Requests: {}", records.len());

    // 3. Dispatcher and output.
    let door_open_ticks = building.door_open_ticks;
    let mut dispatcher = DispatcherBuilder::new(building).build()?;
    fs::create_dir_all(&cli.output)?;
    let mut obs = OutputObserver::new(CsvWriter::new(&cli.output)?);

    // 4. Run.
    let t0 = Instant::now();
    let summary = replay(&mut dispatcher, &records, &mut obs)?;
    let elapsed = t0.elapsed();
    info!("replay finished in {:.3} s", elapsed.as_secs_f64());

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!(
        "Delivered {} requests by {} in {:.3} s",
        summary.submitted,
        summary.final_tick,
        elapsed.as_secs_f64()
    );
    println!("  output written to {}", cli.output.display());
    println!();
    match obs.statistics(door_open_ticks) {
        Some(stats) => println!("{stats}"),
        None => println!("no requests delivered"),
    }

    Ok(())
}
