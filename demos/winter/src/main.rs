//! winter — driver schedule builder with snow-mode gap rules.
//!
//! Reads a zone adjacency table (CSV, or a workbook with feature `xlsx`) and
//! a trip CSV, chains the trips into driver schedules, and writes
//! `summary.csv` / `details.csv`.  `--sqlite` adds `schedules.db` and
//! `--xlsx` adds the two-sheet `schedules.xlsx`.  With no input paths it
//! runs on a small embedded sample.
//!
//! ```text
//! winter --zones zones.csv --trips trips.csv --snow --seed 7
//! RUST_LOG=debug winter            # trace every chain step
//! ```

mod sample;

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use ds_core::{SchedRng, SchedulerConfig};
use ds_output::{build_details, build_summary, write_report, CsvWriter, SummaryRow};
use ds_schedule::{load_trips_csv, load_trips_reader, LogObserver, Scheduler, TripSet};
use ds_zone::{load_zones, load_zones_reader, ZoneGraph};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "winter", about = "Greedy driver schedule builder with snow-mode gaps")]
struct Args {
    /// Zone table (.csv, or a workbook) with "Primary Zone" and "Backup Zones" columns.
    #[arg(long)]
    zones: Option<PathBuf>,

    /// Trip CSV, one row per trip.
    #[arg(long)]
    trips: Option<PathBuf>,

    /// Apply randomized snow gaps to links touching snow-sensitive zones.
    #[arg(long)]
    snow: bool,

    /// Seed for snow gap draws; omitted means a fresh seed per run.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding any subset of the scheduler settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = "output/winter")]
    out: PathBuf,

    /// Also write schedules.db.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,

    /// Also write schedules.xlsx with Summary and Details sheets.
    #[cfg(feature = "xlsx")]
    #[arg(long)]
    xlsx: bool,
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<SchedulerConfig> {
    let Some(path) = path else {
        return Ok(SchedulerConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config: SchedulerConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn load_inputs(args: &Args) -> Result<(ZoneGraph, TripSet)> {
    match (&args.zones, &args.trips) {
        (Some(zones), Some(trips)) => {
            let graph = load_zones(zones).with_context(|| format!("loading {}", zones.display()))?;
            let trips = load_trips_csv(trips).with_context(|| format!("loading {}", trips.display()))?;
            Ok((graph, trips))
        }
        (None, None) => {
            info!("no input paths given, using the embedded sample");
            let graph = load_zones_reader(Cursor::new(sample::ZONES_CSV))?;
            let trips = load_trips_reader(Cursor::new(sample::TRIPS_CSV))?;
            Ok((graph, trips))
        }
        _ => bail!("--zones and --trips must be given together"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scheduler = Scheduler::new(load_config(args.config.as_deref())?)?;
    let (graph, trips) = load_inputs(&args)?;
    println!(
        "Zone graph: {} zones, {} links  |  Trips: {}  |  Snow mode: {}",
        graph.zone_count(),
        graph.link_count(),
        trips.len(),
        if args.snow { "on" } else { "off" },
    );

    let mut rng = match args.seed {
        Some(seed) => SchedRng::new(seed),
        None => SchedRng::from_entropy(),
    };

    let t0 = Instant::now();
    let schedules = scheduler.build_schedules_with(&trips, &graph, args.snow, &mut rng, &mut LogObserver);
    let elapsed = t0.elapsed();

    println!("Generated {} schedules from {} trips", schedules.len(), trips.len());
    info!("scheduling took {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!();

    let summary = build_summary(&trips, &schedules);
    let details = build_details(&trips, &schedules, &graph, &scheduler, args.snow);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let mut writer = CsvWriter::new(&args.out)?;
    write_report(&mut writer, &summary, &details)?;

    #[cfg(feature = "sqlite")]
    if args.sqlite {
        let mut db = ds_output::SqliteWriter::new(&args.out)?;
        write_report(&mut db, &summary, &details)?;
    }

    #[cfg(feature = "xlsx")]
    if args.xlsx {
        let mut book = ds_output::XlsxWriter::new(&args.out)?;
        write_report(&mut book, &summary, &details)?;
    }

    print_summary(&summary);
    println!();
    println!("Reports written to {}", args.out.display());

    Ok(())
}

fn print_summary(rows: &[SummaryRow]) {
    println!("{:<10} {:>6} {:>10} {:>7} {:>7}", "Schedule", "Trips", "KM", "Start", "End");
    println!("{}", "-".repeat(44));
    for row in rows {
        println!(
            "{:<10} {:>6} {:>10.3} {:>7} {:>7}",
            row.schedule_id,
            row.trip_count,
            row.total_km,
            row.start_time.to_string(),
            row.end_time.to_string(),
        );
    }
}
