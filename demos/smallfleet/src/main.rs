//! smallfleet — smallest example for the fleet simulator.
//!
//! Runs a 25-vehicle fleet around the Gauteng seeding box on a fast tick,
//! persisting telemetry and alerts to CSV and publishing the live feed as
//! JSON lines.  Scale comment: the reference deployment runs 500 vehicles
//! on a 1-second tick; bump VEHICLE_COUNT and TICK_INTERVAL_MS to match.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use fleet_core::{SimConfig, Tick};
use fleet_output::{CsvStore, JsonFeed};
use fleet_sim::{SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const VEHICLE_COUNT:    usize = 25;
const SEED:             u64   = 42;
const TICK_INTERVAL_MS: u64   = 100; // 10 ticks per second
const TOTAL_TICKS:      u64   = 150; // 15 s wall time
const CONFIG_PATH:      &str  = "smallfleet.toml";

/// Built-in demo config, overridden wholesale by `smallfleet.toml` when the
/// file exists next to the binary's working directory.
fn load_config() -> Result<SimConfig> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        let text = std::fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&text)?;
        println!("Configuration loaded from {CONFIG_PATH}");
        return Ok(config);
    }
    Ok(SimConfig {
        vehicle_count:    VEHICLE_COUNT,
        seed:             SEED,
        tick_interval_ms: TICK_INTERVAL_MS,
        total_ticks:      TOTAL_TICKS,
        ..SimConfig::default()
    })
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressObserver {
    total_alerts: usize,
}

impl SimObserver for ProgressObserver {
    fn on_tick_end(&mut self, tick: Tick, telemetry: usize, alerts: usize) {
        self.total_alerts += alerts;
        if tick.0 % 50 == 0 {
            println!("tick {tick}: {telemetry} snapshots, {alerts} alerts");
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!("final tick: {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // 1. Sim config.
    let config = load_config()?;

    println!("=== smallfleet — fleet telemetry simulator ===");
    println!(
        "Vehicles: {}  |  Ticks: {}  |  Seed: {}",
        config.vehicle_count, config.total_ticks, config.seed
    );
    println!();

    // 2. Output backends.
    std::fs::create_dir_all("output/smallfleet")?;
    let store = CsvStore::new(Path::new("output/smallfleet"))?;
    let feed = JsonFeed::new(BufWriter::new(File::create("output/smallfleet/feed.jsonl")?));

    // 3. Build and run.
    let mut sim = SimBuilder::new(config).persistence(store).broadcast(feed).build()?;
    println!("Fleet seeded: {} vehicles", sim.registry.len());
    println!();

    let mut obs = ProgressObserver { total_alerts: 0 };
    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  telemetry rows : {}",
        sim.registry.len() as u64 * sim.config.total_ticks
    );
    println!("  alerts emitted : {}", obs.total_alerts);
    println!();

    // 5. Final fleet table (first few vehicles by plate).
    let mut records = sim.registry.records(sim.clock.current_unix_ms());
    records.sort_by(|a, b| a.vehicle.cmp(&b.vehicle));
    println!("{:<12} {:>8} {:>8} {:>8}", "Plate", "km/h", "Fuel %", "Temp °C");
    println!("{}", "-".repeat(40));
    for record in records.iter().take(8) {
        println!(
            "{:<12} {:>8.1} {:>8.1} {:>8.1}",
            record.vehicle, record.speed, record.fuel_level, record.engine_temp,
        );
    }

    Ok(())
}
