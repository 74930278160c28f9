//! lobby — a morning in a six-storey office building with one lift.
//!
//! Scripted groups arrive from an embedded CSV; a seeded random stream adds
//! background traffic.  Some groups lose patience and take the stairs.
//!
//! ```text
//! cargo run -p lobby                    # built-in configuration
//! cargo run -p lobby -- building.json   # BuildingConfig as JSON
//! RUST_LOG=debug cargo run -p lobby     # per-group events too
//! ```

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use lift_core::{BuildingConfig, CarConfig, OverflowPolicy, Tick};
use lift_output::{CsvWriter, OutputWriter, TraceObserver};
use lift_passengers::{ArrivalGenerator, load_arrivals_reader};
use lift_sim::{BuildingBuilder, BuildingEvent, BuildingObserver, BuildingSnapshot, TracingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:             u64 = 7;
const RANDOM_TICKS:     u64 = 300;
const ARRIVAL_RATE:     f64 = 0.08;
const MAX_GROUP:        u32 = 4;
const PATIENCE:         (u64, u64) = (60, 180);
const MAX_TICKS:        u64 = 5_000;
const OUTPUT_DIR:       &str = "output/lobby";

// ── Arrival script ────────────────────────────────────────────────────────────

// Floors are 0-based here; the exported CSV numbers them from 1.
// give_up_after is optional.
const ARRIVALS_CSV: &str = "\
tick,size,origin,destination,give_up_after\n\
0,3,0,4,\n\
2,1,0,2,\n\
5,2,3,0,90\n\
8,4,0,5,\n\
12,1,5,0,\n\
12,2,2,4,\n\
20,5,0,3,120\n\
31,1,4,1,\n\
40,2,1,5,45\n\
";

fn default_config() -> BuildingConfig {
    BuildingConfig {
        num_floors:           6,
        floor_queue_capacity: 8,
        car:                  CarConfig {
            capacity:            10,
            ticks_per_floor:     4,
            ticks_door:          2,
            passengers_per_tick: 2,
        },
        overflow:             OverflowPolicy::Hold,
        events_enabled:       true,
    }
}

fn load_config(path: &Path) -> Result<BuildingConfig> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Logs events through `tracing` and writes the car trace.
struct LobbyObserver<W: OutputWriter> {
    log:     TracingObserver,
    trace:   TraceObserver<W>,
    gave_up: usize,
}

impl<W: OutputWriter> BuildingObserver for LobbyObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
        self.trace.on_tick_start(tick);
    }

    fn on_event(&mut self, event: &BuildingEvent) {
        if matches!(event, BuildingEvent::GaveUp { .. }) {
            self.gave_up += 1;
        }
        self.log.on_event(event);
        self.trace.on_event(event);
    }

    fn on_tick_end(&mut self, snapshot: &BuildingSnapshot) {
        self.log.on_tick_end(snapshot);
        self.trace.on_tick_end(snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.log.on_sim_end(final_tick);
        self.trace.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => default_config(),
    };
    println!("=== lobby — single-lift simulation ===");
    println!(
        "Floors: {}  |  Car: {} people, {} ticks/floor, {} ticks/door  |  Seed: {SEED}",
        config.num_floors, config.car.capacity, config.car.ticks_per_floor, config.car.ticks_door,
    );

    // 1. Arrivals: the script plus random background traffic.
    let scripted = load_arrivals_reader(Cursor::new(ARRIVALS_CSV))?;
    let max_group = MAX_GROUP.min(config.car.capacity);
    let random = ArrivalGenerator::new(SEED, config.num_floors, max_group, ARRIVAL_RATE)
        .with_patience(PATIENCE.0, PATIENCE.1)
        .generate(RANDOM_TICKS);
    println!("Arrivals: {} scripted, {} random", scripted.len(), random.len());

    let mut building = BuildingBuilder::new(config)
        .arrivals(scripted)
        .arrivals(random)
        .build()?;

    // 2. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = LobbyObserver {
        log:     TracingObserver,
        trace:   TraceObserver::new(writer),
        gave_up: 0,
    };

    // 3. Run, letting impatient groups leave before each tick.
    let t0 = Instant::now();
    let mut ticks = 0;
    while ticks < MAX_TICKS && !building.is_idle() {
        building.give_up_expired(&mut obs);
        building.step(&mut obs)?;
        ticks += 1;
    }
    obs.on_sim_end(building.current_tick());
    let elapsed = t0.elapsed();

    if !building.is_idle() {
        tracing::warn!(ticks, "stopped at the tick limit with people still in the building");
    }

    let trace_rows = obs.trace.rows();
    obs.trace.finish(&building.passenger_records())?;

    // 4. Summary.
    let tally = building.tally();
    println!();
    println!("Simulation complete in {:.3} s ({ticks} ticks)", elapsed.as_secs_f64());
    println!("  delivered  : {} people in {} groups", tally.delivered, building.completed().len());
    println!("  gave up    : {} people in {} groups", tally.abandoned, obs.gave_up);
    println!("  overflowed : {} people", tally.overflowed);
    println!("  still here : {} people", tally.in_system());
    println!("  {OUTPUT_DIR}/passengers.csv : {} rows", building.passenger_records().len());
    println!("  {OUTPUT_DIR}/car_trace.csv  : {trace_rows} rows");
    println!();

    // 5. Per-floor service table.
    println!("{:<6} {:>8} {:>12} {:>10}", "Floor", "Groups", "Avg wait", "Avg trip");
    println!("{}", "-".repeat(40));
    for floor in 0..building.config().num_floors {
        let served: Vec<_> = building.completed().iter().filter(|g| g.origin() == floor).collect();
        if served.is_empty() {
            continue;
        }
        let n = served.len() as f64;
        let wait: u64 = served.iter().filter_map(|g| g.wait_to_board()).sum();
        let trip: u64 = served.iter().filter_map(|g| g.trip_time()).sum();
        println!(
            "{:<6} {:>8} {:>12.1} {:>10.1}",
            floor + 1,
            served.len(),
            wait as f64 / n,
            trip as f64 / n,
        );
    }

    Ok(())
}
