//! checkout — reference driver for the rust_qs queueing simulator.
//!
//! Simulates a small supermarket checkout: two counters, one customer
//! every five seconds on average, a fixed three-second service per
//! customer.  Runs verbosely so every arrival, seating, and departure is
//! traced, then prints the aggregate statistics in both human- and
//! machine-readable form.

use anyhow::Result;

use qs_core::SimParams;
use qs_engine::run_simulation;

// ── Scenario ──────────────────────────────────────────────────────────────────

const N_SERVERS:    u32 = 2;
const ARRIVAL_RATE: f64 = 0.2;
const SERVICE_TIME: f64 = 3.0;
const SIM_TIME:     f64 = 100.0;
const SEED:         u64 = 42;

fn main() -> Result<()> {
    let params = SimParams {
        n_servers:    N_SERVERS,
        arrival_rate: ARRIVAL_RATE,
        service_time: SERVICE_TIME,
        sim_time:     SIM_TIME,
        random_seed:  SEED,
    };

    // 1. Run with event tracing on.
    let summary = run_simulation(&params, true)?;

    // 2. Human-readable results block.
    println!();
    println!("--- Simulation Results ---");
    println!("total_customers: {}", summary.total_customers);
    match summary.avg_wait_time {
        Some(w) => println!("avg_wait_time: {w}"),
        None    => println!("avg_wait_time: n/a"),
    }
    match summary.avg_system_time {
        Some(s) => println!("avg_system_time: {s}"),
        None    => println!("avg_system_time: n/a"),
    }

    // 3. Machine-readable form, as a transport layer would return it.
    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
