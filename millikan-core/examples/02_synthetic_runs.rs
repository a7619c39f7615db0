//! Synthetic Runs Example
//!
//! Generates a seeded batch of classroom runs, stores them in a bounded
//! run log, and shows how close each estimate lands to an integer number
//! of elementary charges.
//!
//! ## What You'll Learn
//!
//! - Injecting a seeded random source for reproducible runs
//! - Using a fixed clock for deterministic timestamps
//! - Appending runs to a fixed-capacity log
//! - Comparing noisy estimates with the generating droplet
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_synthetic_runs
//! ```

use millikan_core::{
    constants::buffers::SMALL_RUN_LOG_CAPACITY,
    units::{m_per_s_to_mm_per_s, m_to_um},
    FixedClock, PhysicsError, RunLog, SimulationParams, Simulator,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    println!("Millikan Synthetic Runs Example");
    println!("===============================\n");

    let params = SimulationParams::classroom();
    println!("Apparatus:");
    println!("  {:.0} V across {:.0} mm -> {:.0} V/m", params.voltage, params.plate_distance * 1e3, params.electric_field());
    println!("  Velocity noise: ±{:.0}%", params.noise_scale * 100.0);
    println!();

    let mut sim = Simulator::new(params, ChaCha8Rng::seed_from_u64(2024), FixedClock::new(0));
    let mut log: RunLog<SMALL_RUN_LOG_CAPACITY> = RunLog::new();

    println!("{:>3} {:>10} {:>10} {:>9} {:>9} {:>6}", "#", "v_down", "v_up", "r (µm)", "q/1e-19", "n");
    loop {
        let (run, truth) = sim.next_run_with_truth();
        sim.clock_mut().advance(30_000);

        match log.append(run) {
            Ok(count) => println!(
                "{:>3} {:>10.4} {:>10.4} {:>9.3} {:>9.3} {:>6}   (true r {:.3} µm)",
                count,
                m_per_s_to_mm_per_s(run.v_down),
                m_per_s_to_mm_per_s(run.v_up),
                m_to_um(run.radius),
                run.charge_scaled(),
                run.nearest_elementary_count(),
                m_to_um(truth.radius),
            ),
            Err(PhysicsError::LogFull { capacity }) => {
                println!("\nLog full at {capacity} runs");
                break;
            }
            Err(e) => {
                println!("\nSkipped run: {e}");
            }
        }
    }

    let mean = log.charges().sum::<f64>() / log.len() as f64;
    println!("Mean charge: {:.3e} C over {} runs", mean, log.len());
    if let Some(last) = log.last() {
        println!("Last run at t={} ms", last.timestamp);
    }
}
