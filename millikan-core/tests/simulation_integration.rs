//! Integration tests for synthetic runs flowing into a run log.
//!
//! Exercises the checked simulation entry point, the run log capacity
//! rules and the seeded reproducibility the analysis side depends on.

mod common;

use millikan_core::{
    checked, FixedClock, PhysicsError, RunLog, SimulationParams, TimeSource,
};

use common::{assert_close, classroom_simulator, seeded_rng, DEFAULT_SEED, START_MS};

#[test]
fn hundred_seeded_runs_are_reproducible() {
    let first: Vec<_> = classroom_simulator(DEFAULT_SEED).runs(100).collect();
    let second: Vec<_> = classroom_simulator(DEFAULT_SEED).runs(100).collect();

    assert_eq!(first.len(), 100);
    assert_eq!(first, second);
    assert!(first.iter().all(|run| run.is_physical()));
}

#[test]
fn different_seeds_give_different_runs() {
    let a = classroom_simulator(1).next_run();
    let b = classroom_simulator(2).next_run();
    assert_ne!(a.charge, b.charge);
}

#[test]
fn checked_runs_fill_a_log() {
    let params = SimulationParams::classroom();
    let mut rng = seeded_rng(DEFAULT_SEED);
    let mut clock = FixedClock::new(START_MS);
    let mut log: RunLog<16> = RunLog::new();

    for i in 0..16 {
        let run = checked::simulate_run(&params, &mut rng, &clock).expect("classroom settings are valid");
        assert_eq!(log.append(run), Ok(i + 1));
        clock.advance(1_000);
    }

    assert_eq!(log.len(), 16);
    assert_eq!(log.runs()[0].timestamp, START_MS);
    assert_eq!(log.last().map(|r| r.timestamp), Some(START_MS + 15_000));

    let overflow = checked::simulate_run(&params, &mut rng, &clock).expect("valid settings");
    assert_eq!(log.append(overflow), Err(PhysicsError::LogFull { capacity: 16 }));
    assert_eq!(log.len(), 16);
}

#[test]
fn logged_charges_sit_near_integer_multiples() {
    let mut sim = classroom_simulator(DEFAULT_SEED);
    let mut log: RunLog = RunLog::new();
    for run in sim.runs(20) {
        log.append(run).expect("capacity exceeds run count");
    }

    for run in &log {
        assert!(run.nearest_elementary_count() >= 1);
        assert!(run.charge_scaled() > 0.0);
    }
    assert_eq!(log.charges().count(), 20);
}

#[test]
fn noiseless_runs_match_their_droplets() {
    let params = SimulationParams::classroom().with_noise_scale(0.0);
    let mut sim = millikan_core::Simulator::new(params, seeded_rng(9), FixedClock::new(0));

    for _ in 0..25 {
        let (run, truth) = sim.next_run_with_truth();
        assert_close(run.radius, truth.radius, 1e-6);
        assert_close(run.charge, truth.charge, 1e-5);
    }
}

#[test]
fn checked_simulation_rejects_bad_apparatus() {
    let mut rng = seeded_rng(DEFAULT_SEED);
    let clock = FixedClock::new(0);

    let no_gap = SimulationParams { plate_distance: 0.0, ..SimulationParams::classroom() };
    assert!(checked::simulate_run(&no_gap, &mut rng, &clock).is_err());

    let floating_oil = SimulationParams { rho_oil: 0.5, ..SimulationParams::classroom() };
    assert!(matches!(
        checked::simulate_run(&floating_oil, &mut rng, &clock),
        Err(PhysicsError::DensityInversion { .. })
    ));

    let no_voltage = SimulationParams { voltage: 0.0, ..SimulationParams::classroom() };
    assert!(checked::simulate_run(&no_voltage, &mut rng, &clock).is_err());

    let too_noisy = SimulationParams::classroom().with_noise_scale(1.0);
    assert!(matches!(
        checked::simulate_run(&too_noisy, &mut rng, &clock),
        Err(PhysicsError::OutOfRange { .. })
    ));
}

#[test]
fn fixed_clock_is_not_wall_time() {
    let clock = FixedClock::new(START_MS);
    assert_eq!(clock.now(), START_MS);
    assert!(!clock.is_wall_clock());
}
