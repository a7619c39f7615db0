//! End-to-end: forward model -> run series -> summary.

use approx::assert_relative_eq;
use millikan_analysis::{AnalysisError, RunSummary};
use millikan_core::{
    constants::ELEMENTARY_CHARGE as E,
    model, ChargeParams, FixedClock, InverseParams, Medium, RiseParams, RunLog, RunMeasurement,
    SimulationParams, Simulator, TerminalVelocityParams,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const RHO_OIL: f64 = 886.0;
// Strong enough that a singly charged droplet still rises
const FIELD: f64 = 5.0e5;
const TRAVEL: f64 = 1.0e-3;

/// A run whose droplet carries exactly `n` elementary charges
fn quantized_run(radius: f64, n: u32) -> RunMeasurement {
    let medium = Medium::default();
    let v_down = model::terminal_velocity(&TerminalVelocityParams::new(radius, RHO_OIL));
    let v_up = model::rise_velocity_for_charge(
        &RiseParams::new(radius, v_down, f64::from(n) * E, FIELD).with_medium(&medium),
    );
    let r_est = model::radius_from_terminal_velocity(&InverseParams::new(v_down, RHO_OIL));
    let charge = model::charge_from_velocities(&ChargeParams::new(r_est, v_down, v_up, FIELD));

    RunMeasurement {
        timestamp: 0,
        electric_field: FIELD,
        v_down,
        v_up,
        t_down: TRAVEL / v_down,
        t_up: TRAVEL / v_up,
        radius: r_est,
        charge,
        voltage: FIELD * 0.01,
        plate_distance: 0.01,
        fall_distance: TRAVEL,
        rise_distance: TRAVEL,
    }
}

#[test]
fn quantized_series_recovers_e() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut log: RunLog<32> = RunLog::new();
    let mut counts = Vec::new();

    for i in 0..24 {
        let radius = 0.6e-6 + rng.gen::<f64>() * 0.4e-6;
        // Two thirds singly charged so the median lands on e
        let n = match i % 6 {
            0 => 2,
            3 => 3,
            _ => 1,
        };
        counts.push(n);
        let run = quantized_run(radius, n);
        assert!(run.v_up > 0.0);
        log.append(run).unwrap();
    }

    let summary = RunSummary::from_runs(&log).unwrap();
    assert_eq!(summary.count, 24);
    assert_eq!(summary.quantization.multiples, counts);
    assert_relative_eq!(summary.quantization.e_estimate, E, epsilon = 0.0, max_relative = 1e-6);
    assert!(summary.agreement_percent > 99.99);
}

#[test]
fn simulated_series_summarizes() {
    let mut sim = Simulator::new(
        SimulationParams::classroom(),
        ChaCha8Rng::seed_from_u64(2024),
        FixedClock::new(0),
    );
    let runs: Vec<_> = sim.runs(50).collect();
    let summary = RunSummary::from_runs(&runs).unwrap();

    assert_eq!(summary.count, 50);
    assert_eq!(summary.quantization.multiples.len(), 50);
    assert!(summary.quantization.multiples.iter().all(|&n| n >= 1));
    assert!(summary.std_charge > 0.0);
    assert!(summary.charge_range.0 <= summary.mean_charge);
    assert!(summary.mean_charge <= summary.charge_range.1);
    assert_eq!(summary.residuals.len(), 50);

    let mean_v = runs.iter().map(|r| r.v_down).sum::<f64>() / 50.0;
    assert_relative_eq!(summary.mean_v_down, mean_v, max_relative = 1e-12);
}

#[test]
fn empty_log_is_rejected() {
    let log: RunLog = RunLog::new();
    assert_eq!(RunSummary::from_runs(&log), Err(AnalysisError::EmptyInput));
}
