//! Common test utilities for integration tests
//!
//! This module provides:
//! - Seeded generators so every integration test is reproducible
//! - Droplet fixtures covering the classroom radius range
//! - Relative-error assertions for SI-scale floats

#![allow(dead_code)]

use millikan_core::{FixedClock, SimulationParams, Simulator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed shared by tests that only need "some" fixed sequence
pub const DEFAULT_SEED: u64 = 42;

/// Classroom oil density (kg/m³)
pub const RHO_OIL: f64 = 886.0;

/// Start time for fixed clocks (2024-01-01T00:00:00Z, ms)
pub const START_MS: u64 = 1_704_067_200_000;

/// Radii spanning the droplets a classroom atomizer produces (m)
pub const CLASSROOM_RADII: [f64; 5] = [0.5e-6, 0.7e-6, 1.0e-6, 1.5e-6, 2.2e-6];

/// Seeded generator
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seeded classroom simulator with a fixed clock
pub fn classroom_simulator(seed: u64) -> Simulator<ChaCha8Rng, FixedClock> {
    Simulator::new(
        SimulationParams::classroom(),
        seeded_rng(seed),
        FixedClock::new(START_MS),
    )
}

/// Relative difference |a − b| / |b|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs()
}

/// Assert two values agree to `tolerance` relative error
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    let err = relative_error(actual, expected);
    assert!(
        err <= tolerance,
        "expected {expected:e}, got {actual:e} (relative error {err:e} > {tolerance:e})"
    );
}
