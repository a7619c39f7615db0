//! Property-based tests for the oil-drop model using proptest.
//!
//! Covers: slip correction bounds, drag monotonicity, forward/inverse
//! consistency, and the two-velocity charge reduction.

mod common;

use millikan_core::{
    model::{
        charge_from_velocities, cunningham_correction, drag_coefficient, mean_free_path,
        radius_from_terminal_velocity, terminal_velocity,
    },
    ChargeParams, EnvironmentConditions, InverseParams, Medium, TerminalVelocityParams,
};
use proptest::prelude::*;

use common::{relative_error, RHO_OIL};

// ── Slip Correction ──────────────────────────────────────────────────

proptest! {
    /// Slip never increases drag above the Stokes value.
    #[test]
    fn cunningham_at_least_one(
        radius in 1e-9f64..1e-3,
        temperature in 1.0f64..2000.0,
        pressure in 1.0f64..1e7,
    ) {
        prop_assert!(cunningham_correction(radius, temperature, pressure) >= 1.0);
    }

    /// Mean free path is linear in T and inverse in P.
    #[test]
    fn mean_free_path_scales(
        temperature in 100.0f64..1000.0,
        pressure in 1e3f64..1e6,
        factor in 0.5f64..4.0,
    ) {
        let base = mean_free_path(temperature, pressure);
        let hotter = mean_free_path(temperature * factor, pressure);
        let denser = mean_free_path(temperature, pressure * factor);
        prop_assert!(relative_error(hotter, base * factor) < 1e-12);
        prop_assert!(relative_error(denser, base / factor) < 1e-12);
    }
}

// ── Drag ─────────────────────────────────────────────────────────────

proptest! {
    /// Bigger droplets always feel more drag.
    #[test]
    fn drag_increases_with_radius(
        radius in 1e-8f64..1e-4,
        growth in 1.001f64..10.0,
        temperature in 250.0f64..350.0,
        pressure in 5e4f64..2e5,
    ) {
        let small = drag_coefficient(radius, 1.81e-5, temperature, pressure);
        let large = drag_coefficient(radius * growth, 1.81e-5, temperature, pressure);
        prop_assert!(large > small);
    }
}

// ── Forward / Inverse ────────────────────────────────────────────────

proptest! {
    /// Six passes recover the radius to 1e-6 across lab conditions.
    #[test]
    fn inverse_undoes_forward(
        radius in 0.7e-6f64..10e-6,
        rho_oil in 700.0f64..1000.0,
        temperature in 273.0f64..313.0,
        pressure in 9e4f64..1.1e5,
    ) {
        let medium = Medium::default()
            .with_environment(EnvironmentConditions::new(temperature, pressure));
        let v = terminal_velocity(&TerminalVelocityParams::new(radius, rho_oil).with_medium(medium));
        let estimate = radius_from_terminal_velocity(&InverseParams::new(v, rho_oil).with_medium(medium));
        prop_assert!(relative_error(estimate, radius) < 1e-6, "r={radius:e} est={estimate:e}");
    }

    /// At room conditions half a micron already converges to 1e-6.
    #[test]
    fn inverse_at_standard_conditions(radius in 0.5e-6f64..10e-6) {
        let v = terminal_velocity(&TerminalVelocityParams::new(radius, RHO_OIL));
        let estimate = radius_from_terminal_velocity(&InverseParams::new(v, RHO_OIL));
        prop_assert!(relative_error(estimate, radius) < 1e-6);
    }

    /// Below half a micron the fixed pass count still lands within 0.1%.
    #[test]
    fn inverse_close_for_small_droplets(radius in 0.1e-6f64..0.5e-6) {
        let v = terminal_velocity(&TerminalVelocityParams::new(radius, RHO_OIL));
        let estimate = radius_from_terminal_velocity(&InverseParams::new(v, RHO_OIL));
        prop_assert!(estimate > 0.0);
        prop_assert!(relative_error(estimate, radius) < 1e-3);
    }

    /// Faster fall means a bigger droplet.
    #[test]
    fn terminal_velocity_increases_with_radius(radius in 0.1e-6f64..10e-6, growth in 1.01f64..3.0) {
        let slow = terminal_velocity(&TerminalVelocityParams::new(radius, RHO_OIL));
        let fast = terminal_velocity(&TerminalVelocityParams::new(radius * growth, RHO_OIL));
        prop_assert!(fast > slow);
        prop_assert!(slow > 0.0);
    }
}

// ── Charge ───────────────────────────────────────────────────────────

proptest! {
    /// With no rise the estimate is pure drag over field.
    #[test]
    fn charge_without_rise(
        radius in 0.3e-6f64..3e-6,
        v_down in 1e-6f64..1e-3,
        field in 1e3f64..1e6,
    ) {
        let q = charge_from_velocities(&ChargeParams::new(radius, v_down, 0.0, field));
        let drag = drag_coefficient(radius, 1.81e-5, 293.15, 101_325.0);
        prop_assert!(relative_error(q, drag * v_down / field) < 1e-12);
    }

    /// Charge is linear in the velocity sum.
    #[test]
    fn charge_linear_in_velocities(
        radius in 0.3e-6f64..3e-6,
        v_down in 1e-6f64..1e-3,
        v_up in 0.0f64..1e-3,
        field in 1e3f64..1e6,
    ) {
        let single = charge_from_velocities(&ChargeParams::new(radius, v_down, v_up, field));
        let double = charge_from_velocities(&ChargeParams::new(radius, 2.0 * v_down, 2.0 * v_up, field));
        prop_assert!(relative_error(double, 2.0 * single) < 1e-12);
    }
}
