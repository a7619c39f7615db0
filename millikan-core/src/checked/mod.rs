//! Validated entry points for the physics model
//!
//! ## Overview
//!
//! The formulas in [`crate::model`] are total over `f64`: a zero radius or a
//! zero field comes back as ∞ or NaN, never as an error. That keeps them
//! cheap and lets them run inside tight loops, but a UI feeding them raw
//! user input needs something stricter. This module is that thin layer.
//!
//! ## Validation Layers
//!
//! Each function here:
//!
//! 1. Validates its parameter record with [`Validate`] (domain checks:
//!    r > 0, ρ_oil > ρ_air, E ≠ 0, v ≥ 0, T, P, η, g > 0)
//! 2. Calls the unchecked formula unchanged, so results are bit-for-bit
//!    identical to the raw model
//! 3. Rejects a non-finite (or, for radii, non-positive) result
//!
//! ```rust
//! use millikan_core::{checked, ChargeParams, PhysicsError};
//!
//! let params = ChargeParams::new(1.0e-6, 1.2e-4, 6.0e-5, 0.0);
//! assert_eq!(checked::charge_from_velocities(&params), Err(PhysicsError::ZeroField));
//! ```

pub mod utils;

use rand::Rng;

use crate::{
    errors::{PhysicsError, PhysicsResult},
    measurement::RunMeasurement,
    model,
    params::{
        ChargeParams, InverseParams, RiseParams, SimulationParams, TerminalVelocityParams,
        WeightParams,
    },
    simulation,
    time::TimeSource,
    traits::Validate,
};

use utils::{
    check_densities, check_environment, check_field, check_finite, check_medium,
    check_positive, check_radius, check_range, check_velocity,
};

impl Validate for TerminalVelocityParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_radius(self.droplet.radius)?;
        check_medium(&self.medium)?;
        check_densities(self.droplet.rho_oil, self.medium.rho_air)
    }
}

impl Validate for InverseParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_velocity("terminal velocity", self.v_terminal)?;
        check_medium(&self.medium)?;
        check_densities(self.rho_oil, self.medium.rho_air)
    }
}

impl Validate for WeightParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_radius(self.radius)?;
        check_positive("gravity", self.g)?;
        check_densities(self.rho_oil, self.rho_air)
    }
}

impl Validate for ChargeParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_radius(self.radius)?;
        check_velocity("fall velocity", self.v_down)?;
        check_velocity("rise velocity", self.v_up)?;
        check_field(self.electric_field)?;
        check_positive("viscosity", self.eta_air)?;
        check_environment(&self.environment)
    }
}

impl Validate for RiseParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_radius(self.radius)?;
        check_velocity("fall velocity", self.v_down)?;
        check_finite("charge", self.charge)?;
        check_field(self.electric_field)?;
        check_positive("viscosity", self.eta_air)?;
        check_environment(&self.environment)
    }
}

impl Validate for SimulationParams {
    fn validate(&self) -> PhysicsResult<()> {
        check_medium(&self.medium)?;
        check_densities(self.rho_oil, self.medium.rho_air)?;
        check_positive("plate distance", self.plate_distance)?;
        check_field(self.electric_field())?;
        check_positive("voltage", self.voltage)?;
        check_positive("fall distance", self.fall_distance)?;
        check_positive("rise distance", self.rise_distance)?;
        // Noise at or above 100% could stop or reverse a droplet
        check_range("noise scale", self.noise_scale, 0.0, 1.0)?;
        Ok(())
    }
}

fn validated<P: Validate>(params: &P) -> PhysicsResult<()> {
    params.validate().map_err(|err| {
        log_warn!("Rejected model input: {}", err);
        err
    })
}

/// [`model::terminal_velocity`] with domain checks
pub fn terminal_velocity(params: &TerminalVelocityParams) -> PhysicsResult<f64> {
    validated(params)?;
    check_finite("terminal velocity", model::terminal_velocity(params))
}

/// [`model::radius_from_terminal_velocity`] with domain checks
///
/// A zero velocity passes the input checks but solves to a zero radius,
/// which is reported as [`PhysicsError::NonPositiveRadius`].
pub fn radius_from_terminal_velocity(params: &InverseParams) -> PhysicsResult<f64> {
    validated(params)?;
    check_radius(model::radius_from_terminal_velocity(params))
}

/// [`model::effective_weight`] with domain checks
pub fn effective_weight(params: &WeightParams) -> PhysicsResult<f64> {
    validated(params)?;
    check_finite("effective weight", model::effective_weight(params))
}

/// [`model::charge_from_velocities`] with domain checks
///
/// Returns the charge magnitude; the sign of the field only says which
/// plate the droplet is drawn to.
pub fn charge_from_velocities(params: &ChargeParams) -> PhysicsResult<f64> {
    validated(params)?;
    check_finite("charge", model::charge_from_velocities(params)).map(f64::abs)
}

/// [`model::rise_velocity_for_charge`] with domain checks
///
/// A negative result is returned as-is: it means the droplet keeps falling
/// with the field on.
pub fn rise_velocity_for_charge(params: &RiseParams) -> PhysicsResult<f64> {
    validated(params)?;
    check_finite("rise velocity", model::rise_velocity_for_charge(params))
}

/// [`simulation::simulate_run`] with domain checks on the apparatus settings
pub fn simulate_run<R, C>(
    params: &SimulationParams,
    rng: &mut R,
    clock: &C,
) -> PhysicsResult<RunMeasurement>
where
    R: Rng + ?Sized,
    C: TimeSource + ?Sized,
{
    validated(params)?;
    let run = simulation::simulate_run(params, rng, clock);
    if run.is_finite() {
        Ok(run)
    } else {
        Err(PhysicsError::InvalidValue { quantity: "simulated run" })
    }
}
