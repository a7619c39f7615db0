//! Millikan Oil-Drop Physics Model
//!
//! ## Force Balance
//!
//! A droplet of radius r falling through air at terminal velocity feels
//! three forces that cancel:
//!
//! ```text
//!   weight − buoyancy = (ρ_oil − ρ_air) · (4/3)πr³ · g
//!   drag              = b · v,   b = 6πηr / Cc
//! ```
//!
//! where `Cc` is the Cunningham slip correction. Micron-sized droplets are
//! comparable to the mean free path λ of air, so the continuum Stokes drag
//! over-estimates the resistance and `Cc > 1` compensates:
//!
//! ```text
//!   Cc = 1 + (2λ/r) · (A + B·exp(−C·r/λ))
//! ```
//!
//! ## Two-Velocity Charge Estimate
//!
//! With the field off, the droplet falls at `v_down` (weight = drag). With
//! the field on, it rises at `v_up` (qE = weight + drag). Adding the two
//! balances cancels the weight term:
//!
//! ```text
//!   q = b · (v_down + v_up) / E
//! ```
//!
//! ## Numeric Domain
//!
//! Every function here is total over `f64` and free of side effects. Inputs
//! outside the physical domain (r ≤ 0, ρ_oil ≤ ρ_air, E = 0) are not
//! checked: they come back as NaN, ∞ or a negative number. Use
//! [`crate::checked`] when inputs come from a user.

use core::f64::consts::PI;

use crate::constants::model::{
    CUNNINGHAM_A, CUNNINGHAM_B, CUNNINGHAM_C, INVERSE_SOLVE_PASSES, REFERENCE_MEAN_FREE_PATH_M,
    REFERENCE_PRESSURE_PA, REFERENCE_TEMPERATURE_K,
};
use crate::params::{ChargeParams, InverseParams, RiseParams, TerminalVelocityParams, WeightParams};

/// Mean free path of air molecules (m)
///
/// Scales the 65 nm reference value linearly with temperature and inversely
/// with pressure: `λ = λ₀ · (T/300) · (101325/P)`.
#[inline]
#[must_use]
pub fn mean_free_path(temperature_k: f64, pressure_pa: f64) -> f64 {
    REFERENCE_MEAN_FREE_PATH_M
        * (temperature_k / REFERENCE_TEMPERATURE_K)
        * (REFERENCE_PRESSURE_PA / pressure_pa)
}

/// Cunningham slip correction factor (dimensionless, ≥ 1 for r > 0)
///
/// Precondition: `radius > 0`. Zero gives ∞, a negative radius gives a
/// meaningless value; neither is clamped.
#[inline]
#[must_use]
pub fn cunningham_correction(radius: f64, temperature_k: f64, pressure_pa: f64) -> f64 {
    let lambda = mean_free_path(temperature_k, pressure_pa);
    1.0 + (2.0 * lambda / radius)
        * (CUNNINGHAM_A + CUNNINGHAM_B * libm::exp(-CUNNINGHAM_C * radius / lambda))
}

/// Slip-corrected Stokes drag coefficient `b = 6πηr / Cc` (N·s/m)
#[inline]
#[must_use]
pub fn drag_coefficient(radius: f64, eta_air: f64, temperature_k: f64, pressure_pa: f64) -> f64 {
    let cc = cunningham_correction(radius, temperature_k, pressure_pa);
    (6.0 * PI * eta_air * radius) / cc
}

/// Terminal fall velocity of a droplet with the field off (m/s)
///
/// `v = 2r²(ρ_oil − ρ_air)g · Cc / (9η)`
#[must_use]
pub fn terminal_velocity(params: &TerminalVelocityParams) -> f64 {
    let radius = params.droplet.radius;
    let medium = &params.medium;
    let cc = cunningham_correction(
        radius,
        medium.environment.temperature_k,
        medium.environment.pressure_pa,
    );
    (2.0 * radius * radius * (params.droplet.rho_oil - medium.rho_air) * medium.g * cc)
        / (9.0 * medium.eta_air)
}

/// Droplet radius that falls at the given terminal velocity (m)
///
/// `Cc` depends on r, so there is no closed form. The uncorrected Stokes
/// radius seeds a fixed-point iteration that recomputes `Cc` at the current
/// estimate and solves for r again. Exactly [`INVERSE_SOLVE_PASSES`] passes
/// run; there is no tolerance test, so the result is always produced and may
/// be short of full convergence for extreme radii.
///
/// Preconditions: `v_terminal ≥ 0` and `rho_oil > rho_air`. Violating them
/// yields NaN or zero, which callers must treat as invalid input.
#[must_use]
pub fn radius_from_terminal_velocity(params: &InverseParams) -> f64 {
    radius_iterates(params)[INVERSE_SOLVE_PASSES]
}

/// Every estimate of the inverse solve, the Stokes seed first
///
/// Element 0 is the uncorrected (`Cc = 1`) radius and element `i` the
/// estimate after `i` correction passes, so the last element is what
/// [`radius_from_terminal_velocity`] returns.
#[must_use]
pub fn radius_iterates(params: &InverseParams) -> [f64; INVERSE_SOLVE_PASSES + 1] {
    let medium = &params.medium;
    let env = &medium.environment;
    let numerator = 9.0 * medium.eta_air * params.v_terminal;
    let denominator = 2.0 * (params.rho_oil - medium.rho_air) * medium.g;

    let mut iterates = [0.0; INVERSE_SOLVE_PASSES + 1];
    let mut radius = libm::sqrt(numerator / denominator);
    iterates[0] = radius;

    for slot in iterates.iter_mut().skip(1) {
        let cc = cunningham_correction(radius, env.temperature_k, env.pressure_pa);
        radius = libm::sqrt(numerator / (denominator * cc));
        *slot = radius;
    }

    iterates
}

/// Net downward force on the droplet, weight minus buoyancy (N)
///
/// Diagnostic only; the charge solve never needs it because the two-velocity
/// method cancels the weight term.
#[must_use]
pub fn effective_weight(params: &WeightParams) -> f64 {
    let volume = (4.0 / 3.0) * PI * params.radius * params.radius * params.radius;
    (params.rho_oil - params.rho_air) * volume * params.g
}

/// Charge magnitude from field-off fall and field-on rise velocities (C)
///
/// `q = b · (v_down + v_up) / E`, with `b` the slip-corrected drag at the
/// given radius. The sign follows the sign of `electric_field`.
#[must_use]
pub fn charge_from_velocities(params: &ChargeParams) -> f64 {
    let drag = drag_coefficient(
        params.radius,
        params.eta_air,
        params.environment.temperature_k,
        params.environment.pressure_pa,
    );
    (drag * (params.v_down + params.v_up)) / params.electric_field
}

/// Field-on rise velocity of a droplet carrying a known charge (m/s)
///
/// Inverts the charge estimate: `v_up = qE / b − v_down`. Negative means
/// the field is too weak to lift the droplet and it keeps falling.
#[must_use]
pub fn rise_velocity_for_charge(params: &RiseParams) -> f64 {
    let drag = drag_coefficient(
        params.radius,
        params.eta_air,
        params.environment.temperature_k,
        params.environment.pressure_pa,
    );
    params.charge * params.electric_field / drag - params.v_down
}

/// Uniform field between parallel plates `E = V/d` (V/m)
#[inline]
#[must_use]
pub fn electric_field(voltage: f64, plate_distance: f64) -> f64 {
    voltage / plate_distance
}
