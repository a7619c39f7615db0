//! Model Parameters for the slip-corrected Stokes solve
//!
//! Coefficients of the Cunningham correction, the reference point for the
//! mean free path of air, and the fixed pass count of the inverse solver.

use super::physics::STANDARD_ATMOSPHERE_PA;

// ===== MEAN FREE PATH =====

/// Mean free path of air molecules at the reference point (m).
///
/// 65 nm at 300 K and one standard atmosphere.
pub const REFERENCE_MEAN_FREE_PATH_M: f64 = 65.0e-9;

/// Temperature of the mean free path reference point (K).
pub const REFERENCE_TEMPERATURE_K: f64 = 300.0;

/// Pressure of the mean free path reference point (Pa).
pub const REFERENCE_PRESSURE_PA: f64 = STANDARD_ATMOSPHERE_PA;

// ===== CUNNINGHAM SLIP CORRECTION =====
//
// Cc = 1 + (2λ/r)·(A + B·exp(−C·r/λ))
//
// Cunningham–Millikan–Davies coefficients.

/// Constant term of the Cunningham correction.
pub const CUNNINGHAM_A: f64 = 1.257;

/// Amplitude of the exponential term.
pub const CUNNINGHAM_B: f64 = 0.4;

/// Decay rate of the exponential term.
pub const CUNNINGHAM_C: f64 = 1.1;

// ===== INVERSE SOLVER =====

/// Number of fixed-point correction passes in the radius solve.
///
/// Exactly this many passes run after the uncorrected Stokes estimate,
/// regardless of how close successive iterates are. Reported results
/// depend on this count bit-for-bit.
pub const INVERSE_SOLVE_PASSES: usize = 6;

// ===== ENVIRONMENT DEFAULTS =====

/// Default air temperature (K), 20°C.
pub const DEFAULT_TEMPERATURE_K: f64 = 293.15;

/// Default air pressure (Pa).
pub const DEFAULT_PRESSURE_PA: f64 = STANDARD_ATMOSPHERE_PA;
