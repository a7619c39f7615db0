//! Error Types for Out-of-Domain Physics Inputs
//!
//! ## Design Philosophy
//!
//! The formulas in [`crate::model`] never fail: they are total over `f64` and
//! let IEEE-754 propagate NaN/∞ when a precondition is broken. Errors only
//! exist at the boundary, in [`crate::checked`], where inputs are validated
//! before the formulas run and outputs are inspected afterwards.
//!
//! 1. **Small Size**: every variant carries at most a few `f64`s and a
//!    `&'static str` naming the offending quantity.
//!
//! 2. **No Heap Allocation**: no `String` payloads, so the type stays usable
//!    without `std`.
//!
//! 3. **Copy Semantics**: errors are `Copy` and cheap to return by value.
//!
//! ## Error Categories
//!
//! ### Precondition Violations
//! - `NonPositiveRadius`: droplet radius ≤ 0 (Cunningham term divides by r)
//! - `DensityInversion`: oil no denser than air, the droplet would not fall
//! - `ZeroField`: charge estimate divides by the electric field
//! - `NegativeVelocity`: velocities are magnitudes in this sign convention
//! - `NonPositive` / `OutOfRange`: environment and configuration limits
//!
//! ### Numeric Degradation
//! - `InvalidValue`: a NaN or infinity went in or came out
//!
//! ### Run Log
//! - `LogFull`: bounded run log has no free slot
//!
//! ```rust
//! use millikan_core::{checked, PhysicsError, TerminalVelocityParams};
//!
//! let params = TerminalVelocityParams::new(-1.0e-6, 886.0);
//! match checked::terminal_velocity(&params) {
//!     Err(PhysicsError::NonPositiveRadius { .. }) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for boundary-checked physics operations
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Physics input/output errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Droplet radius must be strictly positive
    #[error("Radius {radius} m is not positive")]
    NonPositiveRadius {
        /// The rejected radius in meters
        radius: f64,
    },

    /// Oil density must exceed air density for a droplet to fall
    #[error("Oil density {rho_oil} kg/m³ does not exceed air density {rho_air} kg/m³")]
    DensityInversion {
        /// Oil density in kg/m³
        rho_oil: f64,
        /// Air density in kg/m³
        rho_air: f64,
    },

    /// Electric field of zero makes the charge estimate undefined
    #[error("Electric field is zero")]
    ZeroField,

    /// Velocity magnitudes must be non-negative
    #[error("Velocity {velocity} m/s is negative")]
    NegativeVelocity {
        /// The rejected velocity in m/s
        velocity: f64,
    },

    /// A quantity that must be strictly positive was not
    #[error("{quantity} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending quantity
        quantity: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Value outside its accepted interval
    #[error("{quantity} = {value} outside range [{min}, {max})")]
    OutOfRange {
        /// Name of the offending quantity
        quantity: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Exclusive upper bound
        max: f64,
    },

    /// NaN or infinity in an input or a computed result
    #[error("Invalid value for {quantity}: not a finite number")]
    InvalidValue {
        /// Name of the offending quantity
        quantity: &'static str,
    },

    /// Bounded run log cannot take another record
    #[error("Run log full: capacity {capacity}")]
    LogFull {
        /// Maximum number of runs the log holds
        capacity: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for PhysicsError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonPositiveRadius { radius } =>
                defmt::write!(fmt, "Radius {} not positive", radius),
            Self::DensityInversion { rho_oil, rho_air } =>
                defmt::write!(fmt, "rho_oil {} <= rho_air {}", rho_oil, rho_air),
            Self::ZeroField =>
                defmt::write!(fmt, "Zero electric field"),
            Self::NegativeVelocity { velocity } =>
                defmt::write!(fmt, "Negative velocity {}", velocity),
            Self::NonPositive { quantity, value } =>
                defmt::write!(fmt, "{} not positive: {}", quantity, value),
            Self::OutOfRange { quantity, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {})", quantity, value, min, max),
            Self::InvalidValue { quantity } =>
                defmt::write!(fmt, "Invalid {}", quantity),
            Self::LogFull { capacity } =>
                defmt::write!(fmt, "Run log full ({})", capacity),
        }
    }
}
