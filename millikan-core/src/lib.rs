//! Physics core for the Millikan oil-drop experiment
//!
//! Converts observed droplet velocities into an estimated charge using
//! Stokes drag with the Cunningham slip correction, solves the inverse
//! radius-from-velocity problem, and generates synthetic runs.
//!
//! Key constraints:
//! - Pure functions, no I/O, no shared state
//! - No heap allocation (builds `no_std` without the `std` feature)
//! - Fixed-cost solves: the inverse model always runs six passes
//!
//! ```no_run
//! use millikan_core::{model, ChargeParams, InverseParams};
//!
//! // Field-off fall and field-on rise velocities from the stopwatch
//! let (v_down, v_up) = (1.2e-4, 6.1e-5);
//! let radius = model::radius_from_terminal_velocity(&InverseParams::new(v_down, 886.0));
//! let charge = model::charge_from_velocities(&ChargeParams::new(radius, v_down, v_up, 5.0e4));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod checked;
pub mod constants;
pub mod errors;
pub mod measurement;
pub mod model;
pub mod params;
pub mod runs;
pub mod simulation;
pub mod time;
pub mod traits;
pub mod units;

// Public API
pub use constants::PhysicalConstants;
pub use errors::{PhysicsError, PhysicsResult};
pub use measurement::RunMeasurement;
pub use params::{
    ChargeParams, DropletParameters, EnvironmentConditions, InverseParams, Medium, RiseParams,
    SimulationParams, TerminalVelocityParams, WeightParams,
};
pub use runs::RunLog;
pub use simulation::{simulate_run, simulate_run_with_truth, GroundTruth, Simulator};
#[cfg(feature = "std")]
pub use simulation::simulate_run_unseeded;
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use time::{FixedClock, TimeSource, Timestamp};
pub use traits::{Validatable, Validate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn constants_record_matches_items() {
        let c = PhysicalConstants::default();
        assert_eq!(c.e, constants::ELEMENTARY_CHARGE);
        assert_eq!(c.g, constants::STANDARD_GRAVITY_M_PER_S2);
        assert_eq!(c.k_b, 1.380_649e-23);
    }
}
