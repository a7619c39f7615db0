//! Constants for the Millikan oil-drop model
//!
//! All numeric values used by the physics model live here, grouped by
//! domain, with their source and units in the documentation.
//!
//! ## Organization
//!
//! - **Physics**: fundamental constants and reference air properties
//! - **Model**: slip-correction coefficients, solver pass count, defaults
//! - **Simulation**: ranges the synthetic run generator draws from
//! - **Buffers**: run log capacities
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Name constants with their SI unit suffix (`_M`, `_PA`, `_K`, ...)
//! 3. Cite the reference for measured values

/// Fundamental physical constants and reference air properties.
pub mod physics;

/// Slip-correction coefficients, solver parameters and environment defaults.
pub mod model;

/// Parameter ranges for synthetic run generation.
pub mod simulation;

/// Run log capacities.
pub mod buffers;

pub use physics::{
    AIR_DENSITY_KG_PER_M3, AIR_VISCOSITY_PA_S, BOLTZMANN_CONSTANT, ELEMENTARY_CHARGE,
    STANDARD_GRAVITY_M_PER_S2, VACUUM_PERMITTIVITY,
};

pub use model::{
    CUNNINGHAM_A, CUNNINGHAM_B, CUNNINGHAM_C, DEFAULT_PRESSURE_PA, DEFAULT_TEMPERATURE_K,
    INVERSE_SOLVE_PASSES, REFERENCE_MEAN_FREE_PATH_M,
};

pub use simulation::{DEFAULT_NOISE_SCALE, OIL_DENSITY_KG_PER_M3};

pub use buffers::DEFAULT_RUN_LOG_CAPACITY;

/// Process-wide physical constants as a single value record.
///
/// The `pub const` items above are the source of truth; this struct exists
/// so callers can pass the whole set around (or display it) as one value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalConstants {
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Air density (kg/m³)
    pub rho_air: f64,
    /// Air dynamic viscosity (Pa·s)
    pub eta_air: f64,
    /// Boltzmann constant (J/K)
    pub k_b: f64,
    /// Elementary charge (C)
    pub e: f64,
    /// Vacuum permittivity (F/m)
    pub epsilon_0: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            g: STANDARD_GRAVITY_M_PER_S2,
            rho_air: AIR_DENSITY_KG_PER_M3,
            eta_air: AIR_VISCOSITY_PA_S,
            k_b: BOLTZMANN_CONSTANT,
            e: ELEMENTARY_CHARGE,
            epsilon_0: VACUUM_PERMITTIVITY,
        }
    }
}
