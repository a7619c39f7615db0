//! Physical Constants for the oil-drop model
//!
//! Fundamental constants are CODATA values; the air properties are the
//! sea-level reference values used throughout the lab simulations.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Standard gravitational acceleration (m/s²).
///
/// Exact by definition (3rd CGPM, 1901).
pub const STANDARD_GRAVITY_M_PER_S2: f64 = 9.806_65;

/// Elementary charge _e_ (C).
///
/// Exact value by 2019 SI definition.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Boltzmann constant _k_B_ (J/K).
///
/// Exact value by 2019 SI definition.
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Vacuum permittivity ε₀ (F/m).
///
/// CODATA 2018 value, 11 significant figures.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

// ===== REFERENCE AIR PROPERTIES =====

/// Density of dry air at sea level, 15°C (kg/m³).
///
/// Source: International Standard Atmosphere (ISA)
pub const AIR_DENSITY_KG_PER_M3: f64 = 1.225;

/// Dynamic viscosity of air near room temperature (Pa·s).
///
/// The value Millikan-style lab manuals tabulate for ~20°C air.
pub const AIR_VISCOSITY_PA_S: f64 = 1.81e-5;

/// Standard atmosphere (Pa).
///
/// Exact by definition.
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

/// Scale used when reporting charges as "×10⁻¹⁹ C" figures (C).
pub const CHARGE_DISPLAY_SCALE_C: f64 = 1.0e-19;
