//! Synthetic Run Parameters
//!
//! Ranges the run simulator draws from. The radius range covers the
//! droplets a classroom atomizer produces that fall slowly enough to time
//! by eye.

/// Smallest "true" droplet radius the simulator draws (m).
pub const SIM_RADIUS_MIN_M: f64 = 0.7e-6;

/// Width of the simulated radius interval (m); upper bound is 1.5 µm.
pub const SIM_RADIUS_SPAN_M: f64 = 0.8e-6;

/// Smallest rise velocity as a fraction of the fall velocity.
pub const SIM_RISE_FRACTION_MIN: f64 = 0.4;

/// Width of the rise fraction interval; upper bound is 1.0.
pub const SIM_RISE_FRACTION_SPAN: f64 = 0.6;

/// Default relative measurement noise (±3%).
pub const DEFAULT_NOISE_SCALE: f64 = 0.03;

/// Density of the watch/clock oil used in classroom apparatus (kg/m³).
pub const OIL_DENSITY_KG_PER_M3: f64 = 886.0;

/// Default plate voltage for the classroom preset (V).
pub const CLASSROOM_VOLTAGE_V: f64 = 500.0;

/// Default plate separation for the classroom preset (m), 10 mm.
pub const CLASSROOM_PLATE_DISTANCE_M: f64 = 10.0e-3;

/// Default timed fall/rise distance for the classroom preset (m), 1 mm.
pub const CLASSROOM_TRAVEL_DISTANCE_M: f64 = 1.0e-3;
