//! Run measurement record
//!
//! One record per captured or simulated droplet run. Records are plain
//! values: created once, never mutated, appended to a run log by the
//! caller. With the `serde` feature they serialize with the camelCase field
//! names the lab front end stores (`electricField`, `vDown`, `tUp`, ...).

use crate::constants::physics::{CHARGE_DISPLAY_SCALE_C, ELEMENTARY_CHARGE};
use crate::time::Timestamp;

/// Result of one oil-drop run, all quantities in SI units
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunMeasurement {
    /// Creation time (ms since Unix epoch)
    pub timestamp: Timestamp,
    /// Field between the plates (V/m)
    pub electric_field: f64,
    /// Measured field-off fall velocity (m/s)
    pub v_down: f64,
    /// Measured field-on rise velocity (m/s)
    pub v_up: f64,
    /// Time to fall `fall_distance` (s)
    pub t_down: f64,
    /// Time to rise `rise_distance` (s)
    pub t_up: f64,
    /// Radius estimated from `v_down` (m)
    pub radius: f64,
    /// Charge estimated from both velocities (C)
    pub charge: f64,
    /// Plate voltage (V)
    pub voltage: f64,
    /// Plate separation (m)
    pub plate_distance: f64,
    /// Timed fall distance (m)
    pub fall_distance: f64,
    /// Timed rise distance (m)
    pub rise_distance: f64,
}

impl RunMeasurement {
    /// Charge in units of 10⁻¹⁹ C, the figure lab sheets tabulate
    #[must_use]
    pub fn charge_scaled(&self) -> f64 {
        self.charge / CHARGE_DISPLAY_SCALE_C
    }

    /// Charge as a (non-integer) multiple of the elementary charge
    #[must_use]
    pub fn elementary_multiple(&self) -> f64 {
        self.charge.abs() / ELEMENTARY_CHARGE
    }

    /// Nearest whole number of elementary charges, at least one
    #[must_use]
    pub fn nearest_elementary_count(&self) -> u32 {
        let multiple = libm::round(self.elementary_multiple());
        if multiple.is_finite() && multiple >= 1.0 {
            multiple as u32
        } else {
            1
        }
    }

    /// Every floating-point field is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.electric_field,
            self.v_down,
            self.v_up,
            self.t_down,
            self.t_up,
            self.radius,
            self.charge,
            self.voltage,
            self.plate_distance,
            self.fall_distance,
            self.rise_distance,
        ]
        .iter()
        .all(|value| value.is_finite())
    }

    /// Finite, with a positive radius and non-negative velocities
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.is_finite() && self.radius > 0.0 && self.v_down >= 0.0 && self.v_up >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunMeasurement {
        RunMeasurement {
            timestamp: 1_700_000_000_000,
            electric_field: 5.0e4,
            v_down: 1.2e-4,
            v_up: 6.0e-5,
            t_down: 8.33,
            t_up: 16.7,
            radius: 1.0e-6,
            charge: 3.0 * ELEMENTARY_CHARGE,
            voltage: 500.0,
            plate_distance: 0.01,
            fall_distance: 1.0e-3,
            rise_distance: 1.0e-3,
        }
    }

    #[test]
    fn elementary_multiples() {
        let run = sample();
        assert!((run.elementary_multiple() - 3.0).abs() < 1e-12);
        assert_eq!(run.nearest_elementary_count(), 3);
        assert!((run.charge_scaled() - 4.806_529_902).abs() < 1e-8);
    }

    #[test]
    fn tiny_charge_rounds_up_to_one() {
        let run = RunMeasurement { charge: 0.2 * ELEMENTARY_CHARGE, ..sample() };
        assert_eq!(run.nearest_elementary_count(), 1);
    }

    #[test]
    fn non_finite_fields_are_detected() {
        assert!(sample().is_physical());
        let broken = RunMeasurement { t_up: f64::INFINITY, ..sample() };
        assert!(!broken.is_finite());
        let shrunk = RunMeasurement { radius: 0.0, ..sample() };
        assert!(shrunk.is_finite());
        assert!(!shrunk.is_physical());
    }

    #[cfg(feature = "std")]
    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("electricField").is_some());
        assert!(json.get("vDown").is_some());
        assert!(json.get("plateDistance").is_some());
        assert_eq!(json["timestamp"], 1_700_000_000_000u64);
    }
}
