//! Parameter records for the physics model
//!
//! Every optional override the model accepts is an explicit field here, and
//! every default is resolved once, in the `Default` impls and constructors,
//! rather than at each call site.
//!
//! | Field           | Default      | Unit  |
//! |-----------------|--------------|-------|
//! | `rho_air`       | 1.225        | kg/m³ |
//! | `g`             | 9.80665      | m/s²  |
//! | `eta_air`       | 1.81e-5      | Pa·s  |
//! | `temperature_k` | 293.15       | K     |
//! | `pressure_pa`   | 101325       | Pa    |
//! | `noise_scale`   | 0.03         | -     |
//!
//! ```rust
//! use millikan_core::{EnvironmentConditions, Medium, TerminalVelocityParams};
//!
//! // Hot, low-pressure chamber instead of room air
//! let medium = Medium::default()
//!     .with_environment(EnvironmentConditions::new(310.0, 90_000.0));
//! let params = TerminalVelocityParams::new(1.0e-6, 886.0).with_medium(medium);
//! assert_eq!(params.medium.eta_air, 1.81e-5);
//! ```

use crate::constants::{
    model::{DEFAULT_PRESSURE_PA, DEFAULT_TEMPERATURE_K},
    physics::{AIR_DENSITY_KG_PER_M3, AIR_VISCOSITY_PA_S, STANDARD_GRAVITY_M_PER_S2},
    simulation::{
        CLASSROOM_PLATE_DISTANCE_M, CLASSROOM_TRAVEL_DISTANCE_M, CLASSROOM_VOLTAGE_V,
        DEFAULT_NOISE_SCALE, OIL_DENSITY_KG_PER_M3,
    },
};

/// Temperature and pressure of the air in the chamber
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EnvironmentConditions {
    /// Absolute temperature (K)
    pub temperature_k: f64,
    /// Absolute pressure (Pa)
    pub pressure_pa: f64,
}

impl Default for EnvironmentConditions {
    fn default() -> Self {
        Self {
            temperature_k: DEFAULT_TEMPERATURE_K,
            pressure_pa: DEFAULT_PRESSURE_PA,
        }
    }
}

impl EnvironmentConditions {
    /// Conditions at the given temperature (K) and pressure (Pa)
    pub const fn new(temperature_k: f64, pressure_pa: f64) -> Self {
        Self { temperature_k, pressure_pa }
    }

    /// Room conditions: 20°C, one standard atmosphere
    pub fn room() -> Self {
        Self::default()
    }

    /// Mean free path of air molecules under these conditions (m)
    #[must_use]
    pub fn mean_free_path(&self) -> f64 {
        crate::model::mean_free_path(self.temperature_k, self.pressure_pa)
    }
}

/// The gas the droplet moves through, plus local gravity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Medium {
    /// Air density (kg/m³)
    pub rho_air: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Air dynamic viscosity (Pa·s)
    pub eta_air: f64,
    /// Temperature and pressure
    pub environment: EnvironmentConditions,
}

impl Default for Medium {
    fn default() -> Self {
        Self {
            rho_air: AIR_DENSITY_KG_PER_M3,
            g: STANDARD_GRAVITY_M_PER_S2,
            eta_air: AIR_VISCOSITY_PA_S,
            environment: EnvironmentConditions::default(),
        }
    }
}

impl Medium {
    /// Sea-level air at room conditions
    pub fn standard_air() -> Self {
        Self::default()
    }

    /// Override air density (kg/m³)
    pub fn with_rho_air(mut self, rho_air: f64) -> Self {
        self.rho_air = rho_air;
        self
    }

    /// Override gravitational acceleration (m/s²)
    pub fn with_gravity(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// Override air viscosity (Pa·s)
    pub fn with_viscosity(mut self, eta_air: f64) -> Self {
        self.eta_air = eta_air;
        self
    }

    /// Override temperature and pressure
    pub fn with_environment(mut self, environment: EnvironmentConditions) -> Self {
        self.environment = environment;
        self
    }
}

/// One oil droplet
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DropletParameters {
    /// Radius (m), must be > 0
    pub radius: f64,
    /// Oil density (kg/m³)
    pub rho_oil: f64,
}

impl DropletParameters {
    /// Droplet of the given radius (m) and oil density (kg/m³)
    pub const fn new(radius: f64, rho_oil: f64) -> Self {
        Self { radius, rho_oil }
    }
}

/// Input of the forward model: droplet radius to terminal velocity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalVelocityParams {
    /// The falling droplet
    pub droplet: DropletParameters,
    /// Surrounding air
    pub medium: Medium,
}

impl TerminalVelocityParams {
    /// Forward-model input in standard air
    pub fn new(radius: f64, rho_oil: f64) -> Self {
        Self {
            droplet: DropletParameters::new(radius, rho_oil),
            medium: Medium::default(),
        }
    }

    /// Replace the surrounding medium
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }
}

/// Input of the inverse model: measured terminal velocity to radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseParams {
    /// Field-off terminal fall velocity (m/s), must be ≥ 0
    pub v_terminal: f64,
    /// Oil density (kg/m³), must exceed `medium.rho_air`
    pub rho_oil: f64,
    /// Surrounding air
    pub medium: Medium,
}

impl InverseParams {
    /// Inverse-model input in standard air
    pub fn new(v_terminal: f64, rho_oil: f64) -> Self {
        Self {
            v_terminal,
            rho_oil,
            medium: Medium::default(),
        }
    }

    /// Replace the surrounding medium
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }
}

/// Input of the net weight (weight minus buoyancy) diagnostic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightParams {
    /// Radius (m)
    pub radius: f64,
    /// Oil density (kg/m³)
    pub rho_oil: f64,
    /// Air density (kg/m³)
    pub rho_air: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
}

impl WeightParams {
    /// Weight input in standard air and gravity
    pub fn new(radius: f64, rho_oil: f64) -> Self {
        Self {
            radius,
            rho_oil,
            rho_air: AIR_DENSITY_KG_PER_M3,
            g: STANDARD_GRAVITY_M_PER_S2,
        }
    }
}

impl From<&TerminalVelocityParams> for WeightParams {
    fn from(params: &TerminalVelocityParams) -> Self {
        Self {
            radius: params.droplet.radius,
            rho_oil: params.droplet.rho_oil,
            rho_air: params.medium.rho_air,
            g: params.medium.g,
        }
    }
}

/// Input of the two-velocity charge estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeParams {
    /// Droplet radius (m), usually from the inverse model
    pub radius: f64,
    /// Field-off fall velocity (m/s)
    pub v_down: f64,
    /// Field-on rise velocity (m/s)
    pub v_up: f64,
    /// Electric field between the plates (V/m)
    pub electric_field: f64,
    /// Air dynamic viscosity (Pa·s)
    pub eta_air: f64,
    /// Temperature and pressure
    pub environment: EnvironmentConditions,
}

impl ChargeParams {
    /// Charge input with default viscosity and environment
    pub fn new(radius: f64, v_down: f64, v_up: f64, electric_field: f64) -> Self {
        Self {
            radius,
            v_down,
            v_up,
            electric_field,
            eta_air: AIR_VISCOSITY_PA_S,
            environment: EnvironmentConditions::default(),
        }
    }

    /// Take viscosity and environment from a medium
    pub fn with_medium(mut self, medium: &Medium) -> Self {
        self.eta_air = medium.eta_air;
        self.environment = medium.environment;
        self
    }
}

/// Input of the rise-velocity forward model (known charge to rise velocity)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseParams {
    /// Droplet radius (m)
    pub radius: f64,
    /// Field-off fall velocity (m/s)
    pub v_down: f64,
    /// Charge magnitude on the droplet (C)
    pub charge: f64,
    /// Electric field between the plates (V/m)
    pub electric_field: f64,
    /// Air dynamic viscosity (Pa·s)
    pub eta_air: f64,
    /// Temperature and pressure
    pub environment: EnvironmentConditions,
}

impl RiseParams {
    /// Rise input with default viscosity and environment
    pub fn new(radius: f64, v_down: f64, charge: f64, electric_field: f64) -> Self {
        Self {
            radius,
            v_down,
            charge,
            electric_field,
            eta_air: AIR_VISCOSITY_PA_S,
            environment: EnvironmentConditions::default(),
        }
    }

    /// Take viscosity and environment from a medium
    pub fn with_medium(mut self, medium: &Medium) -> Self {
        self.eta_air = medium.eta_air;
        self.environment = medium.environment;
        self
    }
}

/// Apparatus settings for one synthetic run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationParams {
    /// Oil density (kg/m³)
    pub rho_oil: f64,
    /// Plate voltage (V)
    pub voltage: f64,
    /// Plate separation (m)
    pub plate_distance: f64,
    /// Timed fall distance (m)
    pub fall_distance: f64,
    /// Timed rise distance (m)
    pub rise_distance: f64,
    /// Relative half-width of the multiplicative velocity noise
    pub noise_scale: f64,
    /// Surrounding air
    pub medium: Medium,
}

impl SimulationParams {
    /// Apparatus with default noise and standard air
    pub fn new(
        rho_oil: f64,
        voltage: f64,
        plate_distance: f64,
        fall_distance: f64,
        rise_distance: f64,
    ) -> Self {
        Self {
            rho_oil,
            voltage,
            plate_distance,
            fall_distance,
            rise_distance,
            noise_scale: DEFAULT_NOISE_SCALE,
            medium: Medium::default(),
        }
    }

    /// Classroom apparatus: 886 kg/m³ oil, 500 V across 10 mm, 1 mm timing marks
    pub fn classroom() -> Self {
        Self::new(
            OIL_DENSITY_KG_PER_M3,
            CLASSROOM_VOLTAGE_V,
            CLASSROOM_PLATE_DISTANCE_M,
            CLASSROOM_TRAVEL_DISTANCE_M,
            CLASSROOM_TRAVEL_DISTANCE_M,
        )
    }

    /// Override the relative noise half-width
    pub fn with_noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Replace the surrounding medium
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    /// Uniform field between the plates (V/m)
    #[must_use]
    pub fn electric_field(&self) -> f64 {
        crate::model::electric_field(self.voltage, self.plate_distance)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::classroom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_to_documented_values() {
        let medium = Medium::default();
        assert_eq!(medium.rho_air, 1.225);
        assert_eq!(medium.g, 9.80665);
        assert_eq!(medium.eta_air, 1.81e-5);
        assert_eq!(medium.environment.temperature_k, 293.15);
        assert_eq!(medium.environment.pressure_pa, 101_325.0);
        assert_eq!(SimulationParams::classroom().noise_scale, 0.03);
    }

    #[test]
    fn charge_params_follow_medium() {
        let medium = Medium::default()
            .with_viscosity(1.9e-5)
            .with_environment(EnvironmentConditions::new(310.0, 95_000.0));
        let params = ChargeParams::new(1.0e-6, 1.0e-4, 5.0e-5, 5.0e4).with_medium(&medium);

        assert_eq!(params.eta_air, 1.9e-5);
        assert_eq!(params.environment.temperature_k, 310.0);
    }

    #[test]
    fn classroom_field() {
        // 500 V over 10 mm
        assert!((SimulationParams::classroom().electric_field() - 5.0e4).abs() < 1e-9);
    }
}
