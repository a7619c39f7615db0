//! Common checks shared by the validated entry points
//!
//! Pure functions, no allocation. Each returns the first violation it finds
//! as a [`PhysicsError`] naming the offending quantity.

use crate::{
    errors::{PhysicsError, PhysicsResult},
    params::{EnvironmentConditions, Medium},
    traits::Validatable,
};

/// Reject NaN and infinity
pub fn check_finite(quantity: &'static str, value: f64) -> PhysicsResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidValue { quantity })
    }
}

/// Require a finite, strictly positive value
pub fn check_positive(quantity: &'static str, value: f64) -> PhysicsResult<f64> {
    check_finite(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::NonPositive { quantity, value })
    }
}

/// Require `min <= value < max`
pub fn check_range(quantity: &'static str, value: f64, min: f64, max: f64) -> PhysicsResult<f64> {
    check_finite(quantity, value)?;
    if value < min || value >= max {
        Err(PhysicsError::OutOfRange { quantity, value, min, max })
    } else {
        Ok(value)
    }
}

/// Require a finite, strictly positive radius
pub fn check_radius(radius: f64) -> PhysicsResult<f64> {
    check_finite("radius", radius)?;
    if radius > 0.0 {
        Ok(radius)
    } else {
        Err(PhysicsError::NonPositiveRadius { radius })
    }
}

/// Require a finite, non-negative velocity magnitude
pub fn check_velocity(quantity: &'static str, velocity: f64) -> PhysicsResult<f64> {
    check_finite(quantity, velocity)?;
    if velocity < 0.0 {
        Err(PhysicsError::NegativeVelocity { velocity })
    } else {
        Ok(velocity)
    }
}

/// Require a finite, non-zero field
pub fn check_field(electric_field: f64) -> PhysicsResult<f64> {
    check_finite("electric field", electric_field)?;
    if electric_field == 0.0 {
        Err(PhysicsError::ZeroField)
    } else {
        Ok(electric_field)
    }
}

/// Require oil denser than air
pub fn check_densities(rho_oil: f64, rho_air: f64) -> PhysicsResult<()> {
    check_finite("oil density", rho_oil)?;
    check_finite("air density", rho_air)?;
    if rho_air < 0.0 {
        return Err(PhysicsError::NonPositive { quantity: "air density", value: rho_air });
    }
    if rho_oil <= rho_air {
        return Err(PhysicsError::DensityInversion { rho_oil, rho_air });
    }
    Ok(())
}

/// Require positive absolute temperature and pressure
pub fn check_environment(environment: &EnvironmentConditions) -> PhysicsResult<()> {
    check_positive("temperature", environment.temperature_k)?;
    check_positive("pressure", environment.pressure_pa)?;
    Ok(())
}

/// Require positive gravity and viscosity, non-negative air density
pub fn check_medium(medium: &Medium) -> PhysicsResult<()> {
    check_finite("air density", medium.rho_air)?;
    if medium.rho_air < 0.0 {
        return Err(PhysicsError::NonPositive { quantity: "air density", value: medium.rho_air });
    }
    check_positive("gravity", medium.g)?;
    check_positive("viscosity", medium.eta_air)?;
    check_environment(&medium.environment)
}
