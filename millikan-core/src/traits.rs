//! Core traits for boundary validation
//!
//! Parameter records implement [`Validate`] so the checked API can reject
//! out-of-domain inputs before the formulas run. Keep them simple.

use crate::errors::PhysicsResult;

/// Parameter records that can check their own physical domain
pub trait Validate {
    /// Ok if every field is inside the domain the formulas assume
    fn validate(&self) -> PhysicsResult<()>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
