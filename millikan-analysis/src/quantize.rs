//! Elementary-charge quantization
//!
//! Charges from a good series cluster at integer multiples of e. The median
//! charge is taken as a first guess for e, each run is assigned the nearest
//! multiple (never less than one), and e is re-estimated as the mean of
//! `|q| / n` across runs.

use alloc::vec::Vec;

use millikan_core::constants::ELEMENTARY_CHARGE;

use crate::{
    error::{AnalysisError, AnalysisResult},
    stats,
};

/// Result of quantizing a charge series
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChargeQuantization {
    /// Refined elementary charge estimate (C)
    pub e_estimate: f64,
    /// Assigned multiple for each input charge, in input order
    pub multiples: Vec<u32>,
}

impl ChargeQuantization {
    /// Signed relative error of the estimate against the accepted e
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        (self.e_estimate - ELEMENTARY_CHARGE) / ELEMENTARY_CHARGE
    }
}

/// Assign integer multiples to `charges` and refine the elementary charge
pub fn linearize_charge(charges: &[f64]) -> AnalysisResult<ChargeQuantization> {
    let median = stats::median(charges)?;
    let unit = if median == 0.0 {
        log_warn!("Median charge is zero, quantizing against unit charge");
        1.0
    } else {
        median
    };

    let multiples: Vec<u32> = charges
        .iter()
        .map(|&q| nearest_multiple(q, unit))
        .collect();

    let e_estimate = charges
        .iter()
        .zip(&multiples)
        .map(|(&q, &n)| q.abs() / f64::from(n))
        .sum::<f64>()
        / charges.len() as f64;

    log_debug!("Quantized {} charges, e ≈ {:.4e} C", charges.len(), e_estimate);
    Ok(ChargeQuantization { e_estimate, multiples })
}

/// How close a charge sits to its nearest integer multiple of e, in percent
///
/// 100 means an exact multiple; halfway between two multiples scores 50.
/// Never negative.
#[must_use]
pub fn agreement_percent(charge: f64) -> f64 {
    let n = libm::round(charge / ELEMENTARY_CHARGE);
    let miss = (charge - n * ELEMENTARY_CHARGE).abs() / ELEMENTARY_CHARGE;
    (100.0 * (1.0 - miss)).max(0.0)
}

/// Mean agreement across a charge series
pub fn mean_agreement_percent(charges: &[f64]) -> AnalysisResult<f64> {
    if charges.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(charges.iter().map(|&q| agreement_percent(q)).sum::<f64>() / charges.len() as f64)
}

fn nearest_multiple(charge: f64, unit: f64) -> u32 {
    let n = libm::round((charge / unit).abs());
    if n < 1.0 {
        1
    } else {
        // Saturating float-to-int cast
        n as u32
    }
}
