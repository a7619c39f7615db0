//! Summary of a series of runs
//!
//! Collects the figures a lab report quotes for a series: run count, mean
//! and spread of the charge, mean fall velocity, the quantized elementary
//! charge, and the charge-versus-fall-velocity line with its residuals.

use alloc::vec::Vec;

use millikan_core::{PhysicsError, RunMeasurement};

use crate::{
    error::{AnalysisError, AnalysisResult},
    fit::{residuals, weighted_linear_fit, LinearFit},
    quantize::{linearize_charge, mean_agreement_percent, ChargeQuantization},
    stats,
};

/// Statistics over a series of runs
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RunSummary {
    /// Number of runs
    pub count: usize,
    /// Mean charge (C)
    pub mean_charge: f64,
    /// Population standard deviation of the charge (C)
    pub std_charge: f64,
    /// Smallest and largest charge (C)
    pub charge_range: (f64, f64),
    /// Mean fall velocity (m/s)
    pub mean_v_down: f64,
    /// Mean closeness to an integer multiple of e (percent)
    pub agreement_percent: f64,
    /// Elementary-charge estimate and per-run multiples
    pub quantization: ChargeQuantization,
    /// Charge against fall velocity; `None` when every run fell at the same speed
    pub charge_fit: Option<LinearFit>,
    /// Charge residuals about `charge_fit`, in run order (empty without a fit)
    pub residuals: Vec<f64>,
}

impl RunSummary {
    /// Summarize `runs`
    ///
    /// Every run must be finite; the first one that is not is reported as a
    /// physics error.
    pub fn from_runs<'a, I>(runs: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = &'a RunMeasurement>,
    {
        let mut charges = Vec::new();
        let mut v_downs = Vec::new();
        for run in runs {
            if !run.is_finite() {
                return Err(PhysicsError::InvalidValue { quantity: "run measurement" }.into());
            }
            charges.push(run.charge);
            v_downs.push(run.v_down);
        }
        if charges.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let charge_fit = match weighted_linear_fit(&v_downs, &charges, None) {
            Ok(fit) => Some(fit),
            Err(AnalysisError::DegenerateFit) => None,
            Err(err) => return Err(err),
        };
        let residuals = match &charge_fit {
            Some(fit) => residuals(&v_downs, &charges, fit)?,
            None => Vec::new(),
        };

        Ok(Self {
            count: charges.len(),
            mean_charge: stats::mean(&charges)?,
            std_charge: stats::std_dev(&charges)?,
            charge_range: stats::min_max(&charges)?,
            mean_v_down: stats::mean(&v_downs)?,
            agreement_percent: mean_agreement_percent(&charges)?,
            quantization: linearize_charge(&charges)?,
            charge_fit,
            residuals,
        })
    }
}
