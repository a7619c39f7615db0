//! Weighted least-squares line fit
//!
//! Closed form over the weighted sums:
//!
//! ```text
//! Δ         = Σw·Σwx² − (Σwx)²
//! slope     = (Σw·Σwxy − Σwx·Σwy) / Δ
//! intercept = (Σwy − slope·Σwx) / Σw
//! ```

use alloc::vec::Vec;

use crate::error::{AnalysisError, AnalysisResult};

/// Fitted line `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    /// Gradient
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    #[inline]
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through `(x, y)`; `weights` default to 1 for every point
pub fn weighted_linear_fit(
    x: &[f64],
    y: &[f64],
    weights: Option<&[f64]>,
) -> AnalysisResult<LinearFit> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch { x: x.len(), y: y.len() });
    }
    if x.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if let Some(w) = weights {
        if w.len() != x.len() {
            return Err(AnalysisError::LengthMismatch { x: w.len(), y: y.len() });
        }
    }

    let weight = |i: usize| weights.map_or(1.0, |w| w[i]);
    let (mut sw, mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (i, (&xi, &yi)) in x.iter().zip(y).enumerate() {
        let wi = weight(i);
        sw += wi;
        sx += wi * xi;
        sy += wi * yi;
        sxx += wi * xi * xi;
        sxy += wi * xi * yi;
    }

    let denom = sw * sxx - sx * sx;
    if denom == 0.0 || sw == 0.0 {
        log_warn!("Degenerate fit over {} points", x.len());
        return Err(AnalysisError::DegenerateFit);
    }

    let slope = (sw * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / sw;
    Ok(LinearFit { slope, intercept })
}

/// `y − fit(x)` for each point
pub fn residuals(x: &[f64], y: &[f64], fit: &LinearFit) -> AnalysisResult<Vec<f64>> {
    if x.len() != y.len() {
        return Err(AnalysisError::LengthMismatch { x: x.len(), y: y.len() });
    }
    Ok(x.iter().zip(y).map(|(&xi, &yi)| yi - fit.predict(xi)).collect())
}
