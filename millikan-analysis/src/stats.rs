//! Descriptive statistics over charge and velocity samples

use alloc::vec::Vec;

use crate::error::{AnalysisError, AnalysisResult};

/// Arithmetic mean
pub fn mean(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by n, not n − 1)
pub fn std_dev(values: &[f64]) -> AnalysisResult<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / values.len() as f64;
    Ok(libm::sqrt(variance))
}

/// Median; even-length input averages the two middle values
pub fn median(values: &[f64]) -> AnalysisResult<f64> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Smallest and largest sample
pub fn min_max(values: &[f64]) -> AnalysisResult<(f64, f64)> {
    let first = *values.first().ok_or(AnalysisError::EmptyInput)?;
    Ok(values
        .iter()
        .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}
