//! Unit helpers for UI-side inputs
//!
//! Lab forms collect distances in millimetres, radii in micrometres and
//! velocities in mm/s. The model only takes SI, so convert at the boundary.

/// Millimetres to metres
#[inline]
#[must_use]
pub fn mm_to_m(mm: f64) -> f64 {
    mm / 1000.0
}

/// Micrometres to metres
#[inline]
#[must_use]
pub fn um_to_m(um: f64) -> f64 {
    um * 1e-6
}

/// Millimetres per second to metres per second
#[inline]
#[must_use]
pub fn mm_per_s_to_m_per_s(mm_per_s: f64) -> f64 {
    mm_per_s * 1e-3
}

/// Metres to micrometres
#[inline]
#[must_use]
pub fn m_to_um(m: f64) -> f64 {
    m * 1e6
}

/// Metres per second to millimetres per second
#[inline]
#[must_use]
pub fn m_per_s_to_mm_per_s(m_per_s: f64) -> f64 {
    m_per_s * 1e3
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn plate_distance_from_form() {
        assert_eq!(mm_to_m(10.0), 0.01);
    }

    #[test]
    fn conversions_invert() {
        assert_relative_eq!(m_to_um(um_to_m(1.25)), 1.25, max_relative = 1e-12);
        assert_relative_eq!(
            m_per_s_to_mm_per_s(mm_per_s_to_m_per_s(0.12)),
            0.12,
            max_relative = 1e-12
        );
    }
}
