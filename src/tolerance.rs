//! Numeric tolerances used by comparisons and degeneracy checks.
//!
//! Comparison tolerances live in [`Tolerance`], which callers construct once
//! and pass by reference. Internal branch thresholds that select a stable
//! formula (rather than deciding pass/fail) are plain constants.

/// Below this angle (radians) `sin(θ)/θ` and `θ/sin(θ)` switch to their Taylor
/// expansions. The truncation error at the threshold is below 1e-22.
pub const SINC_TAYLOR_THRESHOLD: f64 = 1e-4;

/// When `cos(dec)` falls below this value the RA/roll split is degenerate
/// (gimbal lock) and `ra_dec_roll` pins roll to zero.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 1e-12;

/// Angles (degrees) this close below the upper end of a wrapped range snap to
/// the lower end, so `−1e-15°` reports as a roll of `0` rather than
/// `359.99999999999994`.
pub const ANGLE_WRAP_EPSILON: f64 = 1e-9;

/// Tolerances for approximate comparisons and rank checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance for component-wise quaternion equality.
    pub comparison: f64,
    /// Allowed deviation of the norm from 1 for [`crate::Quaternion::is_unit`].
    pub unit_norm: f64,
    /// Relative gap between the two largest eigenvalues of the Davenport
    /// matrix below which a Wahba problem is treated as rank-deficient.
    pub eigen_gap: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            comparison: 1e-9,
            unit_norm: 1e-9,
            eigen_gap: 1e-9,
        }
    }
}

impl Tolerance {
    /// Tolerance with every field set to the same absolute value.
    pub fn uniform(tol: f64) -> Self {
        Self {
            comparison: tol,
            unit_norm: tol,
            eigen_gap: tol,
        }
    }
}

/// `sin(θ)/θ`, stable near zero.
pub(crate) fn sinc(theta: f64) -> f64 {
    if theta.abs() < SINC_TAYLOR_THRESHOLD {
        let t2 = theta * theta;
        1.0 - t2 / 6.0 + t2 * t2 / 120.0
    } else {
        theta.sin() / theta
    }
}

/// `θ/sin(θ)`, stable near zero.
pub(crate) fn inv_sinc(theta: f64) -> f64 {
    if theta.abs() < SINC_TAYLOR_THRESHOLD {
        let t2 = theta * theta;
        1.0 + t2 / 6.0 + 7.0 * t2 * t2 / 360.0
    } else {
        theta / theta.sin()
    }
}
