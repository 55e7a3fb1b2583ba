//! Mean attitude of a set of weighted quaternion samples.
//!
//! Component-wise averaging breaks down under the double cover: `q` and `−q`
//! are the same attitude but cancel. Instead the samples are accumulated as
//! the symmetric matrix `M = Σ wᵢ·qᵢ·qᵢᵀ`, which is identical for either sign,
//! and the mean is the eigenvector of `M` with the largest eigenvalue. This is
//! the attitude maximising `Σ wᵢ·(q·qᵢ)²`, and for tightly clustered samples it
//! coincides with the normalised ordinary mean.

use tracing::debug;

use super::eigen::dominant_eigenpair;
use crate::error::{AttitudeError, Result};
use crate::{Matrix4, Quaternion};

impl Quaternion {
    /// Mean attitude with equal weights. See [`Quaternion::average_weighted`].
    pub fn average(quaternions: &[Quaternion]) -> Result<Quaternion> {
        let weights = vec![1.0; quaternions.len()];
        Quaternion::average_weighted(quaternions, &weights)
    }

    /// Weighted mean attitude.
    ///
    /// The returned unit quaternion is signed to agree with the first sample
    /// (non-negative dot product), so `average(&[q, -q]) == q`.
    ///
    /// Errors with [`AttitudeError::InvalidShape`] when the weight count does
    /// not match, and [`AttitudeError::DegenerateInput`] for an empty set, a
    /// non-positive total weight, or samples that are all zero.
    pub fn average_weighted(quaternions: &[Quaternion], weights: &[f64]) -> Result<Quaternion> {
        if weights.len() != quaternions.len() {
            return Err(AttitudeError::InvalidShape {
                what: "average weights",
                expected: quaternions.len(),
                actual: weights.len(),
            });
        }
        let first = match quaternions.first() {
            Some(q) => *q,
            None => return Err(AttitudeError::degenerate("cannot average zero quaternions")),
        };
        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(AttitudeError::degenerate(format!(
                "total averaging weight must be positive, got {total}"
            )));
        }

        let mut m = Matrix4::zeros();
        for (q, &w) in quaternions.iter().zip(weights) {
            let v = q.to_vector4();
            m += v * v.transpose() * w;
        }

        let eig = dominant_eigenpair(&m);
        debug!(
            "Averaged {} quaternions: λmax = {:.6e}, gap = {:.3e}",
            quaternions.len(),
            eig.value,
            eig.gap
        );
        if eig.value <= 0.0 || eig.value.is_nan() {
            return Err(AttitudeError::degenerate(
                "sample matrix has no positive eigenvalue",
            ));
        }

        let mean = Quaternion::from_vector4(&eig.vector).normalize()?;
        if mean.dot(&first) < 0.0 {
            Ok(-mean)
        } else {
            Ok(mean)
        }
    }
}
