//! Davenport's q-method for Wahba's problem.
//!
//! Given paired observations `v1ᵢ` (frame 1) and `v2ᵢ` (frame 2) with weights
//! `wᵢ`, find the unit quaternion minimising `Σ wᵢ·|v2ᵢ − R(q)·v1ᵢ|²`, where
//! `R(q)` is [`Quaternion::matrix`].
//!
//! With the attitude profile matrix `B = Σ wᵢ·v2ᵢ·v1ᵢᵀ`, `S = B + Bᵀ`,
//! `σ = tr(B)` and `z = (B₁₂ − B₂₁, B₂₀ − B₀₂, B₀₁ − B₁₀)`, the loss is
//! minimised by the dominant eigenvector of
//!
//! ```text
//!     ⎡ σ   zᵀ     ⎤
//! K = ⎣ z   S − σI ⎦
//! ```
//!
//! (scalar-first ordering).

use tracing::debug;

use super::eigen::dominant_eigenpair;
use crate::error::{AttitudeError, Result};
use crate::tolerance::Tolerance;
use crate::{Matrix3, Matrix4, Quaternion, Vector3};

impl Quaternion {
    /// Optimal attitude taking `frame1` vectors onto `frame2` vectors, using
    /// the default [`Tolerance`].
    ///
    /// Needs at least two non-collinear pairs with positive weight; see
    /// [`Quaternion::from_qmethod_with_tolerance`] for the error cases.
    pub fn from_qmethod(
        frame1: &[Vector3],
        frame2: &[Vector3],
        weights: &[f64],
    ) -> Result<Quaternion> {
        Quaternion::from_qmethod_with_tolerance(frame1, frame2, weights, &Tolerance::default())
    }

    /// Optimal attitude taking `frame1` vectors onto `frame2` vectors.
    ///
    /// The result satisfies `q.matrix() * frame1[i] ≈ frame2[i]` and has a
    /// non-negative scalar part.
    ///
    /// # Errors
    ///
    /// - [`AttitudeError::InvalidShape`] if the three slices differ in length.
    /// - [`AttitudeError::DegenerateInput`] for fewer than two pairs, for a
    ///   negative or non-finite weight, for a zero total weight, or when the
    ///   top two eigenvalues of `K` are within `tol.eigen_gap` (relative) of
    ///   each other, which happens when the observations are collinear and
    ///   the attitude is not uniquely determined.
    pub fn from_qmethod_with_tolerance(
        frame1: &[Vector3],
        frame2: &[Vector3],
        weights: &[f64],
        tol: &Tolerance,
    ) -> Result<Quaternion> {
        if frame2.len() != frame1.len() {
            return Err(AttitudeError::InvalidShape {
                what: "q-method frame 2 vectors",
                expected: frame1.len(),
                actual: frame2.len(),
            });
        }
        if weights.len() != frame1.len() {
            return Err(AttitudeError::InvalidShape {
                what: "q-method weights",
                expected: frame1.len(),
                actual: weights.len(),
            });
        }
        if frame1.len() < 2 {
            return Err(AttitudeError::degenerate(format!(
                "q-method needs at least two vector pairs, got {}",
                frame1.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| **w < 0.0 || !w.is_finite()) {
            return Err(AttitudeError::degenerate(format!(
                "q-method weights must be finite and non-negative, got {w}"
            )));
        }
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Err(AttitudeError::degenerate(format!(
                "total q-method weight must be positive, got {total}"
            )));
        }

        let k = davenport_matrix(&attitude_profile(frame1, frame2, weights));
        let eig = dominant_eigenpair(&k);
        debug!(
            "q-method with {} pairs: λmax = {:.9}, gap = {:.3e}",
            frame1.len(),
            eig.value,
            eig.gap
        );

        if eig.is_degenerate(tol.eigen_gap) {
            return Err(AttitudeError::degenerate(format!(
                "q-method observations do not determine a unique attitude \
                 (eigenvalue gap {:.3e})",
                eig.gap
            )));
        }

        Ok(Quaternion::from_vector4(&eig.vector)
            .normalize()?
            .positive_representative())
    }
}

/// `B = Σ wᵢ·v2ᵢ·v1ᵢᵀ`.
fn attitude_profile(frame1: &[Vector3], frame2: &[Vector3], weights: &[f64]) -> Matrix3 {
    frame1
        .iter()
        .zip(frame2)
        .zip(weights)
        .fold(Matrix3::zeros(), |b, ((v1, v2), &w)| {
            b + v2 * v1.transpose() * w
        })
}

/// Davenport's symmetric 4×4 matrix `K` for the profile matrix `B`.
fn davenport_matrix(b: &Matrix3) -> Matrix4 {
    let sigma = b.trace();
    let s = b + b.transpose() - Matrix3::identity() * sigma;
    let z = Vector3::new(
        b[(1, 2)] - b[(2, 1)],
        b[(2, 0)] - b[(0, 2)],
        b[(0, 1)] - b[(1, 0)],
    );

    let mut k = Matrix4::zeros();
    k[(0, 0)] = sigma;
    for i in 0..3 {
        k[(0, i + 1)] = z[i];
        k[(i + 1, 0)] = z[i];
        for j in 0..3 {
            k[(i + 1, j + 1)] = s[(i, j)];
        }
    }
    k
}
