//! Dominant eigenpair of a small symmetric matrix.
//!
//! Both the attitude averager and the q-method reduce to "largest eigenvector
//! of a symmetric 4×4 matrix"; they share this routine.

use nalgebra::SymmetricEigen;

use crate::{Matrix4, Vector4};

/// Largest eigenvalue, its unit eigenvector, and the gap to the next one.
#[derive(Debug, Clone)]
pub(crate) struct DominantEigen {
    pub value: f64,
    pub vector: Vector4,
    /// `λ₁ − λ₂ ≥ 0`. Zero (to rounding) when the dominant eigenspace is
    /// not one-dimensional.
    pub gap: f64,
}

impl DominantEigen {
    /// Whether the gap is too small, relative to `|λ₁|`, for the
    /// eigenvector to be well defined.
    pub fn is_degenerate(&self, relative_tol: f64) -> bool {
        self.gap <= relative_tol * self.value.abs().max(f64::MIN_POSITIVE)
    }
}

/// Eigen-decompose a symmetric matrix and return its dominant eigenpair.
///
/// Only the lower triangle is read.
pub(crate) fn dominant_eigenpair(m: &Matrix4) -> DominantEigen {
    let eig = SymmetricEigen::new(*m);

    let mut order = [0usize, 1, 2, 3];
    order.sort_by(|&a, &b| {
        eig.eigenvalues[b]
            .partial_cmp(&eig.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top = order[0];
    let value = eig.eigenvalues[top];
    let gap = value - eig.eigenvalues[order[1]];
    let vector = eig.eigenvectors.column(top).normalize();

    DominantEigen { value, vector, gap }
}
