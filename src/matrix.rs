//! Conversion between unit quaternions and direction cosine matrices.
//!
//! The matrix of `q` transforms coordinates: `q.matrix() * v` gives, in the
//! frame described by `q`, the vector whose reference-frame coordinates are
//! `v`. Its rows are that frame's axes expressed in the reference frame.

use tracing::debug;

use crate::{Matrix3, Quaternion, Vector3};

impl Quaternion {
    /// Direction cosine matrix of a unit quaternion.
    ///
    /// Proper orthogonal (`det = +1`) for unit-norm input, and compatible with
    /// composition: `(a * b).matrix() == a.matrix() * b.matrix()`.
    pub fn matrix(&self) -> Matrix3 {
        let (s, x, y, z) = (self.s, self.x, self.y, self.z);
        let (ss, xx, yy, zz) = (s * s, x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (sx, sy, sz) = (s * x, s * y, s * z);

        Matrix3::new(
            ss + xx - yy - zz,
            2.0 * (xy + sz),
            2.0 * (xz - sy),
            2.0 * (xy - sz),
            ss - xx + yy - zz,
            2.0 * (yz + sx),
            2.0 * (xz + sy),
            2.0 * (yz - sx),
            ss - xx - yy + zz,
        )
    }

    /// Rows of [`Quaternion::matrix`]: the axes of the described frame,
    /// expressed in the reference frame.
    pub fn basis(&self) -> [Vector3; 3] {
        let m = self.matrix();
        [
            m.row(0).transpose(),
            m.row(1).transpose(),
            m.row(2).transpose(),
        ]
    }

    /// Unit quaternion from a rotation (direction cosine) matrix.
    ///
    /// Shepperd's method: of the four squared components
    /// `4s² = 1 + tr`, `4x² = 1 + 2m00 − tr`, `4y² = 1 + 2m11 − tr`,
    /// `4z² = 1 + 2m22 − tr`, the largest is solved for first and taken
    /// non-negative (ties resolve in the order s, x, y, z). The other three
    /// components come from sums and differences of symmetric off-diagonal
    /// entries divided by that pivot, so the divisor is never smaller than ½.
    ///
    /// The result is renormalised, which absorbs rounding in matrices given
    /// to a few significant digits. Finite input that is far from orthogonal
    /// gives an unspecified unit-norm quaternion. A matrix containing NaN or
    /// infinite entries gives a quaternion with NaN components rather than a
    /// plausible-looking attitude.
    pub fn from_matrix(m: &Matrix3) -> Quaternion {
        let tr = m.trace();
        let candidates = [
            1.0 + tr,
            1.0 + 2.0 * m[(0, 0)] - tr,
            1.0 + 2.0 * m[(1, 1)] - tr,
            1.0 + 2.0 * m[(2, 2)] - tr,
        ];

        let mut pivot = 0;
        for (i, c) in candidates.iter().enumerate().skip(1) {
            if *c > candidates[pivot] {
                pivot = i;
            }
        }

        // At least one candidate is ≥ 1 for any rotation matrix.
        let p = 0.5 * candidates[pivot].max(0.0).sqrt();
        let k = 0.25 / p;

        let q = match pivot {
            0 => Quaternion::new(
                p,
                (m[(1, 2)] - m[(2, 1)]) * k,
                (m[(2, 0)] - m[(0, 2)]) * k,
                (m[(0, 1)] - m[(1, 0)]) * k,
            ),
            1 => Quaternion::new(
                (m[(1, 2)] - m[(2, 1)]) * k,
                p,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            ),
            2 => Quaternion::new(
                (m[(2, 0)] - m[(0, 2)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                p,
                (m[(1, 2)] + m[(2, 1)]) * k,
            ),
            _ => Quaternion::new(
                (m[(0, 1)] - m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                p,
            ),
        };

        match q.normalize() {
            Ok(unit) => unit,
            Err(err) => {
                // the candidates sum to 4, so only NaN or infinite entries get here
                debug!("from_matrix on a non-finite matrix: {err}");
                q
            }
        }
    }
}
