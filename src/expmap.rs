//! Exponential and logarithm maps between rotation vectors and unit quaternions.
//!
//! A rotation vector `φ` (axis × angle, radians) maps to the unit quaternion
//! `exp((0, φ/2))`, and back through `2·log(q)`. Both directions use Taylor
//! expansions of `sin(θ)/θ` near zero so that tiny rotations never divide by
//! a vanishing norm.

use crate::tolerance::{inv_sinc, sinc};
use crate::{Quaternion, Vector3};

impl Quaternion {
    /// Quaternion exponential, `exp(s + v) = e^s·(cos|v|, sinc(|v|)·v)`.
    ///
    /// For a pure quaternion `(0, v)` the result has unit norm and describes
    /// a rotation by `2|v|` about `v`.
    pub fn exp(&self) -> Quaternion {
        let v = self.vector();
        let theta = v.norm();
        let scale = self.s.exp();
        Quaternion::from_scalar_vector(scale * theta.cos(), &(v * (scale * sinc(theta))))
    }

    /// Quaternion logarithm, `(ln|q|, atan2(|v|, s)·v/|v|)`.
    ///
    /// The angle is taken from `atan2`, which stays well conditioned both
    /// for tiny rotations and near a half turn where `s ≈ 0`. A negative real
    /// quaternion (a full turn) has no defined axis; its vector part is
    /// returned as zero.
    pub fn log(&self) -> Quaternion {
        let n = self.norm();
        let v = self.vector();
        let vn = v.norm();
        let theta = vn.atan2(self.s);

        let factor = if theta < crate::tolerance::SINC_TAYLOR_THRESHOLD {
            // vn = n·sin(θ)
            inv_sinc(theta) / n
        } else if vn > 0.0 {
            theta / vn
        } else {
            0.0
        };
        Quaternion::from_scalar_vector(n.ln(), &(v * factor))
    }

    /// Unit quaternion for a rotation vector: `exp((0, φ/2))`.
    pub fn from_rotation_vector(phi: &Vector3) -> Quaternion {
        Quaternion::from_scalar_vector(0.0, &(phi * 0.5)).exp()
    }

    /// Rotation vector of a unit quaternion, `2·vector(log(q))`.
    ///
    /// The magnitude lies in `[0, 2π]`; rotation vectors longer than `2π`
    /// come back wrapped.
    pub fn rotation_vector(&self) -> Vector3 {
        self.log().vector() * 2.0
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    pub fn rotation_angle(&self) -> f64 {
        2.0 * self.vector().norm().atan2(self.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tolerance;

    #[test]
    fn test_exp_pure_is_unit() {
        let tol = Tolerance::default();
        for v in [
            Vector3::new(0.1, 0.3, 0.7),
            Vector3::new(-2.0, 0.5, 1.0),
            Vector3::new(1e-9, 0.0, -1e-9),
            Vector3::zeros(),
        ] {
            let q = Quaternion::from_scalar_vector(0.0, &v).exp();
            assert!(q.is_unit(&tol), "exp of {v:?} has norm {}", q.norm());
        }
    }

    #[test]
    fn test_exp_zero_is_identity() {
        let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).exp();
        assert_eq!(q, Quaternion::identity());
    }

    #[test]
    fn test_exp_log_inverse() {
        let tol = Tolerance::uniform(1e-12);
        let a = Quaternion::new(0.3, -0.4, 1.1, 0.2);
        assert!(a.log().exp().approx_eq(&a, &tol));
        let p = Quaternion::new(0.0, 0.2, -0.1, 0.4);
        assert!(p.exp().log().approx_eq(&p, &tol));
    }

    #[test]
    fn test_rotation_vector_small_angle() {
        let phi = Vector3::new(3e-10, -1e-10, 2e-10);
        let q = Quaternion::from_rotation_vector(&phi);
        let back = q.rotation_vector();
        assert!((back - phi).norm() < 1e-20, "got {back:?}");
    }

    #[test]
    fn test_rotation_vector_half_turn() {
        let phi = Vector3::new(0.0, std::f64::consts::PI, 0.0);
        let q = Quaternion::from_rotation_vector(&phi);
        assert!(q.s.abs() < 1e-15);
        let back = q.rotation_vector();
        assert!((back - phi).norm() < 1e-12, "got {back:?}");
    }

    #[test]
    fn test_rotation_vector_of_full_turn_is_zero() {
        let q = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(q.rotation_vector(), Vector3::zeros());
    }

    #[test]
    fn test_rotation_angle() {
        let phi = Vector3::new(0.3, -0.4, 1.2);
        let q = Quaternion::from_rotation_vector(&phi);
        assert!((q.rotation_angle() - phi.norm()).abs() < 1e-14);
    }
}
