//! The quaternion value type and its algebra.
//!
//! Quaternions are stored scalar-first, `(s, x, y, z)`. A unit quaternion
//! represents an attitude; `q` and `-q` represent the same attitude.
//!
//! Composition is defined so that it agrees with matrix multiplication of the
//! direction cosine matrices returned by [`Quaternion::matrix`]:
//!
//! ```text
//! (a * b).matrix() == a.matrix() * b.matrix()
//! ```
//!
//! which, for the DCM convention used here, puts a minus sign on the cross
//! product term of the vector part.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{AttitudeError, Result};
use crate::tolerance::Tolerance;
use crate::Vector3;

/// A quaternion `s + x·i + y·j + z·k`.
#[derive(Debug, Clone, Copy, PartialEq, Archive, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar (real) part.
    pub s: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// ── Constructors ────────────────────────────────────────────────────────────

impl Quaternion {
    pub const fn new(s: f64, x: f64, y: f64, z: f64) -> Self {
        Self { s, x, y, z }
    }

    /// The identity attitude `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn from_scalar_vector(s: f64, v: &Vector3) -> Self {
        Self::new(s, v.x, v.y, v.z)
    }

    /// Build from `[s, x, y, z]`.
    pub fn from_coordinates(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

// ── Accessors ───────────────────────────────────────────────────────────────

impl Quaternion {
    /// Components as `[s, x, y, z]`.
    pub fn coordinates(&self) -> [f64; 4] {
        [self.s, self.x, self.y, self.z]
    }

    pub fn scalar(&self) -> f64 {
        self.s
    }

    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    pub(crate) fn to_vector4(self) -> crate::Vector4 {
        crate::Vector4::new(self.s, self.x, self.y, self.z)
    }

    pub(crate) fn from_vector4(v: &crate::Vector4) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

// ── Core algebra ────────────────────────────────────────────────────────────

impl Quaternion {
    /// Composition `self * rhs`. The vector part is
    /// `a.s·b.v + b.s·a.v − a.v×b.v`.
    pub fn multiply(&self, rhs: &Quaternion) -> Quaternion {
        let av = self.vector();
        let bv = rhs.vector();
        let s = self.s * rhs.s - av.dot(&bv);
        let v = bv * self.s + av * rhs.s - av.cross(&bv);
        Quaternion::from_scalar_vector(s, &v)
    }

    /// Negate the vector part. For unit quaternions this is the inverse attitude.
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(self.s, -self.x, -self.y, -self.z)
    }

    pub fn norm_squared(&self) -> f64 {
        self.s * self.s + self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Four-dimensional dot product of the components.
    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.s * other.s + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Project onto the unit sphere.
    ///
    /// Fails with [`AttitudeError::DegenerateInput`] for a zero (or
    /// non-finite) norm.
    pub fn normalize(&self) -> Result<Quaternion> {
        let n = self.norm();
        if n == 0.0 || !n.is_finite() {
            return Err(AttitudeError::degenerate(format!(
                "cannot normalize quaternion with norm {n}"
            )));
        }
        Ok(*self / n)
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    pub fn inverse(&self) -> Result<Quaternion> {
        let n2 = self.norm_squared();
        if n2 == 0.0 || !n2.is_finite() {
            return Err(AttitudeError::degenerate(
                "zero-norm quaternion has no inverse",
            ));
        }
        Ok(self.conjugate() / n2)
    }

    pub fn is_unit(&self, tol: &Tolerance) -> bool {
        (self.norm() - 1.0).abs() <= tol.unit_norm
    }

    /// The representative of the same attitude with a non-negative scalar part.
    pub fn positive_representative(&self) -> Quaternion {
        if self.s < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Component-wise equality within `tol.comparison`.
    pub fn approx_eq(&self, other: &Quaternion, tol: &Tolerance) -> bool {
        self.coordinates()
            .iter()
            .zip(other.coordinates().iter())
            .all(|(a, b)| (a - b).abs() <= tol.comparison)
    }

    /// Equality of the represented attitude, i.e. up to the sign of the
    /// whole quaternion.
    pub fn same_rotation(&self, other: &Quaternion, tol: &Tolerance) -> bool {
        self.approx_eq(other, tol) || self.approx_eq(&-*other, tol)
    }

    /// Express `v` in the frame this attitude describes; equal to
    /// `self.matrix() * v`.
    pub fn rotate_vector(&self, v: &Vector3) -> Vector3 {
        // q⁻¹ (0, v) q, written out for a unit quaternion
        let qv = self.vector();
        let t = qv.cross(v) * 2.0;
        v - t * self.s + qv.cross(&t)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.multiply(&rhs)
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, k: f64) -> Quaternion {
        Quaternion::new(self.s * k, self.x * k, self.y * k, self.z * k)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.rotate_vector(&v)
    }
}

impl Div<f64> for Quaternion {
    type Output = Quaternion;

    fn div(self, k: f64) -> Quaternion {
        Quaternion::new(self.s / k, self.x / k, self.y / k, self.z / k)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.s + rhs.s,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.s - rhs.s,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        Quaternion::new(-self.s, -self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "Quaternion({:.p$}, {:.p$}, {:.p$}, {:.p$})",
                self.s,
                self.x,
                self.y,
                self.z,
                p = p
            ),
            None => write!(
                f,
                "Quaternion({}, {}, {}, {})",
                self.s, self.x, self.y, self.z
            ),
        }
    }
}

// ── Serialization ───────────────────────────────────────────────────────────

impl Quaternion {
    /// Serialize to bytes using rkyv.
    pub fn to_rkyv_bytes(&self) -> Result<Vec<u8>> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|bytes| bytes.to_vec())
            .map_err(|e| AttitudeError::Serialization(e.to_string()))
    }

    /// Deserialize from bytes produced by [`Quaternion::to_rkyv_bytes`].
    pub fn from_rkyv_bytes(bytes: &[u8]) -> Result<Quaternion> {
        let mut aligned = rkyv::util::AlignedVec::<16>::new();
        aligned.extend_from_slice(bytes);
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(&aligned)
            .map_err(|e| AttitudeError::Serialization(e.to_string()))
    }
}
