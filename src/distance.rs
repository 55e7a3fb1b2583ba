//! Angular distance between attitudes.

use crate::Quaternion;

impl Quaternion {
    /// Angle in radians of the rotation taking `self` to `other`, in `[0, π]`.
    ///
    /// Computed from the relative quaternion `self⁻¹·other` as
    /// `2·atan2(|v|, |s|)`. Taking `|s|` picks the shorter of the two
    /// rotations, so either sign representative of each input gives the same
    /// answer.
    pub fn distance(&self, other: &Quaternion) -> f64 {
        let rel = self.conjugate() * *other;
        2.0 * rel.vector().norm().atan2(rel.s.abs())
    }
}
