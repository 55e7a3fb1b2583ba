//! Right ascension / declination / roll pointing angles.
//!
//! The angles compose as Tait-Bryan X-Y-Z rotations: with
//! `(c3, s3) = cos/sin(ra)`, `(c2, s2) = cos/sin(dec)`, `(c1, s1) = cos/sin(roll)`,
//!
//! ```text
//!     ⎡ c2·c3               −c2·s3                s2    ⎤
//! M = ⎢ c1·s3 + c3·s1·s2     c1·c3 − s1·s2·s3    −c2·s1 ⎥
//!     ⎣ s1·s3 − c1·c3·s2     c3·s1 + c1·s2·s3     c1·c2 ⎦
//! ```
//!
//! All angles are in degrees. Extraction returns `ra ∈ (−180, 180]`,
//! `dec ∈ [−90, 90]` and `roll ∈ [0, 360)`.

use tracing::debug;

use crate::tolerance::{ANGLE_WRAP_EPSILON, GIMBAL_LOCK_THRESHOLD};
use crate::{Matrix3, Quaternion};

impl Quaternion {
    /// Attitude for the given right ascension, declination and roll (degrees).
    pub fn from_ra_dec_roll(ra: f64, dec: f64, roll: f64) -> Quaternion {
        Quaternion::from_matrix(&ra_dec_roll_matrix(ra, dec, roll))
    }

    /// `(ra, dec, roll)` in degrees.
    ///
    /// Exactly inverts [`Quaternion::from_ra_dec_roll`] for `|dec| < 90°`.
    /// At the poles only `ra ± roll` is determined; roll is then reported as
    /// zero and the whole angle is assigned to `ra`.
    pub fn ra_dec_roll(&self) -> (f64, f64, f64) {
        let m = self.matrix();
        let cos_dec = m[(1, 2)].hypot(m[(2, 2)]);
        let dec = m[(0, 2)].atan2(cos_dec);

        let (ra, roll) = if cos_dec < GIMBAL_LOCK_THRESHOLD {
            debug!(
                "Gimbal lock at dec = {:.6}°, folding roll into ra",
                dec.to_degrees()
            );
            // With roll = 0 the second row reduces to (sin ra, cos ra, 0).
            (m[(1, 0)].atan2(m[(1, 1)]), 0.0)
        } else {
            ((-m[(0, 1)]).atan2(m[(0, 0)]), (-m[(1, 2)]).atan2(m[(2, 2)]))
        };

        (
            wrap_half_open_180(ra.to_degrees()),
            dec.to_degrees(),
            wrap_360(roll.to_degrees()),
        )
    }
}

/// Direction cosine matrix for `(ra, dec, roll)` in degrees.
pub fn ra_dec_roll_matrix(ra: f64, dec: f64, roll: f64) -> Matrix3 {
    let (s3, c3) = ra.to_radians().sin_cos();
    let (s2, c2) = dec.to_radians().sin_cos();
    let (s1, c1) = roll.to_radians().sin_cos();

    Matrix3::new(
        c2 * c3,
        -c2 * s3,
        s2,
        c1 * s3 + c3 * s1 * s2,
        c1 * c3 - s1 * s2 * s3,
        -c2 * s1,
        s1 * s3 - c1 * c3 * s2,
        c3 * s1 + c1 * s2 * s3,
        c1 * c2,
    )
}

/// Map an angle in degrees into `(−180, 180]`.
///
/// Values within [`ANGLE_WRAP_EPSILON`] above −180 are reported as 180.
fn wrap_half_open_180(deg: f64) -> f64 {
    let w = 180.0 - (180.0 - deg).rem_euclid(360.0);
    if w + 180.0 < ANGLE_WRAP_EPSILON {
        180.0
    } else {
        w
    }
}

/// Map an angle in degrees into `[0, 360)`.
///
/// Values within [`ANGLE_WRAP_EPSILON`] below 360 are reported as 0.
fn wrap_360(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    // a tiny negative input lands at or just under 360
    if 360.0 - w < ANGLE_WRAP_EPSILON {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angles_give_identity() {
        let q = Quaternion::from_ra_dec_roll(0.0, 0.0, 0.0);
        assert_eq!(q, Quaternion::identity());
        assert_eq!(q.matrix(), Matrix3::identity());
    }

    #[test]
    fn test_wrap_ranges() {
        assert_eq!(wrap_half_open_180(180.0), 180.0);
        assert_eq!(wrap_half_open_180(-180.0), 180.0);
        assert_eq!(wrap_half_open_180(190.0), -170.0);
        assert_eq!(wrap_half_open_180(-30.0), -30.0);
        assert_eq!(wrap_360(-10.0), 350.0);
        assert_eq!(wrap_360(360.0), 0.0);
        assert_eq!(wrap_360(-1e-17), 0.0);
        assert_eq!(wrap_360(-1e-14), 0.0);
        assert_eq!(wrap_360(359.99999999999994), 0.0);
        assert_eq!(wrap_360(359.9), 359.9);
        assert_eq!(wrap_half_open_180(-180.0 + 1e-14), 180.0);
        assert_eq!(wrap_half_open_180(180.0 + 1e-14), 180.0);
    }

    #[test]
    fn test_zero_roll_roundtrip_is_not_wrapped() {
        // Roll 0 and ra 180 sit on the edges of their ranges (j = 71 is ra 180),
        // so compare directly rather than modulo 360.
        for i in 0..=35 {
            let dec = -87.5 + 5.0 * i as f64;
            for j in 0..=71 {
                let ra = -175.0 + 5.0 * j as f64;
                let q = Quaternion::from_ra_dec_roll(ra, dec, 0.0);
                let (ra_out, dec_out, roll_out) = q.ra_dec_roll();

                assert!(
                    (0.0..1e-8).contains(&roll_out),
                    "({ra}, {dec}, 0): roll = {roll_out}"
                );
                assert!((ra_out - ra).abs() < 1e-8, "({ra}, {dec}, 0): ra = {ra_out}");
                assert!(
                    (dec_out - dec).abs() < 1e-8,
                    "({ra}, {dec}, 0): dec = {dec_out}"
                );
            }

            // −180 is the same meridian and reports as +180
            let q = Quaternion::from_ra_dec_roll(-180.0, dec, 0.0);
            let (ra_out, _, roll_out) = q.ra_dec_roll();
            assert!((ra_out - 180.0).abs() < 1e-8, "dec {dec}: ra = {ra_out}");
            assert!((0.0..1e-8).contains(&roll_out), "dec {dec}: roll = {roll_out}");
        }
    }

    #[test]
    fn test_simple_roundtrip() {
        let q = Quaternion::from_ra_dec_roll(30.0, 40.0, 50.0);
        let (ra, dec, roll) = q.ra_dec_roll();
        assert!((ra - 30.0).abs() < 1e-10, "ra = {ra}");
        assert!((dec - 40.0).abs() < 1e-10, "dec = {dec}");
        assert!((roll - 50.0).abs() < 1e-10, "roll = {roll}");
    }

    #[test]
    fn test_negative_roll_is_wrapped() {
        let q = Quaternion::from_ra_dec_roll(-120.0, -20.0, -45.0);
        let (ra, dec, roll) = q.ra_dec_roll();
        assert!((ra + 120.0).abs() < 1e-10, "ra = {ra}");
        assert!((dec + 20.0).abs() < 1e-10, "dec = {dec}");
        assert!((roll - 315.0).abs() < 1e-10, "roll = {roll}");
    }

    #[test]
    fn test_gimbal_lock_is_consistent() {
        for &dec in &[90.0, -90.0] {
            let q = Quaternion::from_ra_dec_roll(40.0, dec, 25.0);
            let (ra, dec_out, roll) = q.ra_dec_roll();
            assert!(ra.is_finite() && roll.is_finite());
            assert!((dec_out - dec).abs() < 1e-6, "dec = {dec_out}");
            // any decomposition is fine as long as it rebuilds the same attitude
            let rebuilt = ra_dec_roll_matrix(ra, dec_out, roll);
            let diff = (rebuilt - q.matrix()).abs().max();
            assert!(diff < 1e-6, "matrix mismatch {diff} at dec {dec}");
        }
    }
}
