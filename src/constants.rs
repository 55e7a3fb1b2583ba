//! Fixed, frequently used attitudes.

use crate::Quaternion;

/// No rotation.
pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

/// Half turn about the x axis; matrix `diag(1, −1, −1)`.
pub const HALF_TURN_X: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);

/// Half turn about the y axis; matrix `diag(−1, 1, −1)`.
pub const HALF_TURN_Y: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);

/// Half turn about the z axis; matrix `diag(−1, −1, 1)`.
pub const HALF_TURN_Z: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

/// Relabels a camera frame whose optical axis is +z into one whose optical
/// axis is +x:
///
/// ```text
/// ⎡  0   0   1 ⎤
/// ⎢ −1   0   0 ⎥
/// ⎣  0  −1   0 ⎦
/// ```
pub const OPTICAL_AXIS_FIRST: Quaternion = Quaternion::new(0.5, 0.5, -0.5, 0.5);

impl Quaternion {
    /// See [`OPTICAL_AXIS_FIRST`].
    pub const fn optical_axis_first() -> Quaternion {
        OPTICAL_AXIS_FIRST
    }
}
