//! Attitude estimation from multiple measurements.
//!
//! - [`Quaternion::average`](crate::Quaternion::average) /
//!   [`Quaternion::average_weighted`](crate::Quaternion::average_weighted):
//!   mean of several attitude estimates, insensitive to their signs.
//! - [`Quaternion::from_qmethod`](crate::Quaternion::from_qmethod): optimal
//!   attitude from paired vector observations (Wahba's problem).
//!
//! Both reduce to the dominant eigenvector of a symmetric 4×4 matrix.

pub mod average;
pub(crate) mod eigen;
pub mod qmethod;
