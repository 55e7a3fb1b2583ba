//! # quaternions
//!
//! Unit-quaternion attitude algebra for pointing and attitude-determination
//! pipelines.
//!
//! A [`Quaternion`] is stored scalar-first, `(s, x, y, z)`. Unit quaternions
//! represent attitudes, and `q` and `-q` represent the same one. Every
//! operation is a pure function of its inputs.
//!
//! ## Features
//!
//! - **Algebra**: composition, conjugate, inverse, norm, tolerance-based
//!   comparison (optionally up to sign)
//! - **Rotation vectors**: `exp` / `log` maps with small-angle Taylor branches
//! - **Direction cosine matrices**: closed-form `matrix()` and Shepperd's
//!   robust `from_matrix()`
//! - **Pointing angles**: right ascension, declination and roll in degrees,
//!   with a defined answer at gimbal lock
//! - **Distance**: shortest-path angle between two attitudes
//! - **Averaging**: eigenvector mean of weighted samples, immune to sign flips
//! - **q-method**: Davenport's optimal solution of Wahba's problem
//!
//! ## Conventions
//!
//! `q.matrix()` is a direction cosine matrix: it maps reference-frame
//! coordinates into the frame described by `q`. Composition agrees with
//! matrix products, `(a * b).matrix() == a.matrix() * b.matrix()`.
//!
//! ## Example
//!
//! ```
//! use quaternions::{Quaternion, Vector3, Tolerance};
//!
//! // A pointing attitude and its angles
//! let q = Quaternion::from_ra_dec_roll(83.0, -1.0, 15.0);
//! let (ra, dec, roll) = q.ra_dec_roll();
//! assert!((ra - 83.0).abs() < 1e-9 && (dec + 1.0).abs() < 1e-9 && (roll - 15.0).abs() < 1e-9);
//!
//! // Recover it from two star observations
//! let catalog = [Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.6, 0.8)];
//! let observed: Vec<Vector3> = catalog.iter().map(|v| q.matrix() * v).collect();
//! let solved = Quaternion::from_qmethod(&catalog, &observed, &[1.0, 1.0]).unwrap();
//! assert!(solved.same_rotation(&q, &Tolerance::default()));
//! ```

mod constants;
mod distance;
pub mod error;
pub mod estimation;
mod expmap;
mod matrix;
pub mod pointing;
mod quaternion;
pub mod tolerance;

pub use constants::*;
pub use error::{AttitudeError, Result};
pub use pointing::ra_dec_roll_matrix;
pub use quaternion::Quaternion;
pub use tolerance::Tolerance;

// All attitude math runs in f64: the pointing-angle round trips need
// better than 1e-8 degree agreement.
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Vector4 = nalgebra::Vector4<f64>;
pub type Matrix3 = nalgebra::Matrix3<f64>;
pub type Matrix4 = nalgebra::Matrix4<f64>;
