//! Elliptic Curve Primitives
//!
//! Constant-time arithmetic on NIST P-256 and the [`CurveBackend`] seam the
//! signature engine calls through.

pub mod backend;
pub mod p256;

pub use backend::{CurveBackend, SoftwareBackend};
pub use p256::{Point as P256Point, Scalar as P256Scalar};
