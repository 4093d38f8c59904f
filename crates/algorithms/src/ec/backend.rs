//! Swappable curve arithmetic
//!
//! The signature engine never calls the point routines directly; it goes
//! through a [`CurveBackend`]. [`SoftwareBackend`] is the portable
//! implementation built on [`crate::ec::p256`]. A hardware accelerator can be
//! plugged in by implementing the same four operations.

use crate::ec::p256::{self, Point, Scalar};
use crate::error::Result;

/// Point operations the ECDSA engine needs from the curve layer
///
/// Implementations must be constant-time in every secret scalar they receive
/// (`mul_base` during signing in particular) and must apply the full
/// validation rules in `validate_point`.
pub trait CurveBackend {
    /// Short identifier, for diagnostics
    fn name(&self) -> &'static str;

    /// `k·G`
    fn mul_base(&self, k: &Scalar) -> Point;

    /// `k·P`
    fn mul(&self, k: &Scalar, point: &Point) -> Point;

    /// `u1·G + u2·Q`
    fn mul_add_base(&self, u1: &Scalar, u2: &Scalar, q: &Point) -> Point;

    /// Reject the identity, off-curve points and points outside the
    /// prime-order subgroup
    fn validate_point(&self, point: &Point) -> Result<()>;
}

/// Portable constant-time implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SoftwareBackend;

impl CurveBackend for SoftwareBackend {
    fn name(&self) -> &'static str {
        "software"
    }

    fn mul_base(&self, k: &Scalar) -> Point {
        p256::scalar_mult_base_g(k)
    }

    fn mul(&self, k: &Scalar, point: &Point) -> Point {
        p256::scalar_mult(k, point)
    }

    fn mul_add_base(&self, u1: &Scalar, u2: &Scalar, q: &Point) -> Point {
        p256::scalar_mult_add_base(u1, u2, q)
    }

    fn validate_point(&self, point: &Point) -> Result<()> {
        p256::validate_point(point)
    }
}

impl<B: CurveBackend + ?Sized> CurveBackend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn mul_base(&self, k: &Scalar) -> Point {
        (**self).mul_base(k)
    }

    fn mul(&self, k: &Scalar, point: &Point) -> Point {
        (**self).mul(k, point)
    }

    fn mul_add_base(&self, u1: &Scalar, u2: &Scalar, q: &Point) -> Point {
        (**self).mul_add_base(u1, u2, q)
    }

    fn validate_point(&self, point: &Point) -> Result<()> {
        (**self).validate_point(point)
    }
}
