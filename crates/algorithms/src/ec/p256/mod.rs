//! NIST P-256 Elliptic Curve Primitives
//!
//! This module implements the NIST P-256 elliptic curve operations in constant time.
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1 (NIST P-256 prime)
//! - The curve order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! The implementation uses:
//! - NIST fast reduction for field arithmetic
//! - Montgomery multiplication for arithmetic modulo n
//! - Homogeneous projective coordinates with complete addition formulas
//! - Fixed 4-bit window scalar multiplication with constant-time table lookup

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_RAW_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
};
pub use field::FieldElement;
pub use point::Point;
pub use scalar::Scalar;

use crate::error::{Error, Result};
use zeroize::Zeroize;

/// Get the standard base point G of the P-256 curve
pub fn base_point_g() -> Point {
    Point::generator()
}

/// Scalar multiplication with the base point: scalar * G
///
/// This is the core operation for deriving public keys and the `R = k·G`
/// step of signing.
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul(scalar)
}

/// Double scalar multiplication `u1·G + u2·Q` used by verification
///
/// Both products stay in projective form and only the sum is converted back
/// to affine, so there is a single field inversion.
pub fn scalar_mult_add_base(u1: &Scalar, u2: &Scalar, q: &Point) -> Point {
    let mut k1 = u1.serialize();
    let mut k2 = u2.serialize();

    let a = base_point_g().to_projective().mul_window(&k1);
    let b = q.to_projective().mul_window(&k2);

    k1.zeroize();
    k2.zeroize();
    a.add(&b).to_affine()
}

/// Full public-point validation
///
/// Rejects the identity and off-curve coordinates with `PointNotOnCurve`
/// and points outside the order-n subgroup with `InvalidSubgroup`.
pub fn validate_point(point: &Point) -> Result<()> {
    if point.is_identity() {
        return Err(Error::PointNotOnCurve {
            context: "P-256 public point is the identity",
        });
    }
    // coordinates reduced and on the curve
    Point::new_uncompressed(&point.x_coordinate_bytes(), &point.y_coordinate_bytes())?;
    if !point.is_in_prime_subgroup() {
        return Err(Error::InvalidSubgroup {
            context: "P-256 public point",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
