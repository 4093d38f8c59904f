//! P-256 elliptic curve point operations
//!
//! Affine points are the public representation. Arithmetic runs on
//! homogeneous projective coordinates (X:Y:Z) with the complete addition
//! formulas of Renes, Costello and Batina (2016, Algorithm 4, a = −3), so the
//! same instruction sequence handles P + Q, P + P, P + O and P + (−P).

use crate::ec::p256::{
    constants::{
        P256_FIELD_ELEMENT_SIZE, P256_POINT_RAW_SIZE, P256_POINT_UNCOMPRESSED_SIZE,
        P256_SCALAR_SIZE,
    },
    field::{limbs_from_be, FieldElement},
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use ecsig_params::traditional::ecdsa::NIST_P256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Window width of the fixed-window scalar multiplication
const WINDOW_BITS: usize = 4;

/// Number of precomputed multiples per window (0·P through 15·P)
const TABLE_SIZE: usize = 1 << WINDOW_BITS;

/// Affine coordinates (x, y) or identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective coordinates (X:Y:Z); the identity is (0:1:0)
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let both_identity = self.is_identity & other.is_identity;
        let neither_identity = !self.is_identity & !other.is_identity;
        let same_coords = self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y);
        (both_identity | (neither_identity & same_coords)).into()
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new affine point from uncompressed byte coordinates
    ///
    /// Coordinates must be reduced modulo p and satisfy the curve equation.
    /// Both failures are reported as `PointNotOnCurve`. Subgroup membership is
    /// checked separately by [`is_in_prime_subgroup`](Self::is_in_prime_subgroup).
    pub fn new_uncompressed(
        x_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; P256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let not_reduced = Error::PointNotOnCurve {
            context: "P-256 Point coordinates",
        };
        let x_fe = FieldElement::from_bytes(x_bytes).map_err(|_| not_reduced.clone())?;
        let y_fe = FieldElement::from_bytes(y_bytes).map_err(|_| not_reduced)?;
        validate::on_curve(Self::is_on_curve(&x_fe, &y_fe), "P-256 Point")?;
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// The standard base point G
    pub fn generator() -> Self {
        Point {
            is_identity: Choice::from(0),
            x: FieldElement(limbs_from_be(&NIST_P256.g_x)),
            y: FieldElement(limbs_from_be(&NIST_P256.g_y)),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Extract x-coordinate as big-endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Extract y-coordinate as big-endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    ///
    /// The identity has no uncompressed encoding and serializes as all zeros.
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..].copy_from_slice(&self.to_raw_xy());
        out
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y)
    ///
    /// Any tag other than 0x04 means the bytes do not describe a finite
    /// uncompressed point and is reported as `PointNotOnCurve`.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Point", bytes.len(), P256_POINT_UNCOMPRESSED_SIZE)?;
        if bytes[0] != 0x04 {
            return Err(Error::PointNotOnCurve {
                context: "P-256 Point tag",
            });
        }
        let mut raw = [0u8; P256_POINT_RAW_SIZE];
        raw.copy_from_slice(&bytes[1..]);
        Self::from_raw_xy(&raw)
    }

    /// Parse the raw 64-byte `x ∥ y` form (no tag byte)
    pub fn from_raw_xy(bytes: &[u8; P256_POINT_RAW_SIZE]) -> Result<Self> {
        let mut xb = [0u8; P256_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; P256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[..P256_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[P256_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Serialize as the raw 64-byte `x ∥ y` form (no tag byte)
    pub fn to_raw_xy(&self) -> [u8; P256_POINT_RAW_SIZE] {
        let mut out = [0u8; P256_POINT_RAW_SIZE];
        out[..P256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Point negation: (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: scalar · self
    ///
    /// Constant-time in the scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let mut k = scalar.serialize();
        let out = self.mul_be_bytes(&k);
        k.zeroize();
        out
    }

    /// Scalar multiplication by an arbitrary 256-bit big-endian integer
    ///
    /// Unlike [`mul`](Self::mul) the multiplier need not be reduced modulo n,
    /// which is what the subgroup check `n·Q = O` needs.
    pub fn mul_be_bytes(&self, k: &[u8; P256_SCALAR_SIZE]) -> Self {
        self.to_projective().mul_window(k).to_affine()
    }

    /// Check `n·self = O`
    ///
    /// P-256 has cofactor 1, so every finite curve point passes.
    pub fn is_in_prime_subgroup(&self) -> bool {
        self.mul_be_bytes(&NIST_P256.n).is_identity()
    }

    /// Check y² = x³ − 3x + b
    fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        let y2 = y.square();
        let x3 = x.square().mul(x);
        let rhs = x3.sub(&x.triple()).add(&FieldElement::B);
        y2.ct_eq(&rhs).into()
    }

    /// Lift to projective coordinates; the identity maps to (0:1:0)
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        let finite = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(&finite, &ProjectivePoint::identity(), self.is_identity)
    }
}

impl ProjectivePoint {
    /// The identity (0:1:0)
    pub(crate) fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Complete point addition for a = −3
    pub(crate) fn add(&self, other: &Self) -> Self {
        let b = FieldElement::B;

        let x1x2 = self.x.mul(&other.x);
        let y1y2 = self.y.mul(&other.y);
        let z1z2 = self.z.mul(&other.z);

        // C = X1·Y2 + X2·Y1
        let c = self
            .x
            .add(&self.y)
            .mul(&other.x.add(&other.y))
            .sub(&x1x2)
            .sub(&y1y2);
        // D = Y1·Z2 + Y2·Z1
        let d = self
            .y
            .add(&self.z)
            .mul(&other.y.add(&other.z))
            .sub(&y1y2)
            .sub(&z1z2);
        // E = X1·Z2 + X2·Z1
        let e = self
            .x
            .add(&self.z)
            .mul(&other.x.add(&other.z))
            .sub(&x1x2)
            .sub(&z1z2);

        let f = e.sub(&b.mul(&z1z2)).triple();
        let g = y1y2.sub(&f);
        let h = y1y2.add(&f);

        let i = z1z2.triple();
        let j = b.mul(&e).sub(&x1x2).sub(&i).triple();
        let k = x1x2.triple().sub(&i);

        let l = d.mul(&j);
        let m = k.mul(&j);
        let n = k.mul(&c);

        ProjectivePoint {
            x: h.mul(&c).sub(&l),
            y: h.mul(&g).add(&m),
            z: g.mul(&d).add(&n),
        }
    }

    /// Point doubling through the complete addition formula
    #[inline(always)]
    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    /// Fixed 4-bit window scalar multiplication
    ///
    /// Every window performs four doublings and one addition, and the table
    /// entry is picked by scanning all sixteen entries, so the operation
    /// sequence does not depend on `k`.
    pub(crate) fn mul_window(&self, k: &[u8; P256_SCALAR_SIZE]) -> Self {
        let mut table = [ProjectivePoint::identity(); TABLE_SIZE];
        for i in 1..TABLE_SIZE {
            table[i] = table[i - 1].add(self);
        }

        let mut acc = ProjectivePoint::identity();
        for &byte in k.iter() {
            for nibble in [byte >> 4, byte & 0x0F] {
                for _ in 0..WINDOW_BITS {
                    acc = acc.double();
                }
                acc = acc.add(&Self::select_from_table(&table, nibble));
            }
        }
        acc
    }

    /// Constant-time table lookup
    fn select_from_table(table: &[ProjectivePoint; TABLE_SIZE], index: u8) -> Self {
        let mut out = ProjectivePoint::identity();
        for (i, entry) in table.iter().enumerate() {
            out.conditional_assign(entry, (i as u8).ct_eq(&index));
        }
        out
    }

    /// Convert to affine coordinates
    ///
    /// Z = 0 exactly for the identity; the inversion is total so the zero
    /// case costs the same and its output is masked by the identity flag.
    pub(crate) fn to_affine(&self) -> Point {
        let is_identity = self.z.is_zero();
        let z_inv = self.z.invert_total();
        let x = self.x.mul(&z_inv);
        let y = self.y.mul(&z_inv);

        let zero = FieldElement::zero();
        Point {
            is_identity,
            x: FieldElement::conditional_select(&x, &zero, is_identity),
            y: FieldElement::conditional_select(&y, &zero, is_identity),
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}
