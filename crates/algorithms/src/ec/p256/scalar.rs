//! P-256 scalar arithmetic operations
//!
//! Scalars are integers modulo the group order
//! n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551.
//! Multiplication and inversion run in the Montgomery domain (CIOS, R = 2²⁵⁶);
//! every routine is constant-time in the scalar values.

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use ecsig_common::security::SecretBuffer;
use ecsig_internal::constant_time::{ct_is_zero, ct_lt_be};
use ecsig_internal::endian::{limbs_from_be_bytes, limbs_to_be_bytes};
use ecsig_params::traditional::ecdsa::NIST_P256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// P-256 scalar value for use in elliptic curve operations
///
/// Represents integers modulo the curve order n. Used for private keys,
/// nonces and signature components. Automatically zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<P256_SCALAR_SIZE>);

impl Scalar {
    // Helper constants - stored in little-endian limb order
    const N_LIMBS: [u32; 8] = [
        0xFC63_2551,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ];

    /// −n⁻¹ mod 2³²
    const N0_INV: u32 = 0xEE00_BC4F;

    /// R² mod n, used to enter the Montgomery domain
    const R2_LIMBS: [u32; 8] = [
        0xBE79_EEA2,
        0x8324_4C95,
        0x49BD_6FA6,
        0x4699_799C,
        0x2B6B_EC59,
        0x2845_B239,
        0xF3D9_5620,
        0x66E1_2D94,
    ];

    /// R mod n, the Montgomery form of 1
    const R_LIMBS: [u32; 8] = [
        0x039C_DAAF,
        0x0C46_353D,
        0x58E8_617B,
        0x4319_0552,
        0x0000_0000,
        0x0000_0000,
        0xFFFF_FFFF,
        0x0000_0000,
    ];

    /// n − 2, the Fermat inversion exponent (big-endian)
    const N_MINUS_2: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x4F,
    ];

    /// Create a scalar from canonical big-endian bytes
    ///
    /// Accepts exactly the range [1, n-1]. Zero and values `≥ n` are rejected
    /// with `ScalarRange`; nothing is reduced. Use this for private keys and
    /// signature components.
    pub fn from_canonical_bytes(bytes: &[u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let in_range = ct_lt_be(bytes, &NIST_P256.n) & !ct_is_zero(bytes);
        validate::scalar_range(bool::from(in_range), "P-256 Scalar")?;
        Ok(Scalar(SecretBuffer::new(*bytes)))
    }

    /// Deserialize a scalar from a byte slice with validation
    ///
    /// Same rules as [`from_canonical_bytes`](Self::from_canonical_bytes) plus
    /// a length check.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 Scalar", bytes.len(), P256_SCALAR_SIZE)?;

        let mut scalar_bytes = [0u8; P256_SCALAR_SIZE];
        scalar_bytes.copy_from_slice(bytes);
        let result = Self::from_canonical_bytes(&scalar_bytes);
        scalar_bytes.zeroize();
        result
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it modulo n
    ///
    /// Total: any input is accepted and the result may be zero. Because
    /// 2²⁵⁶ < 2n, one conditional subtraction suffices. This is how a digest
    /// becomes the integer `z`.
    pub fn reduce_bytes(bytes: &[u8; P256_SCALAR_SIZE]) -> Self {
        let limbs = limbs_from_be_bytes(bytes);
        let (sub, borrow) = Self::sbb8(&limbs, &Self::N_LIMBS);
        let mut reduced = Self::select_limbs(&limbs, &sub, Choice::from((borrow ^ 1) as u8));
        let out = Self::from_limbs(&reduced);
        reduced.zeroize();
        out
    }

    /// Zero scalar (additive identity)
    pub fn zero() -> Self {
        Scalar(SecretBuffer::zeroed())
    }

    /// The scalar 1
    pub fn one() -> Self {
        let mut one = [0u8; P256_SCALAR_SIZE];
        one[P256_SCALAR_SIZE - 1] = 1;
        Scalar(SecretBuffer::new(one))
    }

    /// Serialize the scalar to big-endian bytes
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        *self.0.as_array()
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.0.ct_is_zero()
    }

    /// Add two scalars modulo the curve order n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        let mut a = self.limbs();
        let mut b = other.limbs();

        let (sum, carry) = Self::adc8(&a, &b);
        let (reduced, borrow) = Self::sbb8(&sum, &Self::N_LIMBS);
        let need_sub = (carry | (borrow ^ 1)) & 1;
        let out = Self::from_limbs(&Self::select_limbs(&sum, &reduced, Choice::from(need_sub as u8)));

        a.zeroize();
        b.zeroize();
        out
    }

    /// Subtract two scalars modulo the curve order n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        let mut a = self.limbs();
        let mut b = other.limbs();

        let (diff, borrow) = Self::sbb8(&a, &b);
        let (diff_plus_n, _) = Self::adc8(&diff, &Self::N_LIMBS);
        let out = Self::from_limbs(&Self::select_limbs(
            &diff,
            &diff_plus_n,
            Choice::from(borrow as u8),
        ));

        a.zeroize();
        b.zeroize();
        out
    }

    /// Multiply two scalars modulo the curve order n
    ///
    /// `mont(mont(a, b), R²) = a·b·R⁻¹·R²·R⁻¹ = a·b mod n`
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        let mut a = self.limbs();
        let mut b = other.limbs();

        let mut ab = Self::mont_mul(&a, &b);
        let out = Self::from_limbs(&Self::mont_mul(&ab, &Self::R2_LIMBS));

        a.zeroize();
        b.zeroize();
        ab.zeroize();
        out
    }

    /// Compute multiplicative inverse modulo n using Fermat's little theorem
    /// a^(-1) ≡ a^(n-2) (mod n), evaluated in the Montgomery domain.
    ///
    /// Inverting zero is a precondition violation and is reported.
    pub fn inv_mod_n(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::InvalidOperand {
                operation: "Scalar::inv_mod_n",
                details: "zero has no inverse",
            });
        }

        let mut a = self.limbs();
        let mut base = Self::mont_mul(&a, &Self::R2_LIMBS); // a·R
        let mut result = Self::R_LIMBS; // 1·R

        for &byte in Self::N_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = Self::mont_mul(&result, &result);
                // the exponent is public
                if (byte >> bit) & 1 == 1 {
                    result = Self::mont_mul(&result, &base);
                }
            }
        }

        // Leave the Montgomery domain
        let mut one = [0u32; 8];
        one[0] = 1;
        let out = Self::from_limbs(&Self::mont_mul(&result, &one));

        a.zeroize();
        base.zeroize();
        result.zeroize();
        Ok(out)
    }

    /// Compute the additive inverse (negation) modulo n
    ///
    /// Returns n - self when self != 0 and 0 when self is 0.
    pub fn negate(&self) -> Self {
        Self::zero().sub_mod_n(self)
    }

    /* ================================================================= */
    /*  Private helper methods                                           */
    /* ================================================================= */

    fn limbs(&self) -> [u32; 8] {
        limbs_from_be_bytes(self.0.as_array())
    }

    fn from_limbs(limbs: &[u32; 8]) -> Self {
        let mut bytes = limbs_to_be_bytes(limbs);
        let out = Scalar(SecretBuffer::new(bytes));
        bytes.zeroize();
        out
    }

    /// Montgomery multiplication, coarsely integrated operand scanning (CIOS)
    ///
    /// Inputs must be `< n`; the output is `a·b·R⁻¹ mod n`, fully reduced.
    fn mont_mul(a: &[u32; 8], b: &[u32; 8]) -> [u32; 8] {
        let mut t = [0u32; 10];

        for &bi in b.iter() {
            // t += a · b[i]
            let mut c = 0u64;
            for j in 0..8 {
                let uv = t[j] as u64 + (a[j] as u64) * (bi as u64) + c;
                t[j] = uv as u32;
                c = uv >> 32;
            }
            let uv = t[8] as u64 + c;
            t[8] = uv as u32;
            t[9] = (uv >> 32) as u32;

            // t = (t + m·n) / 2³²
            let m = t[0].wrapping_mul(Self::N0_INV);
            let uv = t[0] as u64 + (m as u64) * (Self::N_LIMBS[0] as u64);
            let mut c = uv >> 32;
            for j in 1..8 {
                let uv = t[j] as u64 + (m as u64) * (Self::N_LIMBS[j] as u64) + c;
                t[j - 1] = uv as u32;
                c = uv >> 32;
            }
            let uv = t[8] as u64 + c;
            t[7] = uv as u32;
            t[8] = t[9] + (uv >> 32) as u32;
        }

        // t < 2n: subtract n once if t[8] is set or the low part is ≥ n
        let mut low = [0u32; 8];
        low.copy_from_slice(&t[..8]);
        let (sub, borrow) = Self::sbb8(&low, &Self::N_LIMBS);
        let need_sub = (t[8] | (borrow ^ 1)) & 1;
        let out = Self::select_limbs(&low, &sub, Choice::from(need_sub as u8));

        t.zeroize();
        low.zeroize();
        out
    }

    /// 8-limb addition with carry
    #[inline(always)]
    fn adc8(a: &[u32; 8], b: &[u32; 8]) -> ([u32; 8], u32) {
        let mut r = [0u32; 8];
        let mut carry = 0u64;
        for ((&x, &y), out) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = x as u64 + y as u64 + carry;
            *out = tmp as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8-limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: &[u32; 8], b: &[u32; 8]) -> ([u32; 8], u32) {
        let mut r = [0u32; 8];
        let mut borrow = 0u64;
        for ((&x, &y), out) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (x as u64).wrapping_sub(y as u64).wrapping_sub(borrow);
            *out = tmp as u32;
            borrow = (tmp >> 63) & 1; // 1 if we wrapped
        }
        (r, borrow as u32)
    }

    /// Constant-time select: if flag == 0 return a else return b
    #[inline(always)]
    fn select_limbs(a: &[u32; 8], b: &[u32; 8], flag: Choice) -> [u32; 8] {
        let mut out = [0u32; 8];
        for ((x, y), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *o = u32::conditional_select(x, y, flag);
        }
        out
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}
