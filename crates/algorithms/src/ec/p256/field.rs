//! P-256 field arithmetic implementation

use crate::ec::p256::constants::P256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use ecsig_params::traditional::ecdsa::NIST_P256;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Number of 32-bit limbs for a P-256 field element (8 × 32 = 256 bits)
const NLIMBS: usize = 8;

/// Split a big-endian 32-byte integer into little-endian limbs at compile time.
///
/// The caller guarantees the value is below p.
pub(crate) const fn limbs_from_be(bytes: &[u8; 32]) -> [u32; NLIMBS] {
    let mut limbs = [0u32; NLIMBS];
    let mut i = 0;
    while i < NLIMBS {
        let o = (NLIMBS - 1 - i) * 4;
        limbs[i] = ((bytes[o] as u32) << 24)
            | ((bytes[o + 1] as u32) << 16)
            | ((bytes[o + 2] as u32) << 8)
            | (bytes[o + 3] as u32);
        i += 1;
    }
    limbs
}

/// P-256 field element representing values in 𝔽ₚ, where
/// p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1.
/// Internally stored as 8 little-endian 32-bit limbs, always fully reduced.
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct FieldElement(pub(crate) [u32; NLIMBS]);

impl FieldElement {
    /* ---------------------------------------------------------------- */
    /*  NIST P-256 Field Constants (little-endian 32-bit limbs)         */
    /* ---------------------------------------------------------------- */

    /// p = 0xFFFFFFFF 00000001 00000000 00000000 00000000 FFFFFFFF FFFFFFFF FFFFFFFF
    pub(crate) const MOD_LIMBS: [u32; NLIMBS] = [
        0xFFFF_FFFF, // least significant
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xFFFF_FFFF, // most significant
    ];

    /// Curve coefficient b
    pub(crate) const B: FieldElement = FieldElement(limbs_from_be(&NIST_P256.b));

    /// p − 2, the Fermat inversion exponent (big-endian)
    const P_MINUS_2: [u8; 32] = [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFD,
    ];

    /* ================================================================= */
    /*  Tiny helpers                                                     */
    /* ================================================================= */

    /// Build a field element from a small literal (`0 ≤ n < 2³²`)
    #[inline]
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [0u32; NLIMBS];
        limbs[0] = n;
        FieldElement(limbs)
    }

    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u32; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        Self::from_u32(1)
    }

    /// Create a field element from big-endian bytes.
    ///
    /// Values `≥ p` are rejected rather than reduced, so every encoding of a
    /// coordinate is canonical.
    pub fn from_bytes(bytes: &[u8; P256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let limbs = ecsig_internal::endian::limbs_from_be_bytes(bytes);
        let (_, borrow) = Self::sbb8(limbs, Self::MOD_LIMBS);
        if borrow == 0 {
            return Err(Error::param("FieldElement P-256", "Value ≥ modulus"));
        }
        Ok(FieldElement(limbs))
    }

    /// Convert this field element into big-endian bytes.
    pub fn to_bytes(&self) -> [u8; P256_FIELD_ELEMENT_SIZE] {
        ecsig_internal::endian::limbs_to_be_bytes(&self.0)
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        let acc = self.0.iter().fold(0u32, |acc, &w| acc | w);
        acc.ct_eq(&0)
    }

    /// Constant-time addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let (sum, carry) = Self::adc8(self.0, other.0);

        // If carry = 1 or sum >= p, subtract p
        let (reduced, borrow) = Self::sbb8(sum, Self::MOD_LIMBS);
        let need_reduce = (carry | (borrow ^ 1)) & 1;

        Self::select_limbs(&sum, &reduced, Choice::from(need_reduce as u8))
    }

    /// Constant-time subtraction: (self - other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        let (diff, borrow) = Self::sbb8(self.0, other.0);
        // If borrow == 1, we add p back
        let (diff_plus_p, _) = Self::adc8(diff, Self::MOD_LIMBS);
        Self::select_limbs(&diff, &diff_plus_p, Choice::from(borrow as u8))
    }

    /// 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// 3·self mod p
    #[inline(always)]
    pub fn triple(&self) -> Self {
        self.double().add(self)
    }

    /// Additive inverse: (p − self) mod p, total and branch-free
    pub fn negate(&self) -> Self {
        FieldElement::zero().sub(self)
    }

    /// Field multiplication: (self * other) mod p
    /// Implements schoolbook 8×8 → 16-limb product, then reduction
    pub fn mul(&self, other: &Self) -> Self {
        // Phase 1: 8×8 → 16 128-bit partial accumulators
        let mut t = [0u128; NLIMBS * 2];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                t[i + j] += (self.0[i] as u128) * (other.0[j] as u128);
            }
        }

        // Phase 2: Carry-propagate into 16 × u32 limbs
        let mut wide = [0u32; NLIMBS * 2];
        let mut carry: u128 = 0;
        for i in 0..(NLIMBS * 2) {
            let v = t[i] + carry;
            wide[i] = (v & 0xFFFF_FFFF) as u32;
            carry = v >> 32;
        }

        // Phase 3: Reduce 16 limbs → 8 limbs mod p
        Self::reduce_wide(wide)
    }

    /// Field squaring: (self²) mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Compute multiplicative inverse via Fermat: a^(p-2) mod p
    ///
    /// Inverting zero is a precondition violation and is reported, not masked.
    pub fn invert(&self) -> Result<Self> {
        if bool::from(self.is_zero()) {
            return Err(Error::InvalidOperand {
                operation: "FieldElement::invert",
                details: "zero has no inverse",
            });
        }
        Ok(self.invert_total())
    }

    /// Fermat inversion that maps 0 to 0.
    ///
    /// Used where the zero case is already masked (affine conversion of the
    /// identity), so the running time never depends on the operand.
    pub(crate) fn invert_total(&self) -> Self {
        let mut result = FieldElement::one();
        for &byte in Self::P_MINUS_2.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                // the exponent is public
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /* ================================================================= */
    /*  Private helper methods (constant-time arithmetic)                */
    /* ================================================================= */

    /// 8-limb addition with carry
    #[inline(always)]
    fn adc8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64) + (b_limb as u64) + carry;
            *r_limb = (tmp & 0xFFFF_FFFF) as u32;
            carry = tmp >> 32;
        }
        (r, carry as u32)
    }

    /// 8-limb subtraction with borrow
    #[inline(always)]
    fn sbb8(a: [u32; NLIMBS], b: [u32; NLIMBS]) -> ([u32; NLIMBS], u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u64;
        for ((&a_limb, &b_limb), r_limb) in a.iter().zip(b.iter()).zip(r.iter_mut()) {
            let tmp = (a_limb as u64)
                .wrapping_sub(b_limb as u64)
                .wrapping_sub(borrow);
            *r_limb = tmp as u32;
            borrow = (tmp >> 63) & 1;
        }
        (r, borrow as u32)
    }

    /// Constant-time select: if flag == 0 return a else return b
    fn select_limbs(a: &[u32; NLIMBS], b: &[u32; NLIMBS], flag: Choice) -> Self {
        let mut out = [0u32; NLIMBS];
        for ((a_limb, b_limb), out_limb) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
            *out_limb = u32::conditional_select(a_limb, b_limb, flag);
        }
        FieldElement(out)
    }

    /// Reduce a 16-word (512-bit) value modulo
    /// `p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1`.
    ///
    /// Algorithm: FIPS 186-4 D.2.3 (s1 + 2s2 + 2s3 + s4 + s5 − s6 − s7 − s8 − s9)
    /// evaluated per limb in signed 64-bit accumulators, followed by a fixed
    /// number of carry sweeps and one masked subtraction of p.
    pub(crate) fn reduce_wide(c: [u32; 16]) -> FieldElement {
        let w = |i: usize| c[i] as i64;

        //------------------------------------------------------------------
        // step 1  –  per-limb signed sums of the nine FIPS terms
        //------------------------------------------------------------------
        let mut acc = [
            w(0) + w(8) + w(9) - w(11) - w(12) - w(13) - w(14),
            w(1) + w(9) + w(10) - w(12) - w(13) - w(14) - w(15),
            w(2) + w(10) + w(11) - w(13) - w(14) - w(15),
            w(3) + 2 * w(11) + 2 * w(12) + w(13) - w(15) - w(8) - w(9),
            w(4) + 2 * w(12) + 2 * w(13) + w(14) - w(9) - w(10),
            w(5) + 2 * w(13) + 2 * w(14) + w(15) - w(10) - w(11),
            w(6) + 3 * w(14) + 2 * w(15) + w(13) - w(8) - w(9),
            w(7) + 3 * w(15) + w(8) - w(10) - w(11) - w(12) - w(13),
        ];

        //------------------------------------------------------------------
        // step 2  –  two signed carry sweeps, each folding the carry out of
        //            limb 7 with 2²⁵⁶ ≡ 2²²⁴ − 2¹⁹² − 2⁹⁶ + 1 (mod p)
        //------------------------------------------------------------------
        for _ in 0..2 {
            let carry = Self::carry_sweep(&mut acc);
            acc[0] += carry;
            acc[3] -= carry;
            acc[6] -= carry;
            acc[7] += carry;
        }

        // The value now fits in 256 bits; this sweep leaves no carry.
        let carry = Self::carry_sweep(&mut acc);
        debug_assert_eq!(carry, 0);

        let mut out = [0u32; NLIMBS];
        for (o, a) in out.iter_mut().zip(acc.iter()) {
            *o = *a as u32;
        }

        //------------------------------------------------------------------
        // step 3  –  out < 2²⁵⁶ < 2p, so one conditional subtraction suffices
        //------------------------------------------------------------------
        let (sub, borrow) = Self::sbb8(out, Self::MOD_LIMBS);
        Self::select_limbs(&out, &sub, Choice::from((borrow ^ 1) as u8))
    }

    /// Normalize every limb to `[0, 2³²)` and return the signed carry out of limb 7
    #[inline(always)]
    fn carry_sweep(acc: &mut [i64; NLIMBS]) -> i64 {
        let mut carry = 0i64;
        for limb in acc.iter_mut() {
            let tmp = *limb + carry;
            *limb = tmp & 0xFFFF_FFFF;
            carry = tmp >> 32;
        }
        carry
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u32;
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            acc |= a ^ b;
        }
        acc.ct_eq(&0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::select_limbs(&a.0, &b.0, choice)
    }
}
