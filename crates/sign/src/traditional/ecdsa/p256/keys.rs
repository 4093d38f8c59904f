//! P-256 key material
//!
//! Keys are only ever created by importing bytes. Every import validates:
//! private scalars must lie in `[1, n-1]` and public points must be finite,
//! on the curve and in the prime-order subgroup.

use core::fmt;

use ecsig_algorithms::ec::p256::{Point, Scalar};
use ecsig_algorithms::ec::{CurveBackend, SoftwareBackend};
use ecsig_api::error::{validate, ResultExt};
use ecsig_api::Result as ApiResult;
use ecsig_params::traditional::ecdsa::{
    ECDSA_P256_PRIVATE_KEY_SIZE, ECDSA_P256_PUBLIC_KEY_SIZE, ECDSA_P256_RAW_PUBLIC_KEY_SIZE,
};
use zeroize::{Zeroize, Zeroizing};

/// P-256 secret key
///
/// Owns the scalar `d` exclusively. Not `Clone`: there is exactly one copy of
/// the secret, and [`dispose`](Self::dispose) (also run on drop) wipes it.
/// Every operation on a disposed key fails with `KeyDisposed`.
pub struct EcdsaP256SecretKey {
    d: Scalar,
    disposed: bool,
}

impl EcdsaP256SecretKey {
    /// Import a 32-byte big-endian private scalar
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` unless `bytes` is 32 bytes long;
    /// `InvalidScalarRange` if the value is zero or not below `n`.
    pub fn import(bytes: &[u8]) -> ApiResult<Self> {
        const CONTEXT: &str = "EcdsaP256SecretKey::import";
        validate::key_length(CONTEXT, bytes.len(), ECDSA_P256_PRIVATE_KEY_SIZE)?;

        let mut raw = Zeroizing::new([0u8; ECDSA_P256_PRIVATE_KEY_SIZE]);
        raw.copy_from_slice(bytes);
        let d = Scalar::from_canonical_bytes(&raw).with_context(CONTEXT)?;

        Ok(Self { d, disposed: false })
    }

    /// Derive `Q = d·G`
    pub fn public_key(&self) -> ApiResult<EcdsaP256PublicKey> {
        self.public_key_with(&SoftwareBackend)
    }

    /// Derive `Q = d·G` on the given curve backend
    pub fn public_key_with<B: CurveBackend>(&self, backend: &B) -> ApiResult<EcdsaP256PublicKey> {
        let d = self.scalar("EcdsaP256SecretKey::public_key")?;
        Ok(EcdsaP256PublicKey {
            point: backend.mul_base(d),
        })
    }

    /// Export the 32-byte big-endian scalar
    ///
    /// The returned copy is wiped when dropped.
    pub fn export(&self) -> ApiResult<Zeroizing<[u8; ECDSA_P256_PRIVATE_KEY_SIZE]>> {
        let d = self.scalar("EcdsaP256SecretKey::export")?;
        Ok(Zeroizing::new(d.serialize()))
    }

    /// Overwrite the scalar with zeros
    ///
    /// Idempotent. Afterwards the key is unusable.
    pub fn dispose(&mut self) {
        self.d.zeroize();
        self.disposed = true;
    }

    /// Has [`dispose`](Self::dispose) been called?
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Borrow the live scalar, or fail with `KeyDisposed`
    pub(crate) fn scalar(&self, context: &'static str) -> ApiResult<&Scalar> {
        validate::live_key(self.disposed, context)?;
        Ok(&self.d)
    }
}

impl Zeroize for EcdsaP256SecretKey {
    fn zeroize(&mut self) {
        self.dispose();
    }
}

impl Drop for EcdsaP256SecretKey {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for EcdsaP256SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaP256SecretKey")
            .field("d", &"[REDACTED]")
            .field("disposed", &self.disposed)
            .finish()
    }
}

/// P-256 public key
///
/// Always a validated point: finite, on the curve, in the prime-order
/// subgroup. Serialized as `0x04 ∥ X ∥ Y` (65 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaP256PublicKey {
    point: Point,
}

impl EcdsaP256PublicKey {
    /// Import the 65-byte uncompressed encoding
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` for any other length; `PointNotOnCurve` for a wrong
    /// tag, unreduced or off-curve coordinates; `InvalidSubgroup` for a point
    /// outside the order-n subgroup.
    pub fn import(bytes: &[u8]) -> ApiResult<Self> {
        Self::import_with(bytes, &SoftwareBackend)
    }

    /// Import the 65-byte uncompressed encoding, validating on `backend`
    pub fn import_with<B: CurveBackend>(bytes: &[u8], backend: &B) -> ApiResult<Self> {
        const CONTEXT: &str = "EcdsaP256PublicKey::import";
        validate::key_length(CONTEXT, bytes.len(), ECDSA_P256_PUBLIC_KEY_SIZE)?;

        let point = Point::deserialize_uncompressed(bytes).with_context(CONTEXT)?;
        Self::from_point(point, backend, CONTEXT)
    }

    /// Import the raw 64-byte `X ∥ Y` form (no tag byte)
    pub fn from_raw_xy(bytes: &[u8]) -> ApiResult<Self> {
        const CONTEXT: &str = "EcdsaP256PublicKey::from_raw_xy";
        validate::key_length(CONTEXT, bytes.len(), ECDSA_P256_RAW_PUBLIC_KEY_SIZE)?;

        let mut raw = [0u8; ECDSA_P256_RAW_PUBLIC_KEY_SIZE];
        raw.copy_from_slice(bytes);
        let point = Point::from_raw_xy(&raw).with_context(CONTEXT)?;
        Self::from_point(point, &SoftwareBackend, CONTEXT)
    }

    /// Export the 65-byte uncompressed encoding
    pub fn export(&self) -> [u8; ECDSA_P256_PUBLIC_KEY_SIZE] {
        self.point.serialize_uncompressed()
    }

    /// Export the raw 64-byte `X ∥ Y` form
    pub fn to_raw_xy(&self) -> [u8; ECDSA_P256_RAW_PUBLIC_KEY_SIZE] {
        self.point.to_raw_xy()
    }

    pub(crate) fn point(&self) -> &Point {
        &self.point
    }

    fn from_point<B: CurveBackend>(
        point: Point,
        backend: &B,
        context: &'static str,
    ) -> ApiResult<Self> {
        backend.validate_point(&point).with_context(context)?;
        Ok(Self { point })
    }
}
