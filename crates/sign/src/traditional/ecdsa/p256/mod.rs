//! ECDSA implementation for NIST P-256 curve
//!
//! This implementation follows FIPS 186-4: Digital Signature Standard (DSS),
//! Section 6, with nonces per RFC 6979 or a caller-supplied CSPRNG. The input
//! is always a pre-computed 32-byte digest; the engine never hashes.

mod keys;
mod nonce;

pub use keys::{EcdsaP256PublicKey, EcdsaP256SecretKey};
pub use nonce::{
    HedgedNonce, NonceSource, NonceStream, RandomNonce, RandomNonceStream, Rfc6979,
    Rfc6979Stream, MAX_RANDOM_DRAWS,
};

use crate::traditional::ecdsa::common::SignatureComponents;
use ecsig_algorithms::ec::p256::Scalar;
use ecsig_algorithms::ec::{CurveBackend, SoftwareBackend};
use ecsig_api::error::ResultExt;
use ecsig_api::{
    Digest, DigestSignature, Error as ApiError, Result as ApiResult, SignatureSerialize,
};
use ecsig_internal::constant_time::ct_eq;
use ecsig_params::traditional::ecdsa::{
    ECDSA_P256_PRIVATE_KEY_SIZE, ECDSA_P256_PUBLIC_KEY_SIZE, ECDSA_P256_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// P-256 signature: fixed-width `r ∥ s`, 64 bytes
pub type EcdsaP256Signature = SignatureComponents;

/// ECDSA signature engine over NIST P-256 (secp256r1)
///
/// The engine owns its nonce strategy `N` and its curve backend `B`. It is
/// always built with an explicit strategy; there is no implicit fallback to
/// any particular randomness source.
#[derive(Debug)]
pub struct EcdsaP256<N = Rfc6979, B = SoftwareBackend> {
    nonce: N,
    backend: B,
}

impl EcdsaP256<Rfc6979> {
    /// Engine with RFC 6979 deterministic nonces
    pub fn deterministic() -> Self {
        Self::new(Rfc6979)
    }
}

impl<R: RngCore + CryptoRng> EcdsaP256<RandomNonce<R>> {
    /// Engine drawing nonces from `rng` by rejection sampling
    pub fn with_rng(rng: R) -> Self {
        Self::new(RandomNonce::new(rng))
    }
}

impl<R: RngCore + CryptoRng> EcdsaP256<HedgedNonce<R>> {
    /// Engine with RFC 6979 nonces hedged by fresh randomness from `rng`
    pub fn hedged(rng: R) -> Self {
        Self::new(HedgedNonce::new(rng))
    }
}

impl<N: NonceSource> EcdsaP256<N> {
    /// Engine with an arbitrary nonce strategy on the software backend
    pub fn new(nonce: N) -> Self {
        Self::with_backend(nonce, SoftwareBackend)
    }
}

impl<N: NonceSource, B: CurveBackend> EcdsaP256<N, B> {
    /// Engine with an arbitrary nonce strategy and curve backend
    pub fn with_backend(nonce: N, backend: B) -> Self {
        Self { nonce, backend }
    }

    /// The curve backend in use
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Import a public key, validating it on this engine's backend
    pub fn import_public_key(&self, bytes: &[u8]) -> ApiResult<EcdsaP256PublicKey> {
        EcdsaP256PublicKey::import_with(bytes, &self.backend)
    }

    /// Derive the public key of `secret_key` on this engine's backend
    pub fn public_key(&self, secret_key: &EcdsaP256SecretKey) -> ApiResult<EcdsaP256PublicKey> {
        secret_key.public_key_with(&self.backend)
    }

    /// Sign a 32-byte digest
    ///
    /// Algorithm (FIPS 186-4, Section 6.3):
    /// 1. Draw k ∈ [1, n-1] from the nonce stream
    /// 2. (x₁, y₁) = k·G, r = x₁ mod n; if r = 0, go back to step 1
    /// 3. s = k⁻¹(z + rd) mod n where z is the digest reduced mod n;
    ///    if s = 0, go back to step 1
    /// 4. Return (r, s)
    ///
    /// # Errors
    ///
    /// `KeyDisposed` for a disposed key; `EntropyUnavailable` if the nonce
    /// source cannot produce a candidate.
    pub fn sign(
        &mut self,
        digest: &Digest,
        secret_key: &EcdsaP256SecretKey,
    ) -> ApiResult<EcdsaP256Signature> {
        self.sign_with_nonce_count(digest, secret_key)
            .map(|(signature, _)| signature)
    }

    /// Like [`sign`](Self::sign), also reporting how many nonce candidates
    /// were drawn (1 unless r or s came out zero)
    pub fn sign_with_nonce_count(
        &mut self,
        digest: &Digest,
        secret_key: &EcdsaP256SecretKey,
    ) -> ApiResult<(EcdsaP256Signature, usize)> {
        const CONTEXT: &str = "EcdsaP256::sign";

        let d = secret_key.scalar(CONTEXT)?;
        let z = Scalar::reduce_bytes(digest.as_bytes());
        let mut stream = self.nonce.open(d, digest)?;
        let mut drawn = 0usize;

        loop {
            // Step 1: candidate nonce
            let k = stream.next_nonce()?;
            drawn += 1;

            // Step 2: r = x(k·G) mod n
            let big_r = self.backend.mul_base(&k);
            let r = Scalar::reduce_bytes(&big_r.x_coordinate_bytes());
            if bool::from(r.is_zero()) {
                continue;
            }

            // Step 3: s = k⁻¹(z + rd) mod n
            let k_inv = k.inv_mod_n().with_context(CONTEXT)?;
            let s = k_inv.mul_mod_n(&z.add_mod_n(&r.mul_mod_n(d)));
            if bool::from(s.is_zero()) {
                continue;
            }

            // Step 4
            return Ok((
                EcdsaP256Signature::new(r.serialize(), s.serialize()),
                drawn,
            ));
        }
    }

    /// Verify a signature over a 32-byte digest
    ///
    /// Algorithm (FIPS 186-4, Section 6.4):
    /// 1. Reject r, s outside [1, n-1] as malformed
    /// 2. w = s⁻¹ mod n, u₁ = zw mod n, u₂ = rw mod n
    /// 3. (x₁, y₁) = u₁·G + u₂·Q; the identity fails verification
    /// 4. Accept iff x₁ mod n = r
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match
    /// and `Err(MalformedSignature)` for out-of-range components.
    pub fn verify(
        &self,
        digest: &Digest,
        public_key: &EcdsaP256PublicKey,
        signature: &EcdsaP256Signature,
    ) -> ApiResult<bool> {
        const CONTEXT: &str = "EcdsaP256::verify";

        // Step 1
        let r = Scalar::from_canonical_bytes(signature.r()).map_err(|_| {
            ApiError::MalformedSignature {
                context: CONTEXT,
                reason: "r is zero or not below the group order",
            }
        })?;
        let s = Scalar::from_canonical_bytes(signature.s()).map_err(|_| {
            ApiError::MalformedSignature {
                context: CONTEXT,
                reason: "s is zero or not below the group order",
            }
        })?;

        // Step 2
        let z = Scalar::reduce_bytes(digest.as_bytes());
        let w = s.inv_mod_n().with_context(CONTEXT)?;
        let u1 = z.mul_mod_n(&w);
        let u2 = r.mul_mod_n(&w);

        // Step 3
        let point = self.backend.mul_add_base(&u1, &u2, public_key.point());
        if point.is_identity() {
            return Ok(false);
        }

        // Step 4, constant-time
        let v = Scalar::reduce_bytes(&point.x_coordinate_bytes());
        Ok(ct_eq(v.serialize(), signature.r()))
    }
}

impl<N: NonceSource, B: CurveBackend> DigestSignature for EcdsaP256<N, B> {
    type PublicKey = EcdsaP256PublicKey;
    type SecretKey = EcdsaP256SecretKey;
    type SignatureData = EcdsaP256Signature;

    fn name() -> &'static str {
        "ECDSA-P256"
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        secret_key.public_key()
    }

    fn sign_digest(
        &mut self,
        digest: &Digest,
        secret_key: &Self::SecretKey,
    ) -> ApiResult<Self::SignatureData> {
        self.sign(digest, secret_key)
    }

    fn verify_digest(
        &self,
        digest: &Digest,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<bool> {
        self.verify(digest, public_key, signature)
    }

    fn dispose(secret_key: &mut Self::SecretKey) {
        secret_key.dispose();
    }
}

impl<N: NonceSource, B: CurveBackend> SignatureSerialize for EcdsaP256<N, B> {
    const PUBLIC_KEY_SIZE: usize = ECDSA_P256_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = ECDSA_P256_PRIVATE_KEY_SIZE;
    const SIGNATURE_SIZE: usize = ECDSA_P256_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.export().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        EcdsaP256PublicKey::import(bytes)
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> ApiResult<Zeroizing<Vec<u8>>> {
        let bytes = key.export()?;
        Ok(Zeroizing::new(bytes.to_vec()))
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        EcdsaP256SecretKey::import(bytes)
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_bytes().to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        EcdsaP256Signature::from_bytes(bytes)
    }
}
