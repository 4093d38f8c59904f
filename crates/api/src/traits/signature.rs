//! Digital signature traits for ecsig
//!
//! These traits describe signature schemes that operate on a pre-computed
//! digest. Hashing the message is the caller's job.

use crate::{Digest, Result};
use zeroize::{Zeroize, Zeroizing};

/// Core trait for signature engines that sign pre-computed digests
///
/// Unlike a stateless signature trait, signing takes `&mut self`: the engine
/// owns its nonce source, and drawing a nonce advances it. Verification is
/// pure and takes `&self`.
///
/// # Type Safety
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// They are zeroizable but need not be `Clone`.
pub trait DigestSignature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize;

    /// Signature data type
    type SignatureData: Clone;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Derive the public key that matches `secret_key`
    ///
    /// # Errors
    ///
    /// Fails only if the key has been disposed.
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Sign a 32-byte digest
    ///
    /// # Security Requirements
    ///
    /// - Must not leak information about the secret key through timing
    /// - Must never return a signature component equal to zero
    fn sign_digest(
        &mut self,
        digest: &Digest,
        secret_key: &Self::SecretKey,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature over a 32-byte digest
    ///
    /// Returns `Ok(true)` for a valid signature, `Ok(false)` for a well-formed
    /// signature that does not match, and `Err(_)` for malformed input.
    fn verify_digest(
        &self,
        digest: &Digest,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;

    /// Clear the secret key; idempotent
    fn dispose(secret_key: &mut Self::SecretKey) {
        secret_key.zeroize();
    }
}

/// Optional trait for signature algorithms that support key serialization
///
/// This trait should only be implemented for algorithms where key
/// import/export is safe and well-defined.
pub trait SignatureSerialize: DigestSignature {
    /// Size of serialized public keys in bytes
    const PUBLIC_KEY_SIZE: usize;

    /// Size of serialized secret keys in bytes
    const SECRET_KEY_SIZE: usize;

    /// Size of serialized signatures in bytes
    const SIGNATURE_SIZE: usize;

    /// Export a public key to bytes
    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8>;

    /// Import a public key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or do not describe a valid
    /// curve point
    fn deserialize_public_key(bytes: &[u8]) -> Result<Self::PublicKey>;

    /// Export a secret key to bytes
    ///
    /// # Security Warning
    ///
    /// The returned bytes contain sensitive key material. The `Zeroizing`
    /// wrapper clears them from memory when dropped.
    fn serialize_secret_key(key: &Self::SecretKey) -> Result<Zeroizing<Vec<u8>>>;

    /// Import a secret key from bytes
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are malformed or out of range
    fn deserialize_secret_key(bytes: &[u8]) -> Result<Self::SecretKey>;

    /// Export a signature to bytes
    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8>;

    /// Import a signature from bytes
    ///
    /// Only the encoding is checked here; range checks on the components are
    /// part of verification.
    fn deserialize_signature(bytes: &[u8]) -> Result<Self::SignatureData>;
}
