//! Hash functions used for deterministic nonce derivation
//!
//! The signature engine consumes pre-computed digests and never hashes the
//! message itself. SHA-256 lives here only because HMAC-SHA256 drives the
//! RFC 6979 nonce generator.

use crate::error::Result;
use zeroize::Zeroize;

pub mod sha2;

pub use sha2::Sha256;

/// Trait for streaming hash functions
pub trait HashFunction: Clone + Zeroize {
    /// Digest value produced by [`finalize`](Self::finalize)
    type Output: AsRef<[u8]> + Clone + Zeroize;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Absorb `data`
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset the internal state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Size of the digest in bytes
    fn output_size() -> usize;

    /// Size of the internal block in bytes
    fn block_size() -> usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// One-shot convenience wrapper
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
