//! Per-signature nonce generation
//!
//! A [`NonceSource`] opens one [`NonceStream`] per signature. The engine pulls
//! a candidate `k` from the stream and, in the rare case that `r` or `s`
//! comes out zero, pulls the next one from the same stream. For RFC 6979 this
//! is exactly the step H continuation; for random sources it is a fresh draw.

use core::fmt;

use ecsig_algorithms::ec::p256::{Scalar, P256_SCALAR_SIZE};
use ecsig_algorithms::hash::Sha256;
use ecsig_algorithms::mac::Hmac;
use ecsig_api::{Digest, Error as ApiError, Result as ApiResult};
use ecsig_common::SecretBuffer;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Upper bound on rejection-sampling draws for one nonce
///
/// A healthy generator lands in `[1, n-1]` with probability above
/// `1 - 2^-32`, so exhausting this bound means the generator is broken.
pub const MAX_RANDOM_DRAWS: usize = 64;

/// A stream of nonce candidates for one signature
pub trait NonceStream {
    /// Produce the next candidate `k ∈ [1, n-1]`
    ///
    /// # Errors
    ///
    /// `EntropyUnavailable` if the underlying randomness fails.
    fn next_nonce(&mut self) -> ApiResult<Scalar>;
}

/// Strategy for producing ECDSA nonces
pub trait NonceSource {
    /// Stream type opened for a single signature
    type Stream<'a>: NonceStream
    where
        Self: 'a;

    /// Start the nonce stream for private scalar `x` and digest `digest`
    fn open(&mut self, x: &Scalar, digest: &Digest) -> ApiResult<Self::Stream<'_>>;
}

/* ------------------------------------------------------------------------- */
/*                         RFC 6979 deterministic nonces                     */
/* ------------------------------------------------------------------------- */

/// Deterministic nonces per RFC 6979 §3.2 with HMAC-SHA256
///
/// The same key and digest always produce the same `k`, so signatures are
/// reproducible and need no randomness at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rfc6979;

impl NonceSource for Rfc6979 {
    type Stream<'a> = Rfc6979Stream where Self: 'a;

    fn open(&mut self, x: &Scalar, digest: &Digest) -> ApiResult<Self::Stream<'_>> {
        Rfc6979Stream::new(x, digest, &[])
    }
}

/// HMAC-DRBG state `(K, V)` for one RFC 6979 derivation
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Rfc6979Stream {
    k: SecretBuffer<32>,
    v: SecretBuffer<32>,
    drawn: bool,
}

impl Rfc6979Stream {
    /// Run steps B through F
    ///
    /// `extra` is the optional additional input k' of §3.6; it is appended
    /// after `bits2octets(h1)` in steps D and F.
    fn new(x: &Scalar, digest: &Digest, extra: &[u8]) -> ApiResult<Self> {
        // int2octets(x)
        let x_octets = Zeroizing::new(x.serialize());
        // bits2octets(h1): qlen = hlen = 256, so only the reduction mod n applies
        let h_octets = Scalar::reduce_bytes(digest.as_bytes()).serialize();

        // Step B / C
        let mut state = Self {
            k: SecretBuffer::zeroed(),
            v: SecretBuffer::new([0x01; 32]),
            drawn: false,
        };

        // Step D / E
        state.k = Self::hmac(
            &state.k,
            &[
                state.v.as_slice(),
                &[0x00u8][..],
                &x_octets[..],
                &h_octets[..],
                extra,
            ],
        )?;
        state.v = Self::hmac(&state.k, &[state.v.as_slice()])?;

        // Step F / G
        state.k = Self::hmac(
            &state.k,
            &[
                state.v.as_slice(),
                &[0x01u8][..],
                &x_octets[..],
                &h_octets[..],
                extra,
            ],
        )?;
        state.v = Self::hmac(&state.k, &[state.v.as_slice()])?;

        Ok(state)
    }

    fn hmac(key: &SecretBuffer<32>, parts: &[&[u8]]) -> ApiResult<SecretBuffer<32>> {
        let tag = Hmac::<Sha256>::mac_parts(key.as_slice(), parts)?;
        let mut out = SecretBuffer::zeroed();
        out.as_mut_slice().copy_from_slice(&tag);
        Ok(out)
    }
}

impl NonceStream for Rfc6979Stream {
    fn next_nonce(&mut self) -> ApiResult<Scalar> {
        loop {
            // Step H.3 after every candidate already handed out or rejected
            if self.drawn {
                self.k = Self::hmac(&self.k, &[self.v.as_slice(), &[0x00u8][..]])?;
                self.v = Self::hmac(&self.k, &[self.v.as_slice()])?;
            }

            // Step H.2: one HMAC block covers qlen
            self.v = Self::hmac(&self.k, &[self.v.as_slice()])?;
            self.drawn = true;

            if let Ok(k) = Scalar::from_canonical_bytes(self.v.as_array()) {
                return Ok(k);
            }
        }
    }
}

impl fmt::Debug for Rfc6979Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rfc6979Stream").finish_non_exhaustive()
    }
}

/* ------------------------------------------------------------------------- */
/*                          CSPRNG rejection sampling                        */
/* ------------------------------------------------------------------------- */

/// Nonces drawn uniformly from `[1, n-1]` by rejection sampling
pub struct RandomNonce<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> RandomNonce<R> {
    /// Wrap a cryptographically secure generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Return the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> NonceSource for RandomNonce<R> {
    type Stream<'a> = RandomNonceStream<'a, R> where Self: 'a;

    fn open(&mut self, _x: &Scalar, _digest: &Digest) -> ApiResult<Self::Stream<'_>> {
        Ok(RandomNonceStream { rng: &mut self.rng })
    }
}

impl<R> fmt::Debug for RandomNonce<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomNonce").finish_non_exhaustive()
    }
}

/// Borrowed generator for one signature
pub struct RandomNonceStream<'a, R> {
    rng: &'a mut R,
}

impl<R: RngCore + CryptoRng> NonceStream for RandomNonceStream<'_, R> {
    fn next_nonce(&mut self) -> ApiResult<Scalar> {
        const CONTEXT: &str = "RandomNonce::next_nonce";
        let mut candidate = Zeroizing::new([0u8; P256_SCALAR_SIZE]);

        for _ in 0..MAX_RANDOM_DRAWS {
            fill_from(&mut *self.rng, &mut candidate[..], CONTEXT)?;
            if let Ok(k) = Scalar::from_canonical_bytes(&candidate) {
                return Ok(k);
            }
        }

        Err(ApiError::EntropyUnavailable {
            context: CONTEXT,
            message: format!("no candidate in [1, n-1] after {} draws", MAX_RANDOM_DRAWS),
        })
    }
}

/* ------------------------------------------------------------------------- */
/*                      RFC 6979 hedged with fresh entropy                   */
/* ------------------------------------------------------------------------- */

/// RFC 6979 with 32 bytes of fresh randomness as additional input (§3.6)
///
/// Signatures stay safe if the generator is weak, and the nonce is no longer
/// a pure function of key and digest.
pub struct HedgedNonce<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> HedgedNonce<R> {
    /// Wrap a cryptographically secure generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Return the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + CryptoRng> NonceSource for HedgedNonce<R> {
    type Stream<'a> = Rfc6979Stream where Self: 'a;

    fn open(&mut self, x: &Scalar, digest: &Digest) -> ApiResult<Self::Stream<'_>> {
        let mut extra = Zeroizing::new([0u8; 32]);
        fill_from(&mut self.rng, &mut extra[..], "HedgedNonce::open")?;
        Rfc6979Stream::new(x, digest, &extra[..])
    }
}

impl<R> fmt::Debug for HedgedNonce<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HedgedNonce").finish_non_exhaustive()
    }
}

fn fill_from<R: RngCore + ?Sized>(
    rng: &mut R,
    buf: &mut [u8],
    context: &'static str,
) -> ApiResult<()> {
    rng.try_fill_bytes(buf)
        .map_err(|e| ApiError::EntropyUnavailable {
            context,
            message: e.to_string(),
        })
}
