//! HMAC (Hash-based Message Authentication Code), constant-time
//!
//! RFC 2104 / FIPS 198-1. Keys and pads live in zeroizing fixed-size buffers.
//! The RFC 6979 nonce generator is the only consumer.

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use ecsig_common::security::SecretBuffer;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const MAX_BLOCK: usize = 64; // SHA-256 block size

/// Constant-time HMAC implementation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction> {
    hash: H,
    opad: SecretBuffer<MAX_BLOCK>,
    block_size: usize,
    is_finalized: bool,
}

impl<H: HashFunction> Hmac<H> {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`.
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::block_size();
        if bs > MAX_BLOCK {
            return Err(Error::param("hmac_block_size", "hash block size exceeds 64 bytes"));
        }

        // Hash the key unconditionally so the running time
        // depends only on the public key length.
        let mut hk = H::new();
        hk.update(key)?;
        let hashed = Zeroizing::new(hk.finalize()?);

        // Select either `key` or `hashed` per byte with a mask.
        let mut k_prime = SecretBuffer::<MAX_BLOCK>::zeroed();
        let long = (key.len() > bs) as u8;
        let mask = long.wrapping_neg(); // 0xFF when long else 0x00
        for (i, out) in k_prime.as_mut_slice().iter_mut().take(bs).enumerate() {
            let k = key.get(i).copied().unwrap_or(0);
            let h = (*hashed).as_ref().get(i).copied().unwrap_or(0);
            *out = (h & mask) | (k & !mask);
        }

        let mut ipad = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mut opad = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..bs {
            ipad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::IPAD_BYTE;
            opad.as_mut_slice()[i] = k_prime.as_slice()[i] ^ Self::OPAD_BYTE;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_slice()[..bs])?;

        Ok(Self {
            hash,
            opad,
            block_size: bs,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::param(
                "hmac_state",
                "Cannot update after finalization",
            ));
        }

        self.hash.update(data).map(|_| ())
    }

    /// Finalise and return the tag.
    pub fn finalize(&mut self) -> Result<Zeroizing<Vec<u8>>> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "HMAC already finalized"));
        }

        self.is_finalized = true;

        let inner_hash = Zeroizing::new(self.hash.finalize()?);

        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..self.block_size])?;
        outer.update((*inner_hash).as_ref())?;

        let tag = outer.finalize()?;
        Ok(Zeroizing::new(tag.as_ref().to_vec()))
    }

    /// One-shot MAC helper over several input pieces.
    pub fn mac_parts(key: &[u8], parts: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        let mut h = Self::new(key)?;
        for part in parts {
            h.update(part)?;
        }
        h.finalize()
    }

    /// One-shot MAC helper.
    pub fn mac(key: &[u8], data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Self::mac_parts(key, &[data])
    }
}
