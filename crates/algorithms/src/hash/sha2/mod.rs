//! SHA-256 as specified in FIPS PUB 180-4

use crate::error::Result;
use crate::hash::HashFunction;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use ecsig_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};

// SHA-256 round constants
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const H256_INIT: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// SHA-256 hash function state
///
/// HMAC keys and DRBG state flow through this type, so it is zeroized on drop.
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; SHA256_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha256 {
    fn fresh() -> Self {
        Sha256 {
            state: H256_INIT,
            buffer: [0u8; SHA256_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn compress(state: &mut [u32; 8], block: &[u8; SHA256_BLOCK_SIZE]) {
        let mut w = [0u32; 64];

        for (i, word) in w.iter_mut().take(16).enumerate() {
            *word = BigEndian::read_u32(&block[i * 4..]);
        }

        for i in 16..64 {
            let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
            let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
            w[i] = w[i - 16]
                .wrapping_add(s0)
                .wrapping_add(w[i - 7])
                .wrapping_add(s1);
        }

        let mut a = state[0];
        let mut b = state[1];
        let mut c = state[2];
        let mut d = state[3];
        let mut e = state[4];
        let mut f = state[5];
        let mut g = state[6];
        let mut h = state[7];

        for i in 0..64 {
            let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
            let ch = (e & f) ^ ((!e) & g);
            let temp1 = h
                .wrapping_add(s1)
                .wrapping_add(ch)
                .wrapping_add(K256[i])
                .wrapping_add(w[i]);
            let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
            let maj = (a & b) ^ (a & c) ^ (b & c);
            let temp2 = s0.wrapping_add(maj);

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(temp1);
            d = c;
            c = b;
            b = a;
            a = temp1.wrapping_add(temp2);
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
        state[5] = state[5].wrapping_add(f);
        state[6] = state[6].wrapping_add(g);
        state[7] = state[7].wrapping_add(h);

        w.zeroize();
    }

    fn update_internal(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA256_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SHA256_BLOCK_SIZE {
                let block = self.buffer;
                Self::compress(&mut self.state, &block);
                self.total_bytes += SHA256_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
            }
        }
    }

    fn finalize_internal(&mut self) -> [u8; SHA256_OUTPUT_SIZE] {
        self.total_bytes += self.buffer_idx as u64;
        let bit_len = self.total_bytes * 8;

        // padding
        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= 56 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SHA256_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..56] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[56..], bit_len);
        let block = self.buffer;
        Self::compress(&mut self.state, &block);

        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);

        // Leave the hasher ready for reuse
        self.zeroize();
        *self = Self::fresh();
        out
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::fresh()
    }
}

impl HashFunction for Sha256 {
    type Output = [u8; SHA256_OUTPUT_SIZE];

    fn new() -> Self {
        Self::fresh()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Ok(self.finalize_internal())
    }

    fn output_size() -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SHA256_BLOCK_SIZE
    }

    fn name() -> &'static str {
        "SHA-256"
    }
}
