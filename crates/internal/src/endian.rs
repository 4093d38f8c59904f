//! Endianness helpers for 256-bit integers stored as eight `u32` limbs

/// Read a u32 from the first four bytes of `bytes` in big-endian order
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Split a 32-byte big-endian integer into little-endian `u32` limbs
///
/// Limb 0 is the least significant word.
pub fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u32; 8] {
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = (7 - i) * 4;
        *limb = u32_from_be_bytes(&bytes[start..start + 4]);
    }
    limbs
}

/// Inverse of [`limbs_from_be_bytes`]
pub fn limbs_to_be_bytes(limbs: &[u32; 8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = (7 - i) * 4;
        out[start..start + 4].copy_from_slice(&limb.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limb_order_is_little_endian() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x01;
        bytes[0] = 0x80;
        let limbs = limbs_from_be_bytes(&bytes);
        assert_eq!(limbs[0], 1);
        assert_eq!(limbs[7], 0x8000_0000);
        assert_eq!(limbs_to_be_bytes(&limbs), bytes);
    }
}
