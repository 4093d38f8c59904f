//! Common utilities for ECDSA implementations

use ecsig_api::error::validate;
use ecsig_api::Result as ApiResult;

/// Width of one signature component in bytes
pub const COMPONENT_SIZE: usize = 32;

/// Width of an encoded signature in bytes
pub const SIGNATURE_SIZE: usize = 2 * COMPONENT_SIZE;

/// ECDSA signature components (r, s)
///
/// Encoded as `r ∥ s`, each a fixed-width big-endian integer. Decoding only
/// checks the length; whether `r` and `s` lie in `[1, n-1]` is decided by
/// verification, which reports out-of-range components as a malformed
/// signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignatureComponents {
    r: [u8; COMPONENT_SIZE],
    s: [u8; COMPONENT_SIZE],
}

impl SignatureComponents {
    /// Assemble a signature from its two components
    pub fn new(r: [u8; COMPONENT_SIZE], s: [u8; COMPONENT_SIZE]) -> Self {
        Self { r, s }
    }

    /// The `r` component, big-endian
    pub fn r(&self) -> &[u8; COMPONENT_SIZE] {
        &self.r
    }

    /// The `s` component, big-endian
    pub fn s(&self) -> &[u8; COMPONENT_SIZE] {
        &self.s
    }

    /// Serialize to the 64-byte `r ∥ s` form
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..COMPONENT_SIZE].copy_from_slice(&self.r);
        out[COMPONENT_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Parse the 64-byte `r ∥ s` form
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        validate::signature(
            bytes.len() == SIGNATURE_SIZE,
            "ECDSA signature decoding",
            "signature must be exactly 64 bytes",
        )?;
        let mut r = [0u8; COMPONENT_SIZE];
        let mut s = [0u8; COMPONENT_SIZE];
        r.copy_from_slice(&bytes[..COMPONENT_SIZE]);
        s.copy_from_slice(&bytes[COMPONENT_SIZE..]);
        Ok(Self { r, s })
    }
}

impl TryFrom<&[u8]> for SignatureComponents {
    type Error = ecsig_api::Error;

    fn try_from(bytes: &[u8]) -> ApiResult<Self> {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecsig_api::Error as ApiError;

    #[test]
    fn test_fixed_width_layout() {
        let sig = SignatureComponents::new([0x01; 32], [0xFE; 32]);
        let bytes = sig.to_bytes();

        assert_eq!(&bytes[..32], &[0x01; 32]);
        assert_eq!(&bytes[32..], &[0xFE; 32]);
        assert_eq!(SignatureComponents::from_bytes(&bytes).unwrap(), sig);
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        let mut r = [0u8; 32];
        r[31] = 1;
        let sig = SignatureComponents::new(r, r);
        let bytes = sig.to_bytes();
        assert_eq!(bytes.len(), SIGNATURE_SIZE);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[31], 1);
    }

    #[test]
    fn test_wrong_length_is_malformed() {
        for len in [0usize, 63, 65, 72] {
            let err = SignatureComponents::from_bytes(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, ApiError::MalformedSignature { .. }));
        }
    }

    #[test]
    fn test_zero_components_decode() {
        // range checks belong to verification
        assert!(SignatureComponents::from_bytes(&[0u8; 64]).is_ok());
    }
}
