//! Core value types for the ecsig public API

use core::fmt;

use crate::error::{validate, Result};

/// Size of a [`Digest`] in bytes
pub const DIGEST_SIZE: usize = 32;

/// A pre-computed 256-bit message digest
///
/// The digest is opaque to the engine: it is interpreted as a big-endian
/// integer and reduced modulo the group order, never hashed again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Wrap an existing 32-byte digest
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, failing with `InvalidLength` unless it is 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", bytes.len(), DIGEST_SIZE)?;
        let mut out = [0u8; DIGEST_SIZE];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Borrow the digest bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Copy the digest bytes out
    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = crate::Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_digest_from_slice() {
        let digest = Digest::from_slice(&[7u8; 32]).unwrap();
        assert_eq!(digest.as_bytes(), &[7u8; 32]);

        let err = Digest::from_slice(&[7u8; 33]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "Digest::from_slice",
                expected: 32,
                actual: 33
            }
        );
    }

    #[test]
    fn test_digest_debug_is_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        let rendered = format!("{:?}", Digest::new(bytes));
        assert!(rendered.starts_with("Digest(ab00"));
    }
}
