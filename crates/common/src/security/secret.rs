//! Secret data types with guaranteed zeroization
//!
//! This module provides type-safe wrappers for sensitive data that ensure
//! proper cleanup and zeroization when the data is no longer needed.

use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// This type provides:
/// - Automatic zeroization on drop
/// - Constant-time equality and selection
/// - Type-safe size guarantees at compile time
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow the inner array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }

    /// Returns `Choice(1)` if every byte is zero
    pub fn ct_is_zero(&self) -> Choice {
        let acc = self.data.iter().fold(0u8, |acc, &b| acc | b);
        acc.ct_eq(&0)
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> ConstantTimeEq for SecretBuffer<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data[..].ct_eq(&other.data[..])
    }
}

impl<const N: usize> SecretBuffer<N> {
    /// Constant-time select: `a` when `choice` is 0, `b` when it is 1
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut data = [0u8; N];
        for (i, out) in data.iter_mut().enumerate() {
            *out = u8::conditional_select(&a.data[i], &b.data[i], choice);
        }
        let selected = Self { data };
        data.zeroize();
        selected
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_zeroize() {
        let mut buffer = SecretBuffer::new([0x42u8; 32]);
        assert_eq!(buffer.as_slice(), &[0x42u8; 32]);
        buffer.zeroize();
        assert_eq!(buffer.as_slice(), &[0u8; 32]);
        assert!(bool::from(buffer.ct_is_zero()));
    }

    #[test]
    fn test_debug_is_redacted() {
        let buffer = SecretBuffer::new([0xAAu8; 4]);
        let rendered = format!("{:?}", buffer);
        assert_eq!(rendered, "SecretBuffer<4>([REDACTED])");
        assert!(!rendered.contains("170"));
    }

    #[test]
    fn test_conditional_select() {
        let a = SecretBuffer::new([1u8; 8]);
        let b = SecretBuffer::new([2u8; 8]);
        let picked = SecretBuffer::conditional_select(&a, &b, Choice::from(1));
        assert!(bool::from(picked.ct_eq(&b)));
        let picked = SecretBuffer::conditional_select(&a, &b, Choice::from(0));
        assert!(bool::from(picked.ct_eq(&a)));
    }
}
