//! Validation helpers that short-circuit with the matching [`Error`] variant

use super::{Error, Result};

/// Validate a buffer length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate the length of encoded key material
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a signature encoding condition
#[inline(always)]
pub fn signature(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::MalformedSignature { context, reason });
    }
    Ok(())
}

/// Validate that a key has not been disposed
#[inline(always)]
pub fn live_key(disposed: bool, context: &'static str) -> Result<()> {
    if disposed {
        return Err(Error::KeyDisposed { context });
    }
    Ok(())
}
