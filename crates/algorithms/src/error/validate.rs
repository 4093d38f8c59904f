//! Validation utilities for the arithmetic primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a point satisfies the curve equation
#[inline(always)]
pub fn on_curve(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(())
}

/// Validate that a scalar lies in `[1, n-1]`
#[inline(always)]
pub fn scalar_range(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::ScalarRange { context });
    }
    Ok(())
}
