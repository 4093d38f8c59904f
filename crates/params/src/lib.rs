//! Constant values for ecsig cryptographic operations
//!
//! This crate provides the curve parameters and buffer sizes shared across the
//! ecsig workspace. Everything here is a `const`, so it needs no runtime
//! initialization and is safe to read from any thread.

#![forbid(unsafe_code)]

pub mod traditional;
pub mod utils;
