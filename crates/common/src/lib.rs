//! Common implementations and shared functionality for the ecsig library
//!
//! This crate provides the secret storage used by every crate that touches
//! private scalars, nonces or MAC keys.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
