//! Public API traits and types for the ecsig library
//!
//! This crate provides the public API surface for the ecsig workspace: the
//! error taxonomy every operation reports through, the [`Digest`] input type
//! and the signature traits the engine implements.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{DigestSignature, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::signature;
