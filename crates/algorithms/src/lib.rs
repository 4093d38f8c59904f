//! Constant-time arithmetic behind the ecsig ECDSA engine
//!
//! This crate provides the NIST P-256 prime field, the scalar field modulo
//! the group order, affine and projective point arithmetic, and the
//! HMAC-SHA256 primitive that drives deterministic nonce generation.
//!
//! # Security Features
//!
//! - Scalar multiplication runs in time independent of the scalar
//! - Scalars live in zeroizing buffers and are wiped on drop
//! - Field and scalar encodings are canonical; out-of-range values are rejected

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, CurveBackend, P256Point, P256Scalar, SoftwareBackend};

// Re-export security types from ecsig-common
pub use ecsig_common::security::SecretBuffer;
