//! ECDSA signature implementation for NIST P-256
//!
//! The engine signs and verifies pre-computed 32-byte digests. Signatures use
//! the fixed-width `r ∥ s` encoding from [`common`].

pub mod common;
pub mod p256;

// Re-export P-256 types
pub use p256::{
    EcdsaP256, EcdsaP256PublicKey, EcdsaP256SecretKey, EcdsaP256Signature, HedgedNonce,
    NonceSource, NonceStream, RandomNonce, Rfc6979,
};
