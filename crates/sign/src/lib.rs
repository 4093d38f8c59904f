//! Digital Signature Schemes
//!
//! ECDSA over NIST P-256 for callers that hash their own messages and hand
//! the engine a 32-byte digest.

#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ecdsa::{
    EcdsaP256, EcdsaP256PublicKey, EcdsaP256SecretKey, EcdsaP256Signature, HedgedNonce,
    NonceSource, NonceStream, RandomNonce, Rfc6979,
};
