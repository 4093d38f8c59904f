//! Traditional signature schemes
//!
//! Only ECDSA over P-256 is provided.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{
    EcdsaP256, EcdsaP256PublicKey, EcdsaP256SecretKey, EcdsaP256Signature, HedgedNonce,
    NonceSource, NonceStream, RandomNonce, Rfc6979,
};
