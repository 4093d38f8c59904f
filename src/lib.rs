//! # ecsig
//!
//! ECDSA over NIST P-256 for callers that already hold a 32-byte message digest.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecsig = "0.3"
//! ```
//!
//! ```
//! use ecsig::prelude::*;
//!
//! let secret = EcdsaP256SecretKey::import(&[0x11; 32])?;
//! let public = secret.public_key()?;
//! let digest = Digest::new([0x42; 32]);
//!
//! let mut engine = EcdsaP256::deterministic();
//! let signature = engine.sign(&digest, &secret)?;
//! assert!(engine.verify(&digest, &public, &signature)?);
//! # Ok::<(), ecsig::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the ECDSA engine, key material and nonce sources
//! - `algorithms`: field, scalar and point arithmetic only
//! - `rng`: re-export `rand` for callers building a random nonce source
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecsig-api`]: error taxonomy, `Digest`, signature traits
//! - [`ecsig-params`]: P-256 curve constants
//! - [`ecsig-algorithms`]: field/scalar/point arithmetic, curve backends, HMAC-SHA256
//! - [`ecsig-sign`]: the ECDSA engine

// Core re-exports (always available)
pub use ecsig_api as api;
pub use ecsig_common as common;
pub use ecsig_internal as internal;
pub use ecsig_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecsig_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use ecsig_sign as sign;

#[cfg(feature = "rng")]
pub use rand;

/// Common imports for ecsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Digest, Error, Result};

    // Re-export core traits
    pub use crate::api::{DigestSignature, SignatureSerialize};

    // Re-export security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "sign")]
    pub use crate::sign::traditional::ecdsa::{
        EcdsaP256, EcdsaP256PublicKey, EcdsaP256SecretKey, EcdsaP256Signature, HedgedNonce,
        NonceSource, NonceStream, RandomNonce, Rfc6979,
    };
}
