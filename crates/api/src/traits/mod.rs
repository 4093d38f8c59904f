//! Trait definitions for the ecsig public API

pub mod signature;

pub use signature::{DigestSignature, SignatureSerialize};
