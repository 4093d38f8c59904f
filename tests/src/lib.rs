//! Known-answer vectors and helpers shared by the ecsig integration tests

pub mod vectors;

/// Decode a hex string into a fixed 32-byte array
///
/// Panics on malformed input; vectors are compile-time constants.
pub fn hex32(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).unwrap_or_else(|e| panic!("bad vector hex {s}: {e}"));
    let mut out = [0u8; 32];
    out.copy_from_slice(&bytes);
    out
}
