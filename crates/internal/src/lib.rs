//! Internal helpers shared by the ecsig crates
//!
//! Nothing in here is part of the stable API.

#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
