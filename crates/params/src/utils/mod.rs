//! Constants shared by helper primitives

pub mod hash;
