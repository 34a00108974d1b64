//! Tests for the popcount, prefix XOR and zero-high primitives.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;

mod test;
