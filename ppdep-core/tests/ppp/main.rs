//! Tests for the mask builder, extract and deposit.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
