//! Cross-backend agreement tests.

#[macro_use]
#[path = "../common/mod.rs"]
mod common;

mod agreement;
