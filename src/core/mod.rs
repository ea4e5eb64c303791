//! Shared error types and random helpers.
//!
//! Used by both the bank account formats and the national ID generator.

mod error;
mod random;

pub use error::*;
pub use random::{MAX_RANDOM_WIDTH, random_digits};
