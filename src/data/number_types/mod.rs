//! # Number types
//!
//! The transportation algorithms are written against a small numeric abstraction rather than a
//! concrete type. The same code runs on floating point numbers and on exact fractional numbers.
pub mod traits;
