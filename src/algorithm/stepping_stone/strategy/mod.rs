//! # Strategies
//!
//! Decisions made by the stepping stone method that don't affect correctness.
pub mod pivot_rule;
