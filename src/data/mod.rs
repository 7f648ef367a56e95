//! # Data structures
//!
//! Number types and representations of transportation problems and their solutions.
pub mod number_types;
pub mod transportation;
