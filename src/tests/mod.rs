//! # Tests that require a look inside the crate.
//!
//! Convention for function names in the pipeline tests:
//!
//! * `const TEXT_LITERAL_STRING`
//! * `fn problem()`
//! * `fn balanced_form()`
//! * `fn initial_allocation()`
//! * `fn optimal_allocation()`
pub mod rosetta;
