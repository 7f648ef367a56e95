//! # A transportation problem solver
//!
//! Transportation problems are solved using the stepping stone method: an initial basis is
//! constructed with the northwest corner rule, after which quantities are rotated along closed
//! paths of basic cells for as long as that reduces the total cost.
//!
//! ```
//! use stepping_stone::algorithm::solve;
//! use stepping_stone::data::transportation::Problem;
//!
//! let problem = Problem::new(
//!     vec![300_f64, 400_f64],
//!     vec![250_f64, 450_f64],
//!     vec![vec![3_f64, 1_f64], vec![2_f64, 4_f64]],
//! ).unwrap();
//! let solution = solve(problem).unwrap();
//! assert_eq!(solution.total_cost(), 1400_f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
