//! # Initial bases
//!
//! The stepping stone method needs a feasible allocation to start from. Each rule here ships all
//! supply of a balanced problem; only cells that receive a positive quantity become basic, so the
//! result may be degenerate.
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::allocation::AllocationGrid;
use crate::data::transportation::balance::Balanced;

pub mod least_cost;
pub mod north_west;

pub use least_cost::LeastCost;
pub use north_west::NorthWestCorner;

/// Deciding how to construct a first feasible allocation.
pub trait InitialBasis {
    /// Allocate all supply to demand.
    ///
    /// # Return value
    ///
    /// A grid in which every row ships exactly its supply and every column receives exactly its
    /// demand. It has at most `rows + columns - 1` basic cells.
    fn allocate<F: Quantity>(problem: &Balanced<F>) -> AllocationGrid<F>;
}
