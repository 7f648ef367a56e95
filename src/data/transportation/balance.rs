//! # Balancing
//!
//! The stepping stone method needs total supply and total demand to be equal. When they're not, a
//! dummy node absorbs the difference: a destination receiving the surplus supply, or a source
//! providing the missing demand. Shipping to or from a dummy node is free.
use std::cmp::Ordering;

use crate::data::number_types::traits::{Quantity, total};
use crate::data::transportation::Problem;

/// Which kind of node was appended to balance a problem.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dummy {
    /// An extra source, appended as the last row. Its shipments represent unmet demand.
    Source,
    /// An extra destination, appended as the last column. Its shipments represent unused supply.
    Destination,
}

/// A transportation problem in which total supply equals total demand.
///
/// Created from a `Problem` using `Problem::balance`. Indices of the original sources and
/// destinations are unchanged; a dummy node, if any, has the highest index.
#[derive(Debug, Clone, PartialEq)]
pub struct Balanced<F> {
    supply: Vec<F>,
    demand: Vec<F>,
    costs: Vec<Vec<F>>,

    dummy: Option<Dummy>,
}

impl<F: Quantity> Problem<F> {
    /// Append a dummy node if total supply and total demand differ.
    ///
    /// If there is more supply than demand, a destination is added with the difference as its
    /// demand. If there is more demand than supply, a source is added with the difference as its
    /// supply. All costs to or from the dummy node are zero.
    pub fn balance(self) -> Balanced<F> {
        let Problem { mut supply, mut demand, mut costs } = self;

        let total_supply = total(&supply);
        let total_demand = total(&demand);

        let dummy = match total_supply.partial_cmp(&total_demand) {
            Some(Ordering::Greater) => {
                demand.push(total_supply - total_demand);
                for row in &mut costs {
                    row.push(F::zero());
                }
                Some(Dummy::Destination)
            },
            Some(Ordering::Less) => {
                supply.push(total_demand - total_supply);
                costs.push(vec![F::zero(); demand.len()]);
                Some(Dummy::Source)
            },
            // Validation excludes values that don't compare
            Some(Ordering::Equal) | None => None,
        };

        Balanced { supply, demand, costs, dummy }
    }
}

impl<F> Balanced<F> {
    /// Number of rows, that is, sources including a dummy source.
    pub fn nr_rows(&self) -> usize {
        self.supply.len()
    }

    /// Number of columns, that is, destinations including a dummy destination.
    pub fn nr_columns(&self) -> usize {
        self.demand.len()
    }

    /// Capacity per row.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Requirement per column.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Cost of shipping a single unit along a cell.
    pub fn cost(&self, row: usize, column: usize) -> &F {
        debug_assert!(row < self.nr_rows() && column < self.nr_columns());

        &self.costs[row][column]
    }

    /// The node that was added to balance the problem, if any.
    pub fn dummy(&self) -> Option<Dummy> {
        self.dummy
    }

    /// Number of sources in the problem before balancing.
    pub fn nr_sources(&self) -> usize {
        match self.dummy {
            Some(Dummy::Source) => self.nr_rows() - 1,
            _ => self.nr_rows(),
        }
    }

    /// Number of destinations in the problem before balancing.
    pub fn nr_destinations(&self) -> usize {
        match self.dummy {
            Some(Dummy::Destination) => self.nr_columns() - 1,
            _ => self.nr_columns(),
        }
    }

    /// Whether a row represents the dummy source.
    pub fn is_dummy_row(&self, row: usize) -> bool {
        row >= self.nr_sources()
    }

    /// Whether a column represents the dummy destination.
    pub fn is_dummy_column(&self, column: usize) -> bool {
        column >= self.nr_destinations()
    }

    /// Number of basic cells in a nondegenerate basis.
    pub fn basis_size(&self) -> usize {
        self.nr_rows() + self.nr_columns() - 1
    }
}
