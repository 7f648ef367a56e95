//! # Solutions
//!
//! The final allocation of a solved problem. Shipments to a dummy destination are reported as
//! unused supply, shipments from a dummy source as unmet demand.
use std::fmt;
use std::fmt::Display;

use crate::data::number_types::traits::Quantity;
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::{Balanced, Dummy};

/// A balanced problem together with an optimal allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    problem: Balanced<F>,
    grid: AllocationGrid<F>,
    nr_rotations: usize,
}

impl<F: Quantity> Solution<F> {
    /// Wrap the result of the stepping stone method.
    ///
    /// # Arguments
    ///
    /// * `problem`: The balanced problem that was solved.
    /// * `grid`: Final allocation, feasible for that problem.
    /// * `nr_rotations`: Number of rotations that were needed to reach this allocation.
    pub fn new(problem: Balanced<F>, grid: AllocationGrid<F>, nr_rotations: usize) -> Self {
        debug_assert_eq!(grid.nr_rows(), problem.nr_rows());
        debug_assert_eq!(grid.nr_columns(), problem.nr_columns());
        debug_assert!(grid.is_nonnegative());

        Self { problem, grid, nr_rotations }
    }

    /// The balanced problem, including a dummy node if one was needed.
    pub fn problem(&self) -> &Balanced<F> {
        &self.problem
    }

    /// Final allocation, including the dummy row or column.
    pub fn grid(&self) -> &AllocationGrid<F> {
        &self.grid
    }

    /// Number of rotations applied after constructing the initial basis.
    pub fn nr_rotations(&self) -> usize {
        self.nr_rotations
    }

    /// Total cost of the allocation. Nothing shipped to or from a dummy node costs anything.
    pub fn total_cost(&self) -> F {
        self.grid.total_cost()
    }

    /// Quantity shipped from a source to a destination, zero if the cell is not basic.
    pub fn quantity(&self, source: usize, destination: usize) -> F {
        self.grid.quantity(source, destination)
    }

    /// All positive shipments between a real source and a real destination, in row-major order.
    pub fn shipments(&self) -> impl Iterator<Item = &Shipment<F>> {
        self.grid.basic_cells()
            .filter(move |shipment| {
                !self.problem.is_dummy_row(shipment.row)
                    && !self.problem.is_dummy_column(shipment.column)
            })
            .filter(|shipment| shipment.quantity > F::zero())
    }

    /// Supply that each source doesn't ship, that is, what it sends to the dummy destination.
    ///
    /// All zero if there is no dummy destination.
    pub fn unused_supply(&self) -> Vec<F> {
        (0..self.problem.nr_sources())
            .map(|source| match self.problem.dummy() {
                Some(Dummy::Destination) => {
                    self.grid.quantity(source, self.problem.nr_destinations())
                },
                _ => F::zero(),
            })
            .collect()
    }

    /// Demand that each destination doesn't receive, that is, what it gets from the dummy source.
    ///
    /// All zero if there is no dummy source.
    pub fn unmet_demand(&self) -> Vec<F> {
        (0..self.problem.nr_destinations())
            .map(|destination| match self.problem.dummy() {
                Some(Dummy::Source) => self.grid.quantity(self.problem.nr_sources(), destination),
                _ => F::zero(),
            })
            .collect()
    }
}

impl<F: Quantity + Display> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = (0..self.problem.nr_sources())
            .map(|source| {
                (0..self.problem.nr_destinations())
                    .map(|destination| match self.grid.get(source, destination) {
                        Some(shipment) if shipment.quantity > F::zero() => {
                            shipment.quantity.to_string()
                        },
                        _ => "-".to_string(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

        for row in &cells {
            let line = row.iter()
                .map(|cell| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Total cost: {}", self.total_cost())?;

        for shipment in self.shipments() {
            writeln!(
                f,
                "source {} ships {} units to destination {}",
                shipment.row, shipment.quantity, shipment.column,
            )?;
        }
        for (source, quantity) in self.unused_supply().into_iter().enumerate() {
            if quantity > F::zero() {
                writeln!(f, "source {} keeps {} units unused", source, quantity)?;
            }
        }
        for (destination, quantity) in self.unmet_demand().into_iter().enumerate() {
            if quantity > F::zero() {
                writeln!(f, "destination {} is short {} units", destination, quantity)?;
            }
        }

        Ok(())
    }
}
