//! # Allocations
//!
//! A basis of the transportation problem is a set of basic cells, each carrying a shipment. All
//! other cells ship nothing. The grid stores an optional shipment per cell; `None` means that the
//! cell is not basic.
//!
//! A basic cell may carry a zero quantity. Such cells are introduced to repair degenerate bases, and
//! are distinct from non-basic cells.
use itertools::iproduct;

use crate::data::number_types::traits::{Quantity, total};

/// Quantity shipped along a single cell, together with the cell's unit cost and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment<F> {
    /// Number of units shipped.
    pub quantity: F,
    /// Cost of shipping a single unit.
    pub cost_per_unit: F,
    /// Source index.
    pub row: usize,
    /// Destination index.
    pub column: usize,
}

impl<F: Quantity> Shipment<F> {
    /// Create a new shipment.
    pub fn new(quantity: F, cost_per_unit: F, row: usize, column: usize) -> Self {
        Self { quantity, cost_per_unit, row, column }
    }

    /// A shipment of nothing, as used when considering a cell to enter the basis.
    pub fn candidate(cost_per_unit: F, row: usize, column: usize) -> Self {
        Self::new(F::zero(), cost_per_unit, row, column)
    }

    /// Whether two shipments occupy the same cell.
    pub fn is_at(&self, row: usize, column: usize) -> bool {
        self.row == row && self.column == column
    }

    /// Total cost of this shipment.
    pub fn cost(&self) -> F {
        self.quantity.clone() * self.cost_per_unit.clone()
    }
}

/// A `rows` by `columns` matrix of optional shipments.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationGrid<F> {
    cells: Vec<Vec<Option<Shipment<F>>>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Quantity> AllocationGrid<F> {
    /// Create a grid without any basic cells.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            cells: vec![vec![None; nr_columns]; nr_rows],
            nr_rows,
            nr_columns,
        }
    }

    /// Make the cell of a shipment basic, replacing any existing shipment in that cell.
    pub fn insert(&mut self, shipment: Shipment<F>) {
        debug_assert!(shipment.row < self.nr_rows && shipment.column < self.nr_columns);

        let (row, column) = (shipment.row, shipment.column);
        self.cells[row][column] = Some(shipment);
    }

    /// Make a cell non-basic.
    ///
    /// # Return value
    ///
    /// The shipment that was in that cell, if it was basic.
    pub fn remove(&mut self, row: usize, column: usize) -> Option<Shipment<F>> {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        self.cells[row][column].take()
    }

    /// The shipment in a cell, if the cell is basic.
    pub fn get(&self, row: usize, column: usize) -> Option<&Shipment<F>> {
        debug_assert!(row < self.nr_rows && column < self.nr_columns);

        self.cells[row][column].as_ref()
    }

    /// Whether a cell is basic.
    pub fn is_basic(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some()
    }

    /// Quantity shipped along a cell, zero if the cell is not basic.
    pub fn quantity(&self, row: usize, column: usize) -> F {
        self.get(row, column).map_or_else(F::zero, |shipment| shipment.quantity.clone())
    }

    /// All basic cells, in row-major order.
    pub fn basic_cells(&self) -> impl Iterator<Item = &Shipment<F>> {
        self.cells.iter().flatten().flatten()
    }

    /// Coordinates of all non-basic cells, in row-major order.
    pub fn non_basic_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        iproduct!(0..self.nr_rows, 0..self.nr_columns)
            .filter(move |&(row, column)| !self.is_basic(row, column))
    }

    /// Number of basic cells.
    pub fn nr_basic(&self) -> usize {
        self.basic_cells().count()
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Total quantity shipped from a row.
    pub fn row_total(&self, row: usize) -> F {
        total(self.cells[row].iter().flatten().map(|shipment| &shipment.quantity))
    }

    /// Total quantity shipped to a column.
    pub fn column_total(&self, column: usize) -> F {
        total(self.cells.iter().filter_map(|row| row[column].as_ref()).map(|shipment| &shipment.quantity))
    }

    /// Total cost of all shipments.
    pub fn total_cost(&self) -> F {
        self.basic_cells().fold(F::zero(), |sum, shipment| sum + shipment.cost())
    }

    /// Whether no basic cell ships a negative quantity.
    pub fn is_nonnegative(&self) -> bool {
        self.basic_cells().all(|shipment| shipment.quantity >= F::zero())
    }

    /// Whether every row ships exactly its supply and every column receives exactly its demand.
    ///
    /// Totals are compared exactly. With floating point quantities, a feasible allocation of
    /// fractional capacities may not pass this check.
    pub fn satisfies(&self, supply: &[F], demand: &[F]) -> bool {
        supply.len() == self.nr_rows && demand.len() == self.nr_columns
            && supply.iter().enumerate().all(|(i, value)| &self.row_total(i) == value)
            && demand.iter().enumerate().all(|(j, value)| &self.column_total(j) == value)
            && self.is_nonnegative()
    }
}
