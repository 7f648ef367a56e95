//! # Pivot rules
//!
//! Strategies for choosing the cell that enters the basis.
use log::trace;

use crate::algorithm::stepping_stone::tableau::{Rotation, Tableau};
use crate::data::number_types::traits::Quantity;

/// Deciding how to pivot.
///
/// Each non-basic cell with a closed path is a candidate to enter the basis. A rule selects one of
/// the candidates that reduce the total cost, if any.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the rotation that brings a cell into the basis.
    ///
    /// # Return value
    ///
    /// A rotation with a negative unit cost change, or `None` if there is no such rotation, in which
    /// case the current basis is optimal.
    fn select_entering<F: Quantity>(&mut self, tableau: &Tableau<F>) -> Option<Rotation<F>>;
}

/// All rotations of cells without a basic shipment, in row-major order of the entering cell.
fn candidates<F: Quantity>(tableau: &Tableau<F>) -> impl Iterator<Item = Rotation<F>> {
    tableau.grid().non_basic_cells()
        .filter_map(move |(row, column)| tableau.evaluate(row, column))
        .inspect(|rotation| trace!(
            "Candidate ({}, {}) changes the cost by {:?} per unit",
            rotation.entering().row, rotation.entering().column, rotation.cost_change,
        ))
}

/// Pivot on the cell with the most negative unit cost change.
///
/// All candidates are evaluated. When several share the most negative unit cost change, the first
/// in row-major order is selected.
pub struct SteepestDescent;
impl PivotRule for SteepestDescent {
    fn new() -> Self {
        Self
    }

    fn select_entering<F: Quantity>(&mut self, tableau: &Tableau<F>) -> Option<Rotation<F>> {
        candidates(tableau)
            .filter(Rotation::is_improving)
            .fold(None, |best: Option<Rotation<F>>, rotation| match best {
                Some(best) if !(rotation.cost_change < best.cost_change) => Some(best),
                _ => Some(rotation),
            })
    }
}

/// Simply pivot on the first cell, in row-major order, which has a negative unit cost change.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_entering<F: Quantity>(&mut self, tableau: &Tableau<F>) -> Option<Rotation<F>> {
        candidates(tableau).find(Rotation::is_improving)
    }
}
