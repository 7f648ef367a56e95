//! # Degeneracy
//!
//! A basis of a balanced transportation problem with `m` rows and `n` columns has `m + n - 1` basic
//! cells. When an allocation exhausts a row and a column at the same time, fewer cells become basic
//! and the basic cells no longer connect all rows and columns. Closed paths of some non-basic cells
//! then don't exist.
//!
//! The basis is repaired by making cells basic with a zero quantity. Only cells without a closed path
//! qualify, as those connect two parts of the basis that were not yet connected.
use log::trace;

use crate::algorithm::SolveError;
use crate::algorithm::stepping_stone::closed_path::ClosedPath;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::Balanced;

/// Add zero-quantity basic cells until the basis has the right size.
///
/// Non-basic cells are considered in row-major order; the first one without a closed path is made
/// basic. This is repeated while the basis is too small.
///
/// # Return value
///
/// The number of cells that were added.
///
/// # Errors
///
/// If the basis is too small but every non-basic cell has a closed path. An undersized basis always
/// has a part that is a tree, and cells connecting that part to the rest have no closed path, so
/// this indicates a corrupted basis.
pub fn fix_degenerate_case<F: Quantity>(
    grid: &mut AllocationGrid<F>,
    provider: &Balanced<F>,
) -> Result<usize, SolveError> {
    let expected = provider.basis_size();

    let mut nr_added = 0;
    loop {
        let nr_basic = grid.nr_basic();
        if nr_basic >= expected {
            break Ok(nr_added);
        }

        let repair = grid.non_basic_cells()
            .map(|(row, column)| Shipment::candidate(provider.cost(row, column).clone(), row, column))
            .find(|candidate| ClosedPath::find(grid, candidate.clone()).is_empty());

        match repair {
            Some(shipment) => {
                trace!(
                    "Degenerate basis with {} of {} cells, adding ({}, {})",
                    nr_basic, expected, shipment.row, shipment.column,
                );
                grid.insert(shipment);
                nr_added += 1;
            },
            None => break Err(SolveError::UnrepairableDegeneracy { nr_basic, expected }),
        }
    }
}
