//! # The stepping stone method
//!
//! Starting from a feasible basis, each iteration repairs degeneracy, looks for a non-basic cell
//! whose closed path reduces the total cost and rotates the largest possible quantity along that
//! path. The method stops when no closed path reduces the total cost.
use log::debug;

use crate::algorithm::{Configuration, SolveError};
use crate::algorithm::stepping_stone::strategy::pivot_rule::PivotRule;
use crate::algorithm::stepping_stone::tableau::{is_in_basic_solution_state, Tableau};
use crate::data::number_types::traits::Quantity;

pub mod closed_path;
pub mod degeneracy;
pub mod strategy;
pub mod tableau;

/// Reduces the cost of the allocation in the tableau until no improving rotation remains.
///
/// While calling this method, the allocation in the tableau should be feasible: it ships exactly
/// the supply of each row and exactly the demand of each column.
///
/// # Return value
///
/// The number of rotations that were applied.
///
/// # Errors
///
/// When the basis can't be repaired, or when the configured rotation limit is reached before
/// converging.
pub fn optimize<F, PR>(
    tableau: &mut Tableau<F>,
    configuration: &Configuration,
) -> Result<usize, SolveError>
where
    F: Quantity,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_rotations = 0;
    loop {
        tableau.fix_degenerate_case()?;
        debug_assert!(is_in_basic_solution_state(tableau));

        match rule.select_entering(tableau) {
            Some(rotation) => {
                if configuration.rotation_limit.is_some_and(|limit| nr_rotations >= limit) {
                    break Err(SolveError::RotationLimit(nr_rotations));
                }

                debug!(
                    "Rotation {}: ({}, {}) enters, ({}, {}) leaves, moving {:?} at {:?} per unit",
                    nr_rotations + 1,
                    rotation.entering().row, rotation.entering().column,
                    rotation.leaving.row, rotation.leaving.column,
                    rotation.leaving.quantity, rotation.cost_change,
                );
                tableau.bring_into_basis(rotation);
                nr_rotations += 1;
            },
            None => {
                debug!(
                    "Converged after {} rotations at cost {:?}",
                    nr_rotations, tableau.objective_function_value(),
                );
                break Ok(nr_rotations);
            },
        }
    }
}
