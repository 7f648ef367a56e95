//! # Tableau
//!
//! A balanced problem together with a current basis. The stepping stone method moves from basis to
//! basis by rotating quantities along closed paths.
use std::fmt;
use std::fmt::Display;

use crate::algorithm::SolveError;
use crate::algorithm::stepping_stone::closed_path::{ClosedPath, Role};
use crate::algorithm::stepping_stone::degeneracy::fix_degenerate_case;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::Balanced;

/// Holds the basis of a balanced problem.
#[derive(Debug)]
pub struct Tableau<'provider, F> {
    /// Supplies the costs and capacities.
    provider: &'provider Balanced<F>,
    /// Current basis.
    grid: AllocationGrid<F>,
}

impl<'provider, F: Quantity> Tableau<'provider, F> {
    /// Create a new tableau from an initial allocation.
    ///
    /// # Arguments
    ///
    /// * `provider`: The problem that is being solved.
    /// * `grid`: A feasible allocation for that problem, for example computed with an
    /// `InitialBasis`.
    pub fn new(provider: &'provider Balanced<F>, grid: AllocationGrid<F>) -> Self {
        debug_assert_eq!(grid.nr_rows(), provider.nr_rows());
        debug_assert_eq!(grid.nr_columns(), provider.nr_columns());

        Self { provider, grid }
    }

    /// The current basis.
    pub fn grid(&self) -> &AllocationGrid<F> {
        &self.grid
    }

    /// Release the current basis.
    pub fn into_grid(self) -> AllocationGrid<F> {
        self.grid
    }

    /// The problem being solved.
    pub fn provider(&self) -> &'provider Balanced<F> {
        self.provider
    }

    /// Total cost of the current allocation.
    pub fn objective_function_value(&self) -> F {
        self.grid.total_cost()
    }

    /// Whether the basis has fewer cells than a nondegenerate basis would have.
    pub fn is_degenerate(&self) -> bool {
        self.grid.nr_basic() < self.provider.basis_size()
    }

    /// Repair a degenerate basis, see `degeneracy::fix_degenerate_case`.
    pub fn fix_degenerate_case(&mut self) -> Result<usize, SolveError> {
        fix_degenerate_case(&mut self.grid, self.provider)
    }

    /// Closed path of a cell, starting with an empty shipment in that cell.
    pub fn closed_path(&self, row: usize, column: usize) -> ClosedPath<F> {
        let candidate = Shipment::candidate(self.provider.cost(row, column).clone(), row, column);
        ClosedPath::find(&self.grid, candidate)
    }

    /// Consider bringing a non-basic cell into the basis.
    ///
    /// # Return value
    ///
    /// The rotation that would do so, or `None` if the cell has no closed path.
    pub fn evaluate(&self, row: usize, column: usize) -> Option<Rotation<F>> {
        debug_assert!(!self.grid.is_basic(row, column));

        let path = self.closed_path(row, column);
        let leaving = path.leaving()?.clone();
        let cost_change = path.net_cost_change();

        Some(Rotation { path, leaving, cost_change })
    }

    /// Rotate quantities along a closed path.
    ///
    /// The quantity of the leaving cell is added to every `Plus` stone and subtracted from every
    /// `Minus` stone. `Minus` stones that end up at zero leave the basis; the entering cell becomes
    /// basic, even if it receives nothing.
    pub fn bring_into_basis(&mut self, rotation: Rotation<F>) {
        let Rotation { path, leaving, .. } = rotation;
        let amount = leaving.quantity;

        for (role, stone) in path.into_stones() {
            let quantity = match role {
                Role::Plus => stone.quantity + amount.clone(),
                Role::Minus => stone.quantity - amount.clone(),
            };

            if role == Role::Minus && quantity.is_zero() {
                self.grid.remove(stone.row, stone.column);
            } else {
                self.grid.insert(Shipment { quantity, ..stone });
            }
        }
    }
}

/// Check that the basis is complete and that no basic cell ships a negative quantity.
///
/// Row and column totals are not compared, because they are only exact for exact number types.
pub(crate) fn is_in_basic_solution_state<F: Quantity>(tableau: &Tableau<F>) -> bool {
    tableau.grid.nr_rows() == tableau.provider.nr_rows()
        && tableau.grid.nr_columns() == tableau.provider.nr_columns()
        && tableau.grid.nr_basic() >= tableau.provider.basis_size()
        && tableau.grid.is_nonnegative()
}

/// Check that the allocation ships exactly all supply and meets exactly all demand.
#[cfg(test)]
pub(crate) fn is_in_basic_feasible_solution_state<F: Quantity>(tableau: &Tableau<F>) -> bool {
    tableau.grid.satisfies(tableau.provider.supply(), tableau.provider.demand())
        && tableau.grid.nr_basic() <= tableau.provider.basis_size()
}

/// A change of basis along a closed path.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation<F> {
    /// Cycle starting at the entering cell.
    pub path: ClosedPath<F>,
    /// `Minus` stone with the smallest quantity.
    pub leaving: Shipment<F>,
    /// Net unit cost change of the path.
    pub cost_change: F,
}

impl<F: Quantity> Rotation<F> {
    /// The cell entering the basis.
    pub fn entering(&self) -> &Shipment<F> {
        &self.path.stones()[0]
    }

    /// Whether rotating along this path reduces the total cost per unit moved.
    pub fn is_improving(&self) -> bool {
        self.cost_change < F::zero()
    }

    /// Change in total cost when this rotation is applied.
    pub fn total_cost_change(&self) -> F {
        self.cost_change.clone() * self.leaving.quantity.clone()
    }
}

impl<F: Quantity + Display> Display for Rotation<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.path.stones().iter()
            .map(|stone| format!("({}, {})", stone.row, stone.column))
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(
            f,
            "{} moving {} at {} per unit",
            cells, self.leaving.quantity, self.cost_change,
        )
    }
}
