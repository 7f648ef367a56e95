//! # Least cost rule
use std::cmp::Ordering;

use itertools::{iproduct, Itertools};

use crate::algorithm::initial::InitialBasis;
use crate::data::number_types::traits::{min, Quantity};
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::Balanced;

/// Fill the cheapest cells first.
///
/// Cells are visited by increasing unit cost, with ties broken in row-major order. Cells of a dummy
/// row or column are visited after all other cells, as their zero cost says nothing about the
/// quality of the allocation. Each cell receives as much as both its row and its column still
/// allow.
///
/// This usually starts closer to the optimum than `NorthWestCorner`.
pub struct LeastCost;
impl InitialBasis for LeastCost {
    fn allocate<F: Quantity>(problem: &Balanced<F>) -> AllocationGrid<F> {
        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let mut grid = AllocationGrid::new(problem.nr_rows(), problem.nr_columns());

        let is_dummy = |row: usize, column: usize| {
            problem.is_dummy_row(row) || problem.is_dummy_column(column)
        };
        // Stable, so equal cells stay in row-major order
        let order = iproduct!(0..problem.nr_rows(), 0..problem.nr_columns())
            .sorted_by(|&(row_a, column_a), &(row_b, column_b)| {
                is_dummy(row_a, column_a).cmp(&is_dummy(row_b, column_b))
                    .then_with(|| {
                        problem.cost(row_a, column_a).partial_cmp(problem.cost(row_b, column_b))
                            .unwrap_or(Ordering::Equal)
                    })
            });

        // Capacities only decrease, so a single pass visits the cheapest open cell each time
        for (row, column) in order {
            let quantity = min(supply[row].clone(), demand[column].clone());
            if quantity > F::zero() {
                let cost = problem.cost(row, column).clone();
                grid.insert(Shipment::new(quantity.clone(), cost, row, column));

                supply[row] = supply[row].clone() - quantity.clone();
                demand[column] = demand[column].clone() - quantity;
            }
        }

        grid
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::initial::{InitialBasis, LeastCost};
    use crate::tests::instances;

    #[test]
    fn two_by_two() {
        let balanced = instances::two_by_two().balance();
        let grid = LeastCost::allocate(&balanced);

        assert_eq!(grid.quantity(0, 1), 300_f64);
        assert_eq!(grid.quantity(1, 0), 250_f64);
        assert_eq!(grid.quantity(1, 1), 150_f64);
        assert!(!grid.is_basic(0, 0));
        assert_eq!(grid.total_cost(), 1400_f64);
        assert!(grid.satisfies(balanced.supply(), balanced.demand()));
    }

    #[test]
    fn dummy_cells_last() {
        let balanced = instances::surplus().balance();
        let grid = LeastCost::allocate(&balanced);

        // The free dummy column would otherwise absorb row 0 entirely
        assert_eq!(
            grid.basic_cells()
                .map(|shipment| (shipment.row, shipment.column, shipment.quantity))
                .collect::<Vec<_>>(),
            vec![(0, 0, 5_f64), (0, 2, 15_f64), (1, 0, 5_f64), (1, 1, 25_f64), (2, 3, 25_f64)],
        );
        assert_eq!(grid.total_cost(), 150_f64);
        assert!(grid.satisfies(balanced.supply(), balanced.demand()));
    }

    #[test]
    fn ties_in_row_major_order() {
        let balanced = instances::problem(&[10, 10], &[10, 10], &[&[1, 1], &[1, 1]]).balance();
        let grid = LeastCost::allocate(&balanced);

        assert_eq!(grid.quantity(0, 0), 10_f64);
        assert_eq!(grid.quantity(1, 1), 10_f64);
        assert_eq!(grid.nr_basic(), 2);
    }
}
