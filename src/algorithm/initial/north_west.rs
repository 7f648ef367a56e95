//! # Northwest corner rule
use crate::algorithm::initial::InitialBasis;
use crate::data::number_types::traits::{min, Quantity};
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::Balanced;

/// Fill the grid from the top left, one row at a time.
///
/// Each cell receives as much as both its row and its column still allow. When a row runs out of
/// supply, the next row continues at the column where the previous row stopped.
pub struct NorthWestCorner;
impl InitialBasis for NorthWestCorner {
    fn allocate<F: Quantity>(problem: &Balanced<F>) -> AllocationGrid<F> {
        let mut supply = problem.supply().to_vec();
        let mut demand = problem.demand().to_vec();
        let mut grid = AllocationGrid::new(problem.nr_rows(), problem.nr_columns());

        let mut north_west = 0;
        for row in 0..problem.nr_rows() {
            for column in north_west..problem.nr_columns() {
                let quantity = min(supply[row].clone(), demand[column].clone());
                if quantity > F::zero() {
                    let cost = problem.cost(row, column).clone();
                    grid.insert(Shipment::new(quantity.clone(), cost, row, column));

                    supply[row] = supply[row].clone() - quantity.clone();
                    demand[column] = demand[column].clone() - quantity;
                }

                if supply[row].is_zero() {
                    north_west = column;
                    break;
                }
            }
        }

        grid
    }
}
