//! # Closed paths
//!
//! Basic cells can be seen as the edges of a bipartite graph, with the rows as one class of nodes
//! and the columns as the other. In a nondegenerate basis, this graph is a spanning tree. Adding the
//! edge of a non-basic cell creates exactly one cycle: the closed path of that cell.
//!
//! The cycle is extracted by pruning. Starting from all basic cells plus the candidate, any cell
//! that doesn't share its row with another remaining cell, or doesn't share its column with another
//! remaining cell, can't be on a cycle and is removed. This is repeated until nothing changes. What
//! remains is the cycle through the candidate, if there is one.
use enum_map::{Enum, EnumMap};
use index_utils::remove_indices;

use crate::data::number_types::traits::Quantity;
use crate::data::transportation::allocation::{AllocationGrid, Shipment};

/// Whether the quantity of a stone on a closed path increases or decreases when rotating.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    /// The quantity increases; the unit cost is added.
    Plus,
    /// The quantity decreases; the unit cost is subtracted.
    Minus,
}

impl Role {
    /// Role of the stone at a given position on a path.
    fn at(index: usize) -> Self {
        if index % 2 == 0 {
            Role::Plus
        } else {
            Role::Minus
        }
    }
}

/// A cycle of shipments starting with a candidate cell.
///
/// Consecutive stones share a row or a column, alternately: the first and second stone share a row,
/// the second and third a column, and so on. The last stone shares a column with the first. Stones
/// at even positions have the `Plus` role, stones at odd positions the `Minus` role.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedPath<F> {
    stones: Vec<Shipment<F>>,
}

impl<F: Quantity> ClosedPath<F> {
    /// Find the closed path of a cell.
    ///
    /// # Arguments
    ///
    /// * `grid`: The current basis.
    /// * `candidate`: Shipment in the cell to find a closed path for. If this cell is basic, its
    /// shipment in the grid is ignored.
    ///
    /// # Return value
    ///
    /// The cycle, starting with the candidate, or an empty path if the candidate is not on any
    /// cycle.
    pub fn find(grid: &AllocationGrid<F>, candidate: Shipment<F>) -> Self {
        let (row, column) = (candidate.row, candidate.column);
        let mut members = Vec::with_capacity(grid.nr_basic() + 1);
        members.push(candidate);
        members.extend(grid.basic_cells().filter(|shipment| !shipment.is_at(row, column)).cloned());

        loop {
            let to_remove = (0..members.len())
                .filter(|&i| {
                    let (row_neighbor, column_neighbor) = neighbors(&members[i], &members);
                    row_neighbor.is_none() || column_neighbor.is_none()
                })
                .collect::<Vec<_>>();
            if to_remove.is_empty() {
                break;
            }

            remove_indices(&mut members, &to_remove);
        }

        // Removal preserves order, so the candidate would still be at the front
        let stones = match members.first() {
            Some(first) if first.is_at(row, column) => order(&members).unwrap_or_default(),
            _ => Vec::new(),
        };

        Self { stones }
    }

    /// Whether the candidate is on a cycle at all.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Number of stones, including the candidate.
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// The stones in path order, starting with the candidate.
    pub fn stones(&self) -> &[Shipment<F>] {
        &self.stones
    }

    /// The stones in path order, together with their role.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &Shipment<F>)> {
        self.stones.iter().enumerate().map(|(i, stone)| (Role::at(i), stone))
    }

    /// Consume the path, yielding the stones in order together with their role.
    pub fn into_stones(self) -> impl Iterator<Item = (Role, Shipment<F>)> {
        self.stones.into_iter().enumerate().map(|(i, stone)| (Role::at(i), stone))
    }

    /// Change in total cost per unit rotated along this path.
    ///
    /// The sum of the unit costs of the `Plus` stones minus the sum of the unit costs of the `Minus`
    /// stones. Negative means that rotating along this path reduces the total cost.
    pub fn net_cost_change(&self) -> F {
        let mut totals = EnumMap::from_fn(|_| F::zero());
        for (role, stone) in self.iter() {
            totals[role] = totals[role].clone() + stone.cost_per_unit.clone();
        }

        totals[Role::Plus].clone() - totals[Role::Minus].clone()
    }

    /// The `Minus` stone with the smallest quantity.
    ///
    /// Its quantity bounds how much can be rotated along the path. When several stones share the
    /// smallest quantity, the first in path order is returned.
    pub fn leaving(&self) -> Option<&Shipment<F>> {
        self.iter()
            .filter(|&(role, _)| role == Role::Minus)
            .map(|(_, stone)| stone)
            .fold(None, |least, stone| match least {
                Some(least) if !(stone.quantity < least.quantity) => Some(least),
                _ => Some(stone),
            })
    }
}

/// Find the first other member sharing the row, and the first other member sharing the column.
fn neighbors<'a, F>(
    shipment: &Shipment<F>,
    members: &'a [Shipment<F>],
) -> (Option<&'a Shipment<F>>, Option<&'a Shipment<F>>) {
    let row_neighbor = members.iter()
        .find(|other| other.row == shipment.row && other.column != shipment.column);
    let column_neighbor = members.iter()
        .find(|other| other.column == shipment.column && other.row != shipment.row);

    (row_neighbor, column_neighbor)
}

/// Walk the cycle starting at the first member, alternating between moving along a row and along a
/// column.
///
/// Every member should have both a row and a column neighbor.
fn order<F: Clone>(members: &[Shipment<F>]) -> Option<Vec<Shipment<F>>> {
    let mut stones = Vec::with_capacity(members.len());

    let mut current = members.first()?;
    for i in 0..members.len() {
        stones.push(current.clone());
        if stones.len() == members.len() {
            break;
        }

        let (row_neighbor, column_neighbor) = neighbors(current, members);
        current = match Role::at(i) {
            Role::Plus => row_neighbor,
            Role::Minus => column_neighbor,
        }?;
    }

    Some(stones)
}
