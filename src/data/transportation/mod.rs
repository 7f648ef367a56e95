//! # Transportation problems
//!
//! A set of sources with a finite supply each, a set of destinations with a finite demand each and
//! a cost per unit shipped for every source-destination pair. A solution ships all supply and meets
//! all demand at minimal total cost.
//!
//! Problems are represented in three stages:
//!
//! * `Problem`: the validated instance as it was provided.
//! * `Balanced`: the instance with a dummy node appended such that total supply equals total
//! demand.
//! * `Solution`: the balanced instance together with the final allocation.
use crate::data::number_types::traits::Quantity;
use crate::io::error::InconsistencyError;

pub mod allocation;
pub mod balance;
pub mod solution;

/// A transportation problem as provided by the user.
///
/// Total supply and total demand need not be equal; see `Problem::balance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem<F> {
    /// Capacity of each source.
    supply: Vec<F>,
    /// Requirement of each destination.
    demand: Vec<F>,
    /// Cost per unit shipped, indexed by source and then by destination.
    costs: Vec<Vec<F>>,
}

impl<F: Quantity> Problem<F> {
    /// Create a new problem, checking that it is well formed.
    ///
    /// # Arguments
    ///
    /// * `supply`: Capacity per source.
    /// * `demand`: Requirement per destination.
    /// * `costs`: A row of unit costs for each source, each row having a value for each
    /// destination.
    ///
    /// # Errors
    ///
    /// When there are no sources or no destinations, when the cost matrix doesn't match those
    /// dimensions, or when any value is negative (or not comparable to zero at all).
    pub fn new(
        supply: Vec<F>,
        demand: Vec<F>,
        costs: Vec<Vec<F>>,
    ) -> Result<Self, InconsistencyError> {
        if supply.is_empty() {
            return Err(InconsistencyError::new("A problem needs at least one source"));
        }
        if demand.is_empty() {
            return Err(InconsistencyError::new("A problem needs at least one destination"));
        }
        if costs.len() != supply.len() {
            return Err(InconsistencyError::new(format!(
                "Expected a row of costs for each of the {} sources, found {} rows",
                supply.len(), costs.len(),
            )));
        }
        if let Some((i, row)) = costs.iter().enumerate().find(|(_, row)| row.len() != demand.len()) {
            return Err(InconsistencyError::new(format!(
                "Expected {} costs for source {}, found {}",
                demand.len(), i, row.len(),
            )));
        }

        let is_negative = |value: &F| !(value >= &F::zero());
        if let Some(i) = supply.iter().position(is_negative) {
            return Err(InconsistencyError::new(format!("Supply of source {} is negative", i)));
        }
        if let Some(j) = demand.iter().position(is_negative) {
            return Err(InconsistencyError::new(format!("Demand of destination {} is negative", j)));
        }
        for (i, row) in costs.iter().enumerate() {
            if let Some(j) = row.iter().position(is_negative) {
                return Err(InconsistencyError::new(format!(
                    "Cost from source {} to destination {} is negative", i, j,
                )));
            }
        }

        Ok(Self { supply, demand, costs })
    }

    /// Number of sources.
    pub fn nr_sources(&self) -> usize {
        self.supply.len()
    }

    /// Number of destinations.
    pub fn nr_destinations(&self) -> usize {
        self.demand.len()
    }

    /// Capacity per source.
    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    /// Requirement per destination.
    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    /// Cost of shipping a single unit from a source to a destination.
    pub fn cost(&self, source: usize, destination: usize) -> &F {
        debug_assert!(source < self.nr_sources() && destination < self.nr_destinations());

        &self.costs[source][destination]
    }
}
