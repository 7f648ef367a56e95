//! Three sources and four destinations.
//!
//! From https://rosettacode.org/wiki/Transportation_problem
use num::rational::Ratio;

use crate::algorithm::{Configuration, solve_with};
use crate::algorithm::initial::{InitialBasis, NorthWestCorner};
use crate::algorithm::stepping_stone::optimize;
use crate::algorithm::stepping_stone::strategy::pivot_rule::SteepestDescent;
use crate::algorithm::stepping_stone::tableau::{is_in_basic_feasible_solution_state, Tableau};
use crate::data::transportation::allocation::{AllocationGrid, Shipment};
use crate::data::transportation::balance::Balanced;
use crate::data::transportation::Problem;
use crate::io::text::parse;

type T = Ratio<i64>;

#[test]
fn conversion_pipeline() {
    let input = TEXT_LITERAL_STRING;

    // Text
    let problem_computed = parse::<T>(input).unwrap();
    assert_eq!(problem_computed, problem());

    // Balanced form
    let balanced_computed = problem_computed.balance();
    assert_eq!(balanced_computed, balanced_form());
    assert_eq!(balanced_computed.dummy(), None);

    // Initial allocation
    let initial_computed = NorthWestCorner::allocate(&balanced_computed);
    assert_eq!(initial_computed, initial_allocation());
    assert_eq!(initial_computed.total_cost(), T::from_integer(4400));

    // Optimal allocation
    let mut tableau = Tableau::new(&balanced_computed, initial_computed);
    let result = optimize::<_, SteepestDescent>(&mut tableau, &Configuration::default());
    assert_eq!(result, Ok(2));
    assert!(is_in_basic_feasible_solution_state(&tableau));
    assert_eq!(tableau.objective_function_value(), T::from_integer(2850));
    assert_eq!(tableau.into_grid(), optimal_allocation());
}

#[test]
fn solve() {
    let solution = solve_with::<_, NorthWestCorner, SteepestDescent>(
        parse::<T>(TEXT_LITERAL_STRING).unwrap(),
        &Configuration::default(),
    ).unwrap();

    assert_eq!(solution.total_cost(), T::from_integer(2850));
    assert_eq!(solution.grid(), &optimal_allocation());
    assert_eq!(solution.to_string(), SOLUTION_LITERAL_STRING);
}

const TEXT_LITERAL_STRING: &str = "3 4
300 400 500
250 350 400 200
3 1 7 4
2 6 5 9
8 3 3 2
";

const SOLUTION_LITERAL_STRING: &str = "  - 300   -   -
250   - 150   -
  -  50 250 200

Total cost: 2850
source 0 ships 300 units to destination 1
source 1 ships 250 units to destination 0
source 1 ships 150 units to destination 2
source 2 ships 50 units to destination 1
source 2 ships 250 units to destination 2
source 2 ships 200 units to destination 3
";

const COSTS: [[i64; 4]; 3] = [[3, 1, 7, 4], [2, 6, 5, 9], [8, 3, 3, 2]];

fn integers(values: &[i64]) -> Vec<T> {
    values.iter().map(|&value| T::from_integer(value)).collect()
}

fn grid(allocation: &[(usize, usize, i64)]) -> AllocationGrid<T> {
    let mut grid = AllocationGrid::new(3, 4);
    for &(row, column, quantity) in allocation {
        grid.insert(Shipment::new(
            T::from_integer(quantity),
            T::from_integer(COSTS[row][column]),
            row,
            column,
        ));
    }
    grid
}

/// Build the expected `Problem` instance, corresponding to the text.
fn problem() -> Problem<T> {
    Problem::new(
        integers(&[300, 400, 500]),
        integers(&[250, 350, 400, 200]),
        COSTS.iter().map(|row| integers(row)).collect(),
    ).unwrap()
}

/// Totals are equal, so nothing is appended.
fn balanced_form() -> Balanced<T> {
    problem().balance()
}

fn initial_allocation() -> AllocationGrid<T> {
    grid(&[
        (0, 0, 250), (0, 1, 50),
        (1, 1, 300), (1, 2, 100),
        (2, 2, 300), (2, 3, 200),
    ])
}

fn optimal_allocation() -> AllocationGrid<T> {
    grid(&[
        (0, 1, 300),
        (1, 0, 250), (1, 2, 150),
        (2, 1, 50), (2, 2, 250), (2, 3, 200),
    ])
}
