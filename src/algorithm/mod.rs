//! # Algorithms
//!
//! Solving a transportation problem happens in three steps. The problem is balanced, an initial
//! basis is constructed and that basis is improved with the stepping stone method until no closed
//! path reduces the total cost.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::algorithm::initial::{InitialBasis, NorthWestCorner};
use crate::algorithm::stepping_stone::strategy::pivot_rule::{PivotRule, SteepestDescent};
use crate::algorithm::stepping_stone::tableau::Tableau;
use crate::data::number_types::traits::Quantity;
use crate::data::transportation::Problem;
use crate::data::transportation::solution::Solution;

pub mod initial;
pub mod stepping_stone;

/// Limits on the work done while solving.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Configuration {
    /// Maximum number of rotations. Without a limit, the method runs until it converges.
    pub rotation_limit: Option<usize>,
}

/// Solve a transportation problem with the default strategies.
///
/// The initial basis is constructed with the northwest corner rule and the cell with the most
/// negative unit cost change enters the basis in each iteration.
pub fn solve<F: Quantity>(problem: Problem<F>) -> Result<Solution<F>, SolveError> {
    solve_with::<_, NorthWestCorner, SteepestDescent>(problem, &Configuration::default())
}

/// Solve a transportation problem.
///
/// # Arguments
///
/// * `problem`: Instance to solve, total supply and total demand need not be equal.
/// * `configuration`: Limits on the work done.
///
/// # Return value
///
/// The balanced problem together with an allocation that no closed path improves.
///
/// # Errors
///
/// When a degenerate basis can't be repaired, or when the rotation limit is reached.
pub fn solve_with<F, IB, PR>(
    problem: Problem<F>,
    configuration: &Configuration,
) -> Result<Solution<F>, SolveError>
where
    F: Quantity,
    IB: InitialBasis,
    PR: PivotRule,
{
    let balanced = problem.balance();

    let initial = IB::allocate(&balanced);
    let mut tableau = Tableau::new(&balanced, initial);
    let nr_rotations = stepping_stone::optimize::<_, PR>(&mut tableau, configuration)?;
    let grid = tableau.into_grid();

    Ok(Solution::new(balanced, grid, nr_rotations))
}

/// The stepping stone method failed to produce a solution.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The basis has too few cells, but every non-basic cell already lies on a closed path.
    UnrepairableDegeneracy {
        /// Number of basic cells found.
        nr_basic: usize,
        /// Number of basic cells a nondegenerate basis has.
        expected: usize,
    },
    /// The configured maximum number of rotations was applied, and the basis was still not
    /// optimal.
    RotationLimit(usize),
}

impl Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveError::UnrepairableDegeneracy { nr_basic, expected } => write!(
                f,
                "Could not repair degenerate basis with {} of {} cells",
                nr_basic, expected,
            ),
            SolveError::RotationLimit(limit) => write!(
                f,
                "Not optimal after the maximum of {} rotations",
                limit,
            ),
        }
    }
}

impl Error for SolveError {}

#[cfg(test)]
mod test {
    use num::BigRational;
    use num::rational::Ratio;

    use crate::algorithm::{Configuration, solve, solve_with, SolveError};
    use crate::algorithm::initial::{LeastCost, NorthWestCorner};
    use crate::algorithm::stepping_stone::strategy::pivot_rule::{FirstProfitable, SteepestDescent};
    use crate::data::transportation::Problem;
    use crate::tests::instances;

    #[test]
    fn scenario() {
        let solution = solve(instances::two_by_two()).unwrap();

        assert_eq!(solution.total_cost(), 1400_f64);
        assert_eq!(solution.nr_rotations(), 1);
        assert_eq!(solution.quantity(0, 0), 0_f64);
        assert_eq!(solution.quantity(0, 1), 300_f64);
        assert_eq!(solution.quantity(1, 0), 250_f64);
        assert_eq!(solution.quantity(1, 1), 150_f64);
    }

    #[test]
    fn degenerate() {
        let solution = solve(instances::degenerate()).unwrap();

        assert_eq!(solution.total_cost(), 1000_f64);
        assert_eq!(solution.quantity(0, 1), 300_f64);
        assert_eq!(solution.quantity(1, 0), 300_f64);
        assert_eq!(solution.quantity(1, 1), 100_f64);
    }

    #[test]
    fn three_by_three() {
        let solution = solve(instances::three_by_three()).unwrap();

        assert_eq!(solution.total_cost(), 128_f64);
        assert_eq!(solution.nr_rotations(), 1);
        assert_eq!(solution.quantity(0, 0), 9_f64);
        assert_eq!(solution.quantity(0, 1), 5_f64);
        assert_eq!(solution.quantity(1, 1), 10_f64);
        assert_eq!(solution.quantity(2, 0), 3_f64);
        assert_eq!(solution.quantity(2, 2), 12_f64);
    }

    #[test]
    fn unbalanced() {
        let surplus = solve(instances::surplus()).unwrap();
        assert_eq!(surplus.total_cost(), 150_f64);
        assert_eq!(surplus.unused_supply(), vec![0_f64, 0_f64, 25_f64]);

        let shortage = solve(instances::shortage()).unwrap();
        assert_eq!(shortage.total_cost(), 184_f64);
        assert_eq!(shortage.unmet_demand(), vec![0_f64, 0_f64, 10_f64, 5_f64]);
    }

    #[test]
    fn strategies_agree() {
        let configuration = Configuration::default();
        for problem in [
            instances::two_by_two(),
            instances::degenerate(),
            instances::three_by_three(),
            instances::surplus(),
            instances::shortage(),
            instances::rule_sensitive(),
        ] {
            let expected = solve(problem.clone()).unwrap().total_cost();

            let results = [
                solve_with::<_, NorthWestCorner, FirstProfitable>(problem.clone(), &configuration),
                solve_with::<_, LeastCost, SteepestDescent>(problem.clone(), &configuration),
                solve_with::<_, LeastCost, FirstProfitable>(problem, &configuration),
            ];
            for result in results {
                assert_eq!(result.unwrap().total_cost(), expected);
            }
        }
    }

    #[test]
    fn rotation_limit() {
        let configuration = Configuration { rotation_limit: Some(1) };

        let result = solve_with::<_, NorthWestCorner, SteepestDescent>(
            instances::shortage(),
            &configuration,
        );
        assert_eq!(result.unwrap_err(), SolveError::RotationLimit(1));

        // Enough when the limit isn't reached
        let result = solve_with::<_, NorthWestCorner, SteepestDescent>(
            instances::two_by_two(),
            &configuration,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn exact() {
        let rational = |values: &[i64]| {
            values.iter().map(|&value| Ratio::from_integer(value)).collect::<Vec<_>>()
        };
        let problem = Problem::new(
            rational(&[300, 400, 500]),
            rational(&[250, 350, 400, 200]),
            vec![rational(&[3, 1, 7, 4]), rational(&[2, 6, 5, 9]), rational(&[8, 3, 3, 2])],
        ).unwrap();
        let solution = solve(problem).unwrap();
        assert_eq!(solution.total_cost(), Ratio::from_integer(2850));
        assert_eq!(solution.nr_rotations(), 2);

        let big = |value: i64| BigRational::from_integer(value.into());
        let problem = Problem::new(
            vec![big(1), big(2)],
            vec![big(3)],
            vec![vec![big(5)], vec![big(7)]],
        ).unwrap();
        let solution = solve(problem).unwrap();
        assert_eq!(solution.total_cost(), big(19));
    }

    #[test]
    fn fractional_floats() {
        let problem = Problem::new(
            vec![0.1_f64, 0.2],
            vec![0.3],
            vec![vec![1_f64], vec![2_f64]],
        ).unwrap();

        // Row and column totals are off by rounding, which must not stop the method
        for solution in [
            solve(problem.clone()).unwrap(),
            solve_with::<_, LeastCost, FirstProfitable>(problem, &Configuration::default()).unwrap(),
        ] {
            assert!((solution.total_cost() - 0.5).abs() < 1e-12);
            assert!((solution.quantity(0, 0) - 0.1).abs() < 1e-12);
            assert!((solution.quantity(1, 0) - 0.2).abs() < 1e-12);
        }
    }

    #[test]
    fn error_display() {
        let error = SolveError::UnrepairableDegeneracy { nr_basic: 2, expected: 3 };
        assert_eq!(error.to_string(), "Could not repair degenerate basis with 2 of 3 cells");
        assert_eq!(
            SolveError::RotationLimit(10).to_string(),
            "Not optimal after the maximum of 10 rotations",
        );
    }
}
