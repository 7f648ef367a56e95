use num::{BigRational, FromPrimitive};
use num::rational::Ratio;

use stepping_stone::algorithm::{Configuration, solve, solve_with, SolveError};
use stepping_stone::algorithm::initial::{LeastCost, NorthWestCorner};
use stepping_stone::algorithm::stepping_stone::strategy::pivot_rule::{FirstProfitable, SteepestDescent};
use stepping_stone::data::number_types::traits::Quantity;
use stepping_stone::data::transportation::Problem;
use stepping_stone::io::error::ImportError;
use stepping_stone::io::import;

use super::get_test_file_path;

fn read<F: Quantity + FromPrimitive>(name: &str) -> Problem<F> {
    let _ = env_logger::builder().is_test(true).try_init();

    import(&get_test_file_path(name)).unwrap()
}

/// Solve with every combination of strategies, checking that they agree on the optimal cost.
fn optimal_cost<F: Quantity + FromPrimitive>(name: &str) -> F {
    let configuration = Configuration::default();
    let costs = [
        solve_with::<F, NorthWestCorner, SteepestDescent>(read(name), &configuration),
        solve_with::<F, NorthWestCorner, FirstProfitable>(read(name), &configuration),
        solve_with::<F, LeastCost, SteepestDescent>(read(name), &configuration),
        solve_with::<F, LeastCost, FirstProfitable>(read(name), &configuration),
    ].map(|result| result.unwrap().total_cost());

    for cost in &costs[1..] {
        assert_eq!(cost, &costs[0]);
    }
    costs[0].clone()
}

#[test]
fn rosetta() {
    assert_eq!(optimal_cost::<f64>("rosetta"), 2850_f64);
    assert_eq!(optimal_cost::<Ratio<i64>>("rosetta"), Ratio::from_integer(2850));

    let solution = solve(read::<f64>("rosetta")).unwrap();
    assert_eq!(solution.nr_rotations(), 2);
    assert_eq!(solution.shipments().count(), 6);
}

#[test]
fn degenerate() {
    assert_eq!(optimal_cost::<f64>("degenerate"), 1000_f64);

    let solution = solve(read::<f64>("degenerate")).unwrap();
    assert_eq!(solution.quantity(0, 0), 0_f64);
    assert_eq!(solution.quantity(0, 1), 300_f64);
    assert_eq!(solution.quantity(1, 0), 300_f64);
    assert_eq!(solution.quantity(1, 1), 100_f64);
}

#[test]
fn surplus() {
    assert_eq!(optimal_cost::<f64>("surplus"), 150_f64);

    let solution = solve(read::<f64>("surplus")).unwrap();
    assert_eq!(solution.nr_rotations(), 3);
    assert_eq!(solution.unused_supply(), vec![0_f64, 0_f64, 25_f64]);
    assert_eq!(solution.unmet_demand(), vec![0_f64; 3]);
}

#[test]
fn shortage() {
    assert_eq!(optimal_cost::<f64>("shortage"), 184_f64);

    let solution = solve(read::<f64>("shortage")).unwrap();
    assert_eq!(solution.unused_supply(), vec![0_f64; 3]);
    assert_eq!(solution.unmet_demand(), vec![0_f64, 0_f64, 10_f64, 5_f64]);
}

#[test]
fn fractional() {
    let expected = BigRational::new(147.into(), 4.into());
    assert_eq!(optimal_cost::<BigRational>("fractional"), expected);
    assert_eq!(optimal_cost::<f64>("fractional"), 36.75_f64);

    let solution = solve(read::<BigRational>("fractional")).unwrap();
    assert_eq!(solution.nr_rotations(), 1);
    assert_eq!(
        solution.unused_supply(),
        vec![BigRational::from_integer(2.into()), BigRational::from_integer(3.into())],
    );
}

#[test]
fn rotation_limit() {
    let configuration = Configuration { rotation_limit: Some(3) };
    let result = solve_with::<f64, NorthWestCorner, SteepestDescent>(
        read("shortage"),
        &configuration,
    );
    assert_eq!(result.unwrap_err(), SolveError::RotationLimit(3));
}

#[test]
fn trailing() {
    match import::<f64>(&get_test_file_path("trailing")) {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(6)),
        _ => panic!("Expected a parse error"),
    }
}

#[test]
fn missing() {
    let result = import::<f64>(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(ImportError::IO(_))));
}
