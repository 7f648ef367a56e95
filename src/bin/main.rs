use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use num::BigRational;
use num_traits::FromPrimitive;

use stepping_stone::algorithm::{Configuration, solve_with, SolveError};
use stepping_stone::algorithm::initial::{LeastCost, NorthWestCorner};
use stepping_stone::algorithm::stepping_stone::strategy::pivot_rule::{FirstProfitable, SteepestDescent};
use stepping_stone::data::number_types::traits::Quantity;
use stepping_stone::data::transportation::Problem;
use stepping_stone::data::transportation::solution::Solution;
use stepping_stone::io::import;

/// A transportation problem solver written in rust.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Files containing the problem descriptions
    #[arg(required = true)]
    problem_files: Vec<PathBuf>,

    /// Rule used to construct the initial allocation
    #[arg(long, value_enum, default_value_t = Initial::NorthWestCorner)]
    initial: Initial,

    /// Rule used to select the cell entering the basis
    #[arg(long, value_enum, default_value_t = Rule::SteepestDescent)]
    rule: Rule,

    /// Give up after this many rotations
    #[arg(long)]
    rotation_limit: Option<usize>,

    /// Compute with arbitrary precision rationals instead of floating point numbers
    #[arg(long)]
    exact: bool,

    /// Log every rotation
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Initial {
    NorthWestCorner,
    LeastCost,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rule {
    SteepestDescent,
    FirstProfitable,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let level = if opts.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let mut nr_failed = 0;
    for path in &opts.problem_files {
        let result = if opts.exact {
            run::<BigRational>(path, &opts)
        } else {
            run::<f64>(path, &opts)
        };

        if let Err(error) = result {
            eprintln!("{:#}", error);
            nr_failed += 1;
        }
    }

    if nr_failed > 0 {
        bail!("{} of {} problems could not be solved", nr_failed, opts.problem_files.len());
    }

    Ok(())
}

fn run<F: Quantity + FromPrimitive + Display>(path: &Path, opts: &Opts) -> anyhow::Result<()> {
    println!("Reading problem file: \"{}\"...", path.display());
    let problem = import::<F>(path)
        .with_context(|| format!("Couldn't read problem file \"{}\"", path.display()))?;

    println!("Solving...");
    let solution = solve(problem, opts)
        .with_context(|| format!("Couldn't solve problem \"{}\"", path.display()))?;

    println!("Solution computed after {} rotations:", solution.nr_rotations());
    println!("{}", solution);

    Ok(())
}

fn solve<F: Quantity>(problem: Problem<F>, opts: &Opts) -> Result<Solution<F>, SolveError> {
    let configuration = Configuration { rotation_limit: opts.rotation_limit };

    match (opts.initial, opts.rule) {
        (Initial::NorthWestCorner, Rule::SteepestDescent) => {
            solve_with::<_, NorthWestCorner, SteepestDescent>(problem, &configuration)
        },
        (Initial::NorthWestCorner, Rule::FirstProfitable) => {
            solve_with::<_, NorthWestCorner, FirstProfitable>(problem, &configuration)
        },
        (Initial::LeastCost, Rule::SteepestDescent) => {
            solve_with::<_, LeastCost, SteepestDescent>(problem, &configuration)
        },
        (Initial::LeastCost, Rule::FirstProfitable) => {
            solve_with::<_, LeastCost, FirstProfitable>(problem, &configuration)
        },
    }
}
