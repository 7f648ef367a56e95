//! # Plain text problems
//!
//! A problem is a sequence of values separated by whitespace. Line breaks carry no meaning.
//!
//! 1. The number of sources and the number of destinations.
//! 2. The supply of each source, as integers.
//! 3. The demand of each destination, as integers.
//! 4. The unit costs, one row per source with a value per destination, as reals.
//!
//! For example, two sources and three destinations:
//!
//! ```text
//! 2 3
//! 20 30
//! 10 25 15
//! 2 3 1
//! 5 4 8
//! ```
use num_traits::FromPrimitive;

use crate::data::number_types::traits::Quantity;
use crate::data::transportation::Problem;
use crate::io::error::{FileLocation, ImportError, ParseError};

/// A value in the text, together with the line it was found on.
type Token<'a> = (FileLocation<'a>, &'a str);

/// Parse a problem in string form.
///
/// # Arguments
///
/// * `program`: The full text of the problem.
///
/// # Errors
///
/// A `ParseError` when values are missing, can't be read as numbers or when there are values left
/// after the costs. An `InconsistencyError` when the numbers don't describe a valid problem, for
/// example because a supply is negative.
pub fn parse<F: Quantity + FromPrimitive>(program: &str) -> Result<Problem<F>, ImportError> {
    let mut reader = Reader::new(into_tokens(program));

    let nr_sources = reader.count("the number of sources")
        .map_err(|error| ParseError::with_cause("Could not read the dimensions", error))?;
    let nr_destinations = reader.count("the number of destinations")
        .map_err(|error| ParseError::with_cause("Could not read the dimensions", error))?;

    let supply = (0..nr_sources)
        .map(|i| reader.integer(&format!("the supply of source {}", i)))
        .collect::<Result<Vec<F>, _>>()
        .map_err(|error| ParseError::with_cause("Could not read the supplies", error))?;
    let demand = (0..nr_destinations)
        .map(|j| reader.integer(&format!("the demand of destination {}", j)))
        .collect::<Result<Vec<F>, _>>()
        .map_err(|error| ParseError::with_cause("Could not read the demands", error))?;

    let mut costs = Vec::new();
    for i in 0..nr_sources {
        let row = (0..nr_destinations)
            .map(|j| reader.real(&format!("the cost from source {} to destination {}", i, j)))
            .collect::<Result<Vec<F>, _>>()
            .map_err(|error| ParseError::with_cause("Could not read the costs", error))?;
        costs.push(row);
    }

    if let Some((location, token)) = reader.tokens.next() {
        return Err(ParseError::with_file_location(
            format!("Unexpected value \"{}\" after the costs", token),
            location,
        ).into());
    }

    Ok(Problem::new(supply, demand, costs)?)
}

/// Split a text into values, remembering the line of each.
fn into_tokens(program: &str) -> impl Iterator<Item = Token<'_>> {
    program.lines()
        .enumerate()
        .map(|(number, line)| (number as u64 + 1, line)) // Count from 1
        .flat_map(|(number, line)| {
            line.split_whitespace().map(move |token| ((number, line), token))
        })
}

/// Reads values one at a time.
struct Reader<'a, I> {
    tokens: I,
    /// Line of the most recently read value, to point at when the text ends too soon.
    last: Option<FileLocation<'a>>,
}

impl<'a, I: Iterator<Item = Token<'a>>> Reader<'a, I> {
    fn new(tokens: I) -> Self {
        Self { tokens, last: None }
    }

    fn next(&mut self, what: &str) -> Result<Token<'a>, ParseError> {
        match self.tokens.next() {
            Some(token) => {
                self.last = Some(token.0);
                Ok(token)
            },
            None => {
                let description = format!("Expected {}, but the text ended", what);
                Err(match self.last {
                    Some(location) => ParseError::with_file_location(description, location),
                    None => ParseError::new(description),
                })
            },
        }
    }

    fn count(&mut self, what: &str) -> Result<usize, ParseError> {
        let (location, token) = self.next(what)?;
        token.parse().map_err(|_| ParseError::with_file_location(
            format!("Expected {}, found \"{}\"", what, token),
            location,
        ))
    }

    fn integer<F: FromPrimitive>(&mut self, what: &str) -> Result<F, ParseError> {
        let (location, token) = self.next(what)?;
        token.parse::<i64>().ok()
            .and_then(F::from_i64)
            .ok_or_else(|| ParseError::with_file_location(
                format!("Expected an integer as {}, found \"{}\"", what, token),
                location,
            ))
    }

    fn real<F: FromPrimitive>(&mut self, what: &str) -> Result<F, ParseError> {
        let (location, token) = self.next(what)?;
        token.parse::<f64>().ok()
            .and_then(F::from_f64)
            .ok_or_else(|| ParseError::with_file_location(
                format!("Expected a number as {}, found \"{}\"", what, token),
                location,
            ))
    }
}
