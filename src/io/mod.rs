//! # Reading of transportation problems
//!
//! This module provides read functionality for the plain text problem format.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use num_traits::FromPrimitive;

use crate::data::number_types::traits::Quantity;
use crate::data::transportation::Problem;
use crate::io::error::ImportError;

pub mod error;
pub mod text;

/// Import a problem from a file.
///
/// The file should be in the format described in the `text` module, its extension is not checked.
///
/// # Errors
///
/// When a file cannot be found or read, when its contents can't be parsed or when they describe an
/// invalid problem.
pub fn import<F: Quantity + FromPrimitive>(file_path: &Path) -> Result<Problem<F>, ImportError> {
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(ImportError::IO)?
        .read_to_string(&mut program)
        .map_err(ImportError::IO)?;

    text::parse(&program)
}
