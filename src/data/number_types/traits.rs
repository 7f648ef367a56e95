//! # Traits
//!
//! Shipping quantities and unit costs are both values of a single number type. Only the additive
//! structure, a multiplication (to compute total costs) and an ordering are needed; there is no
//! division anywhere in the stepping stone method.
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// A number type that quantities and costs can be expressed in.
///
/// Automatically implemented for all types satisfying the trait's bounds, such as `f64`,
/// `num::rational::Ratio<i64>` and `num::BigRational`.
///
/// The ordering is partial so that floats qualify. Values entering the algorithm are validated to
/// be non-negative, which excludes `NaN`.
pub trait Quantity:
    Zero +
    PartialOrd +
    Add<Self, Output=Self> +
    Sub<Self, Output=Self> +
    Mul<Self, Output=Self> +
    Clone +
    Debug
{
}
impl<T> Quantity for T
where
    T: Zero + PartialOrd + Add<T, Output=T> + Sub<T, Output=T> + Mul<T, Output=T> + Clone + Debug,
{
}

/// The smaller of two values, preferring the first when they compare equal.
pub fn min<F: PartialOrd>(left: F, right: F) -> F {
    if right < left {
        right
    } else {
        left
    }
}

/// Sum a sequence of values, starting from zero.
pub fn total<'a, F: Quantity + 'a>(values: impl IntoIterator<Item = &'a F>) -> F {
    values.into_iter().fold(F::zero(), |sum, value| sum + value.clone())
}
