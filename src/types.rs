//! Types and traits for real numbers
use ndarray::ScalarOperand;
use num_traits::{Float, FloatConst};
use std::fmt::Debug;
use std::ops::{AddAssign, MulAssign, SubAssign};

/// Real type, used throughout the profile builders
pub trait Real: Float + FloatConst + ScalarOperand + Debug + AddAssign + SubAssign + MulAssign {}

impl<T> Real for T where
    T: Float + FloatConst + ScalarOperand + Debug + AddAssign + SubAssign + MulAssign
{
}

/// Cast a literal constant into a generic float.
///
/// # Panics
/// Never for the float types implementing `Real`.
pub(crate) fn lit<A: Real>(x: f64) -> A {
    A::from(x).unwrap()
}
