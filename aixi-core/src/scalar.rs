//! Numeric abstraction for formula code
//!
//! Formulas are written once against `Scalar` so any type that supports the
//! few operations they need can be evaluated through them, including
//! differentiable types like `Dual`.

use num_traits::{One, Zero};
use std::ops::{Add, Mul, Sub};

/// Scalar type a formula can be evaluated over
pub trait Scalar:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Zero + One
{
    /// Lift a constant into this scalar type
    fn from_f64(v: f64) -> Self;

    fn sin(self) -> Self;
}

impl Scalar for f64 {
    fn from_f64(v: f64) -> Self {
        v
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }
}

impl Scalar for f32 {
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    fn sin(self) -> Self {
        f32::sin(self)
    }
}
