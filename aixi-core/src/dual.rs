//! Forward-mode dual numbers
//!
//! A dual number `re + eps·ε` with `ε² = 0`. Evaluating `f(x + ε)` yields
//! `f(x) + f'(x)·ε`, so derivatives fall out of ordinary evaluation.

use crate::Scalar;
use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dual {
    /// Primal value
    pub re: f64,
    /// Tangent (derivative) part
    pub eps: f64,
}

impl Dual {
    pub const fn new(re: f64, eps: f64) -> Self {
        Self { re, eps }
    }

    /// A constant: zero tangent
    pub const fn constant(re: f64) -> Self {
        Self { re, eps: 0.0 }
    }

    /// The independent variable being differentiated against
    pub const fn variable(re: f64) -> Self {
        Self { re, eps: 1.0 }
    }
}

impl Add for Dual {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.eps + rhs.eps)
    }
}

impl Sub for Dual {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.eps - rhs.eps)
    }
}

impl Mul for Dual {
    type Output = Self;

    // Product rule
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.re * rhs.re, self.re * rhs.eps + self.eps * rhs.re)
    }
}

impl Neg for Dual {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.eps)
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.eps == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl Scalar for Dual {
    fn from_f64(v: f64) -> Self {
        Self::constant(v)
    }

    fn sin(self) -> Self {
        Self::new(self.re.sin(), self.re.cos() * self.eps)
    }
}

/// Gradient of a three-input scalar function at `x`, one forward pass per input
pub fn gradient3(f: impl Fn(Dual, Dual, Dual) -> Dual, x: [f64; 3]) -> [f64; 3] {
    let mut grad = [0.0; 3];
    for (i, g) in grad.iter_mut().enumerate() {
        let seed = |j: usize| if i == j { Dual::variable(x[j]) } else { Dual::constant(x[j]) };
        *g = f(seed(0), seed(1), seed(2)).eps;
    }
    grad
}
