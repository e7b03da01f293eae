//! Attribution label formulas
//!
//! Each formula maps up to three feature values to a derived scalar used
//! as synthetic ground truth. All are generic over `Scalar`, so the same
//! code evaluates in `f64`, `f32`, or `Dual` for gradients.
//!
//! Weights are constants, not inputs, and no input domain is enforced.

use aixi_core::Scalar;
use std::f64::consts::PI;

#[inline]
fn c<T: Scalar>(v: f64) -> T {
    T::from_f64(v)
}

/// One term of `ssin`: `weight · sin(π · x / 2)`
pub fn ssin_term<T: Scalar>(weight: f64, x: T) -> T {
    c::<T>(weight) * (c::<T>(PI) * (x * c(0.5))).sin()
}

/// `1/2·sin(π·x1/2) + 1/4·sin(π·x2/2) + 1/6·sin(π·x3/2)`
pub fn ssin<T: Scalar>(x1: T, x2: T, x3: T) -> T {
    ssin_term(1.0 / 2.0, x1) + ssin_term(1.0 / 4.0, x2) + ssin_term(1.0 / 6.0, x3)
}

/// One term of `ssum`: `weight · x`
pub fn ssum_term<T: Scalar>(weight: f64, x: T) -> T {
    c::<T>(weight) * x
}

/// `1/2·x1 + 1/4·x2 + 1/6·x3`
pub fn ssum<T: Scalar>(x1: T, x2: T, x3: T) -> T {
    ssum_term(1.0 / 2.0, x1) + ssum_term(1.0 / 4.0, x2) + ssum_term(1.0 / 6.0, x3)
}

/// `x1 − 0.5·x2`; `x3` is ignored
pub fn discrete<T: Scalar>(x1: T, x2: T, _x3: T) -> T {
    x1 - c::<T>(0.5) * x2
}

/// `(1 + sin(π·x1)) · (1 + 0.25·sin(2π·x2)) · (1 + 0.125·sin(3π·x3))`
pub fn psin<T: Scalar>(x1: T, x2: T, x3: T) -> T {
    (T::one() + (c::<T>(PI) * x1).sin())
        * (T::one() + c::<T>(0.25) * (c::<T>(PI * 2.0) * x2).sin())
        * (T::one() + c::<T>(0.125) * (c::<T>(PI * 3.0) * x3).sin())
}

/// `x1² · sin(2π·x2) + 2·x3`
pub fn int2<T: Scalar>(x1: T, x2: T, x3: T) -> T {
    x1 * x1 * (c::<T>(PI * 2.0) * x2).sin() + c::<T>(2.0) * x3
}
