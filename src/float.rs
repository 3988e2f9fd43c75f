//! IEEE-754 minNum/maxNum.

use num::Float;

/// Lesser of `a` and `b`, ignoring a NaN operand. NaN only if both are NaN.
#[inline]
pub fn fmin<F: Float>(a: F, b: F) -> F {
    a.min(b)
}

/// Greater of `a` and `b`, ignoring a NaN operand. NaN only if both are NaN.
#[inline]
pub fn fmax<F: Float>(a: F, b: F) -> F {
    a.max(b)
}
