//! Two-operand minimum and maximum. Operands are taken by value, so each
//! operand expression runs once.
//!
//! Both operands must be the same type:
//!
//! ```compile_fail
//! let _ = minmax::min(1u8, 1u16);
//! ```
//!
//! ```compile_fail
//! let _ = minmax::max(1i32, 1i64);
//! ```
//!
//! An unordered pair (NaN on either side) yields the second operand. Use
//! [`fmin`](crate::float::fmin) and [`fmax`](crate::float::fmax) to ignore NaN.

use log::*;
use num::traits::{AsPrimitive, NumCast, ToPrimitive};

use crate::error::{CoercionError, Operand};

/// Returns `x` if `x < y`, otherwise `y`.
#[inline]
pub fn min<T: PartialOrd>(x: T, y: T) -> T {
    iff!(x < y, x, y)
}

/// Returns `x` if `x > y`, otherwise `y`.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    iff!(x > y, x, y)
}

/// Minimum after an `as` cast of both operands to `T`.
#[inline]
pub fn min_t<T, X, Y>(x: X, y: Y) -> T
where
    T: PartialOrd + Copy + 'static,
    X: AsPrimitive<T>,
    Y: AsPrimitive<T>,
{
    min(x.as_(), y.as_())
}

#[inline]
pub fn max_t<T, X, Y>(x: X, y: Y) -> T
where
    T: PartialOrd + Copy + 'static,
    X: AsPrimitive<T>,
    Y: AsPrimitive<T>,
{
    max(x.as_(), y.as_())
}

/// Like [`min_t`], but fails instead of truncating when an operand has no
/// exact representation in `T`.
pub fn try_min_t<T, X, Y>(x: X, y: Y) -> Result<T, CoercionError>
where
    T: NumCast + PartialOrd,
    X: ToPrimitive,
    Y: ToPrimitive,
{
    let (x, y) = coerce_pair::<T, X, Y>(x, y)?;
    Ok(min(x, y))
}

pub fn try_max_t<T, X, Y>(x: X, y: Y) -> Result<T, CoercionError>
where
    T: NumCast + PartialOrd,
    X: ToPrimitive,
    Y: ToPrimitive,
{
    let (x, y) = coerce_pair::<T, X, Y>(x, y)?;
    Ok(max(x, y))
}

fn coerce_pair<T, X, Y>(x: X, y: Y) -> Result<(T, T), CoercionError>
where
    T: NumCast,
    X: ToPrimitive,
    Y: ToPrimitive,
{
    let x = coerce::<T, X>(x, Operand::First)?;
    let y = coerce::<T, Y>(y, Operand::Second)?;
    Ok((x, y))
}

fn coerce<T: NumCast, V: ToPrimitive>(v: V, operand: Operand) -> Result<T, CoercionError> {
    <T as NumCast>::from(v).ok_or_else(|| {
        let err = CoercionError::new::<T>(operand);
        debug!("{}", err);
        err
    })
}
