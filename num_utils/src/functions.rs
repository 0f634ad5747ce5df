use crate::primitive::{FloatNumeric, Numeric};
use tracing::trace;

/// Absolute value of `x`.
///
/// A no-op for unsigned types. Signed minimums saturate, so
/// `abs(i8::MIN) == i8::MAX`.
pub fn abs<T: Numeric>(x: T) -> T {
    T::narrow(x.widen().abs())
}

/// Arc-cosine of `x`, in radians.
///
/// Inputs outside of `[-1, 1]` produce NaN.
pub fn acos<T: FloatNumeric>(x: T) -> T {
    let value = x.widen();
    let result = value.acos();
    if result.is_nan() && !value.is_nan() {
        trace!(value, "acos argument outside of [-1, 1]");
    }
    T::narrow(result)
}

/// The greater of `a` and `b`.
///
/// NaN in either operand gives NaN, and `+0.0` is considered greater than
/// `-0.0`.
pub fn max<T: Numeric>(a: T, b: T) -> T {
    let (a, b) = (a.widen(), b.widen());
    let result = if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a == b {
        if a.is_sign_negative() {
            b
        } else {
            a
        }
    } else if a > b {
        a
    } else {
        b
    };
    T::narrow(result)
}

/// Floating-point remainder of `a / b`, truncated to an integer.
///
/// The remainder takes the sign of `a`, as in C's `fmod`. For integers that
/// fit in 53 bits this matches `%`; fractional operands are reduced first and
/// truncated afterwards, so `modulo(7.5, 2.0) == 1`. A zero divisor yields
/// NaN, which truncates to `0`.
pub fn modulo<T: Numeric>(a: T, b: T) -> i64 {
    let (a, b) = (a.widen(), b.widen());
    let remainder = a % b;
    if remainder.is_nan() {
        trace!(a, b, "modulo produced NaN, truncating to 0");
    }
    remainder as i64
}
