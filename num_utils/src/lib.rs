//! Math helpers generic over every primitive numeric type.
//!
//! Each function widens its arguments to `f64`, runs the `f64` operation and
//! narrows the result back with `as` semantics: truncation toward zero,
//! saturation at the bounds of integer types, and NaN turning into `0`.
//! Integers wider than 53 bits may lose precision on the way.

pub mod functions;
pub mod primitive;

pub use functions::{abs, acos, max, modulo};
pub use primitive::{FloatNumeric, Numeric};
