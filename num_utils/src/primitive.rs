use duplicate::duplicate_item;
use num_traits::{AsPrimitive, Float};

/// A primitive number that can take a round trip through `f64`.
pub trait Numeric: Copy + PartialOrd + AsPrimitive<f64> {
    /// Lossless for every type except integers wider than 53 bits.
    fn widen(self) -> f64 {
        self.as_()
    }

    /// Converts back with `as` semantics.
    fn narrow(value: f64) -> Self;
}

/// Floating-point [`Numeric`] types.
pub trait FloatNumeric: Numeric + Float {}

#[duplicate_item(
    ty;
    [ i8 ]; [ i16 ]; [ i32 ]; [ i64 ]; [ i128 ]; [ isize ];
    [ u8 ]; [ u16 ]; [ u32 ]; [ u64 ]; [ u128 ]; [ usize ];
    [ f32 ]; [ f64 ];
)]
impl Numeric for ty {
    #[inline]
    fn narrow(value: f64) -> Self {
        value as ty
    }
}

impl FloatNumeric for f32 {}
impl FloatNumeric for f64 {}

#[cfg(test)]
mod tests {
    use crate::Numeric;
    use rstest::rstest;

    #[test]
    fn narrowing_truncates_toward_zero() {
        assert_eq!(i32::narrow(2.9), 2);
        assert_eq!(i32::narrow(-2.9), -2);
        assert_eq!(u8::narrow(7.99), 7);
    }

    #[rstest]
    #[case(f64::NAN, 0)]
    #[case(1e10, i16::MAX)]
    #[case(-1e10, i16::MIN)]
    fn narrowing_saturates(#[case] value: f64, #[case] expected: i16) {
        assert_eq!(i16::narrow(value), expected);
    }

    #[test]
    fn unsigned_narrowing_clamps_negatives() {
        assert_eq!(u32::narrow(-5.0), 0);
    }

    #[test]
    fn widening_loses_precision_past_53_bits() {
        let big = (1u64 << 53) + 1;
        assert_eq!(u64::narrow(big.widen()), 1u64 << 53);
        assert_eq!(u64::narrow(((1u64 << 53) - 1).widen()), (1u64 << 53) - 1);
    }

    #[test]
    fn float_round_trip_keeps_nan() {
        assert!(f32::narrow(f32::NAN.widen()).is_nan());
        assert_eq!(f32::narrow(0.25f32.widen()), 0.25);
    }
}
