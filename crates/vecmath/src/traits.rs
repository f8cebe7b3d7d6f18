//! Core scalar abstraction trait
//!
//! Every vector operation in this crate is built by applying one of the
//! two-argument primitives below to each component. Floating-point and
//! integer types share the same trait so one generic body serves both.

use core::fmt::Debug;

/// Scalar component type of a [`Vector`](crate::Vector)
///
/// Implemented for `f32`, `f64` and every primitive integer type.
///
/// Two comparison families are provided:
///
/// - `min_ord`/`max_ord`: ordinary ordering. For floats the result when
///   either operand is NaN is unspecified and may depend on argument order.
///   The names keep clear of `Ord::min` and the inherent `f32::min`, so
///   importing this trait never changes what `x.min(y)` means.
/// - `fmin`/`fmax`: IEEE-754 semantics. If exactly one operand is NaN the
///   other one is returned; NaN only comes out when both inputs are NaN.
///
/// For integer types both families are identical.
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::Scalar;
///
/// assert_eq!(Scalar::fmin(f32::NAN, 5.0), 5.0);
/// assert_eq!(Scalar::fmax(-3.0f64, f64::NAN), -3.0);
/// assert_eq!(Scalar::fmin(7i32, 2), Scalar::min_ord(7i32, 2));
///
/// // Ord::min on integers stays unambiguous with the trait in scope
/// assert_eq!(3i32.min(4), 3);
/// ```
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Smaller of two values using ordinary ordering
    fn min_ord(self, other: Self) -> Self;

    /// Larger of two values using ordinary ordering
    fn max_ord(self, other: Self) -> Self;

    /// Smaller of two values, ignoring a single NaN operand
    fn fmin(self, other: Self) -> Self;

    /// Larger of two values, ignoring a single NaN operand
    fn fmax(self, other: Self) -> Self;

    /// Returns true if the value is NaN (always false for integers)
    fn is_nan(self) -> bool;
}

macro_rules! impl_scalar_float {
    ($t:ty, $fmin:path, $fmax:path) => {
        impl Scalar for $t {
            #[inline(always)]
            fn min_ord(self, other: Self) -> Self {
                if other < self {
                    other
                } else {
                    self
                }
            }

            #[inline(always)]
            fn max_ord(self, other: Self) -> Self {
                if other > self {
                    other
                } else {
                    self
                }
            }

            #[inline(always)]
            fn fmin(self, other: Self) -> Self {
                $fmin(self, other)
            }

            #[inline(always)]
            fn fmax(self, other: Self) -> Self {
                $fmax(self, other)
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn min_ord(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline(always)]
                fn max_ord(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                #[inline(always)]
                fn fmin(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline(always)]
                fn fmax(self, other: Self) -> Self {
                    Ord::max(self, other)
                }

                #[inline(always)]
                fn is_nan(self) -> bool {
                    false
                }
            }
        )*
    };
}

impl_scalar_float!(f32, libm::fminf, libm::fmaxf);
impl_scalar_float!(f64, libm::fmin, libm::fmax);
impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_minmax() {
        assert_eq!(Scalar::min_ord(2.0f32, 3.0), 2.0);
        assert_eq!(Scalar::max_ord(2.0f32, 3.0), 3.0);
        assert_eq!(Scalar::min_ord(-1.5f64, -2.5), -2.5);
        assert_eq!(Scalar::max_ord(-1.5f64, -2.5), -1.5);
    }

    #[test]
    fn test_float_fminmax_nan() {
        assert_eq!(Scalar::fmin(f32::NAN, 5.0), 5.0);
        assert_eq!(Scalar::fmin(5.0f32, f32::NAN), 5.0);
        assert_eq!(Scalar::fmax(f32::NAN, -3.0), -3.0);
        assert_eq!(Scalar::fmax(-3.0f32, f32::NAN), -3.0);
        assert!(Scalar::fmin(f32::NAN, f32::NAN).is_nan());
        assert!(Scalar::fmax(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn test_float_fminmax_ordinary() {
        assert_eq!(Scalar::fmin(1.0f64, 4.0), 1.0);
        assert_eq!(Scalar::fmax(1.0f64, 4.0), 4.0);
        assert_eq!(Scalar::fmin(f32::NEG_INFINITY, 0.0), f32::NEG_INFINITY);
        assert_eq!(Scalar::fmax(f32::INFINITY, 0.0), f32::INFINITY);
    }

    #[test]
    fn test_int_families_agree() {
        assert_eq!(Scalar::min_ord(7i32, -2), -2);
        assert_eq!(Scalar::fmin(7i32, -2), -2);
        assert_eq!(Scalar::max_ord(7u8, 200), 200);
        assert_eq!(Scalar::fmax(7u8, 200), 200);
        assert!(!Scalar::is_nan(0i64));
    }

    #[test]
    fn test_method_call_resolution_with_trait_in_scope() {
        // Scalar is in scope here; std methods keep their own meaning
        assert_eq!(3i32.min(4), 3);
        assert_eq!(3u64.max(4), 4);
        assert_eq!(f32::NAN.min(5.0), 5.0);
        assert_eq!(2.0f32.min_ord(5.0), 2.0);
        assert_eq!(f32::NAN.fmin(5.0), 5.0);
    }

    #[test]
    fn test_is_nan() {
        assert!(Scalar::is_nan(f32::NAN));
        assert!(!Scalar::is_nan(f32::INFINITY));
        assert!(Scalar::is_nan(f64::NAN));
    }
}
