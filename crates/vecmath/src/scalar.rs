//! Three- and four-operand scalar reductions
//!
//! Each function is a left fold over the matching two-argument [`Scalar`]
//! primitive, e.g. `fmin3(a, b, c) == a.fmin(b).fmin(c)`. The vector forms in
//! [`ops`](crate::ops) apply these per component.
//!
//! # Example
//!
//! ```rust
//! use rigel_vecmath::scalar::{fmax4, min3};
//!
//! assert_eq!(min3(4, -1, 7), -1);
//! assert_eq!(fmax4(f32::NAN, 2.0, f32::NAN, 1.0), 2.0);
//! ```

use crate::traits::Scalar;

/// Minimum of three values (ordinary ordering)
#[inline(always)]
pub fn min3<T: Scalar>(a: T, b: T, c: T) -> T {
    a.min_ord(b).min_ord(c)
}

/// Minimum of four values (ordinary ordering)
#[inline(always)]
pub fn min4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a.min_ord(b).min_ord(c).min_ord(d)
}

/// Maximum of three values (ordinary ordering)
#[inline(always)]
pub fn max3<T: Scalar>(a: T, b: T, c: T) -> T {
    a.max_ord(b).max_ord(c)
}

/// Maximum of four values (ordinary ordering)
#[inline(always)]
pub fn max4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a.max_ord(b).max_ord(c).max_ord(d)
}

/// NaN-tolerant minimum of three values
///
/// NaN only if all three are NaN.
#[inline(always)]
pub fn fmin3<T: Scalar>(a: T, b: T, c: T) -> T {
    a.fmin(b).fmin(c)
}

/// NaN-tolerant minimum of four values
#[inline(always)]
pub fn fmin4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a.fmin(b).fmin(c).fmin(d)
}

/// NaN-tolerant maximum of three values
#[inline(always)]
pub fn fmax3<T: Scalar>(a: T, b: T, c: T) -> T {
    a.fmax(b).fmax(c)
}

/// NaN-tolerant maximum of four values
#[inline(always)]
pub fn fmax4<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a.fmax(b).fmax(c).fmax(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAN: f32 = f32::NAN;

    #[test]
    fn test_min_max_ordinary() {
        assert_eq!(min3(1.0f32, 0.0, 2.0), 0.0);
        assert_eq!(min4(3, 9, -4, 2), -4);
        assert_eq!(max3(1.0f64, 0.0, 2.0), 2.0);
        assert_eq!(max4(3u16, 9, 4, 2), 9);
    }

    #[test]
    fn test_fmin_skips_nan() {
        assert_eq!(fmin3(NAN, 3.0, 1.0), 1.0);
        assert_eq!(fmin3(3.0, NAN, NAN), 3.0);
        assert_eq!(fmin4(NAN, NAN, NAN, -2.0), -2.0);
        assert!(fmin3(NAN, NAN, NAN).is_nan());
        assert!(fmin4(NAN, NAN, NAN, NAN).is_nan());
    }

    #[test]
    fn test_fmax_skips_nan() {
        assert_eq!(fmax3(NAN, 3.0, 1.0), 3.0);
        assert_eq!(fmax4(-5.0, NAN, NAN, NAN), -5.0);
        assert!(fmax3(NAN, NAN, NAN).is_nan());
        assert!(fmax4(NAN, NAN, NAN, NAN).is_nan());
    }

    #[test]
    fn test_fmin_order_independent() {
        let values = [NAN, 4.0, -1.0, NAN];
        let expected = -1.0;
        assert_eq!(fmin4(values[0], values[1], values[2], values[3]), expected);
        assert_eq!(fmin4(values[3], values[2], values[1], values[0]), expected);
        assert_eq!(fmin4(values[1], values[3], values[0], values[2]), expected);
    }

    #[test]
    fn test_integer_families_agree() {
        assert_eq!(fmin3(5i8, -7, 3), min3(5i8, -7, 3));
        assert_eq!(fmax4(5u64, 70, 3, 0), max4(5u64, 70, 3, 0));
    }
}
