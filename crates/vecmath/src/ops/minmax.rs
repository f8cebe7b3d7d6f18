//! Ordinary component-wise min/max with 2, 3 and 4 operands
//!
//! These use the plain ordering of the scalar type. For floating-point
//! components containing NaN the result is unspecified and may change with
//! argument order; use [`fminmax`](super::fminmax) when NaN has to be handled.
//! Multi-operand forms reduce left to right.

use crate::scalar;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Component-wise minimum of two vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::min;
///
/// assert_eq!(min(vec3(1, 5, 9), vec3(4, 2, 9)), vec3(1, 2, 9));
/// ```
#[inline(always)]
pub fn min<T: Scalar, const L: usize>(a: Vector<T, L>, b: Vector<T, L>) -> Vector<T, L> {
    a.min(b)
}

/// Component-wise maximum of two vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::max;
///
/// assert_eq!(max(vec3(3.0, 3.0, 3.0), vec3(3.0, 3.0, 3.0)), vec3(3.0, 3.0, 3.0));
/// ```
#[inline(always)]
pub fn max<T: Scalar, const L: usize>(a: Vector<T, L>, b: Vector<T, L>) -> Vector<T, L> {
    a.max(b)
}

/// Component-wise minimum of three vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::min3;
///
/// let a = vec3(1.0f32, 5.0, 9.0);
/// let b = vec3(4.0, 2.0, 9.0);
/// let c = vec3(0.0, 7.0, 9.0);
/// assert_eq!(min3(a, b, c), vec3(0.0, 2.0, 9.0));
/// ```
#[inline(always)]
pub fn min3<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::min3(a[i], b[i], c[i])))
}

/// Component-wise minimum of four vectors
#[inline(always)]
pub fn min4<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
    d: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::min4(a[i], b[i], c[i], d[i])))
}

/// Component-wise maximum of three vectors
#[inline(always)]
pub fn max3<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::max3(a[i], b[i], c[i])))
}

/// Component-wise maximum of four vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec2;
/// use rigel_vecmath::ops::max4;
///
/// let m = max4(vec2(1, 8), vec2(6, 2), vec2(3, 3), vec2(-1, 0));
/// assert_eq!(m, vec2(6, 8));
/// ```
#[inline(always)]
pub fn max4<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
    d: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::max4(a[i], b[i], c[i], d[i])))
}
