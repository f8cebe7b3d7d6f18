//! IEEE-754 component-wise fmin/fmax
//!
//! Per component, a NaN operand never wins over a number: `fmin(NaN, x)` and
//! `fmin(x, NaN)` both return `x`, and the result is NaN only when every
//! operand in that component is NaN. For integer vectors these behave exactly
//! like [`min`](super::min) and [`max`](super::max).
//!
//! The 3- and 4-operand forms reduce left to right, e.g.
//! `fmin4(a, b, c, d) == fmin(fmin(fmin(a, b), c), d)`.

use crate::scalar;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Component-wise fmin of a vector against a broadcast scalar
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::fmin_scalar;
///
/// let v = vec3(f32::NAN, 1.0, 8.0);
/// assert_eq!(fmin_scalar(v, 4.0), vec3(4.0, 1.0, 4.0));
/// ```
#[inline(always)]
pub fn fmin_scalar<T: Scalar, const L: usize>(a: Vector<T, L>, y: T) -> Vector<T, L> {
    a.map(|c| c.fmin(y))
}

/// Component-wise fmin of two vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::fmin;
///
/// let nan = vec3(f32::NAN, f32::NAN, f32::NAN);
/// assert_eq!(fmin(nan, vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
/// ```
#[inline(always)]
pub fn fmin<T: Scalar, const L: usize>(x: Vector<T, L>, y: Vector<T, L>) -> Vector<T, L> {
    x.fmin(y)
}

/// Component-wise fmin of three vectors
#[inline(always)]
pub fn fmin3<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::fmin3(a[i], b[i], c[i])))
}

/// Component-wise fmin of four vectors
#[inline(always)]
pub fn fmin4<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
    d: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::fmin4(a[i], b[i], c[i], d[i])))
}

/// Component-wise fmax of a vector against a broadcast scalar
#[inline(always)]
pub fn fmax_scalar<T: Scalar, const L: usize>(a: Vector<T, L>, b: T) -> Vector<T, L> {
    a.map(|c| c.fmax(b))
}

/// Component-wise fmax of two vectors
#[inline(always)]
pub fn fmax<T: Scalar, const L: usize>(a: Vector<T, L>, b: Vector<T, L>) -> Vector<T, L> {
    a.fmax(b)
}

/// Component-wise fmax of three vectors
#[inline(always)]
pub fn fmax3<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::fmax3(a[i], b[i], c[i])))
}

/// Component-wise fmax of four vectors
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::fmax4;
///
/// let nan = f32::NAN;
/// let m = fmax4(
///     vec3(1.0, nan, 3.0),
///     vec3(4.0, 5.0, nan),
///     vec3(2.0, 1.0, 0.0),
///     vec3(0.0, 0.0, 0.0),
/// );
/// assert_eq!(m, vec3(4.0, 5.0, 3.0));
/// ```
#[inline(always)]
pub fn fmax4<T: Scalar, const L: usize>(
    a: Vector<T, L>,
    b: Vector<T, L>,
    c: Vector<T, L>,
    d: Vector<T, L>,
) -> Vector<T, L> {
    Vector::new(core::array::from_fn(|i| scalar::fmax4(a[i], b[i], c[i], d[i])))
}
