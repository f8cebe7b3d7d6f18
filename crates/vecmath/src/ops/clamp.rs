//! Component-wise clamping
//!
//! `clamp` composes the ordinary family, `fclamp` the NaN-tolerant one.
//! Bounds are not validated: with `lo > hi` every component comes out as `hi`.

use crate::traits::Scalar;
use crate::vector::Vector;

/// Clamp each component of `x` to `[lo, hi]` using ordinary ordering
///
/// Computed as `min(max(x, lo), hi)`.
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec3;
/// use rigel_vecmath::ops::clamp;
///
/// let v = clamp(vec3(-5, 1, 9), vec3(0, 0, 0), vec3(3, 3, 3));
/// assert_eq!(v, vec3(0, 1, 3));
/// ```
#[inline(always)]
pub fn clamp<T: Scalar, const L: usize>(
    x: Vector<T, L>,
    lo: Vector<T, L>,
    hi: Vector<T, L>,
) -> Vector<T, L> {
    x.max(lo).min(hi)
}

/// Clamp each component of `x` to the broadcast range `[lo, hi]`
#[inline(always)]
pub fn clamp_scalar<T: Scalar, const L: usize>(x: Vector<T, L>, lo: T, hi: T) -> Vector<T, L> {
    x.map(|c| c.max_ord(lo).min_ord(hi))
}

/// Clamp each component of `x` to `[lo, hi]`, resolving NaN to a bound
///
/// Computed as `fmin(fmax(x, lo), hi)`, so a NaN component of `x` becomes
/// `lo`, and a NaN bound is ignored for that component.
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::vec2;
/// use rigel_vecmath::ops::fclamp;
///
/// let v = fclamp(vec2(f32::NAN, 2.5), vec2(0.0, 0.0), vec2(1.0, 1.0));
/// assert_eq!(v, vec2(0.0, 1.0));
/// ```
#[inline(always)]
pub fn fclamp<T: Scalar, const L: usize>(
    x: Vector<T, L>,
    lo: Vector<T, L>,
    hi: Vector<T, L>,
) -> Vector<T, L> {
    x.fmax(lo).fmin(hi)
}

/// NaN-tolerant clamp of each component of `x` to the broadcast range `[lo, hi]`
#[inline(always)]
pub fn fclamp_scalar<T: Scalar, const L: usize>(x: Vector<T, L>, lo: T, hi: T) -> Vector<T, L> {
    x.map(|c| c.fmax(lo).fmin(hi))
}
