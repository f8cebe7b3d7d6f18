//! Fixed-size vector container
//!
//! `Vector<T, L>` is a plain `[T; L]` with value semantics. Dimensions 1 to 4
//! are supported; any other `L` is rejected when the type is instantiated.

use core::array;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// A vector of `L` components of scalar type `T` (1 ≤ L ≤ 4)
///
/// # Example
///
/// ```rust
/// use rigel_vecmath::{vec3, Vec3};
///
/// let v: Vec3 = vec3(1.0, 2.0, 3.0);
/// assert_eq!(v[1], 2.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
///
/// Widths outside 1..=4 do not build:
///
/// ```compile_fail
/// use rigel_vecmath::Vector;
///
/// let v = Vector::new([0u8; 5]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Vector<T, const L: usize>([T; L]);

/// 1D `f32` vector
pub type Vec1 = Vector<f32, 1>;
/// 2D `f32` vector
pub type Vec2 = Vector<f32, 2>;
/// 3D `f32` vector
pub type Vec3 = Vector<f32, 3>;
/// 4D `f32` vector
pub type Vec4 = Vector<f32, 4>;

/// 1D `f64` vector
pub type DVec1 = Vector<f64, 1>;
/// 2D `f64` vector
pub type DVec2 = Vector<f64, 2>;
/// 3D `f64` vector
pub type DVec3 = Vector<f64, 3>;
/// 4D `f64` vector
pub type DVec4 = Vector<f64, 4>;

/// 1D `i32` vector
pub type IVec1 = Vector<i32, 1>;
/// 2D `i32` vector
pub type IVec2 = Vector<i32, 2>;
/// 3D `i32` vector
pub type IVec3 = Vector<i32, 3>;
/// 4D `i32` vector
pub type IVec4 = Vector<i32, 4>;

/// 1D `u32` vector
pub type UVec1 = Vector<u32, 1>;
/// 2D `u32` vector
pub type UVec2 = Vector<u32, 2>;
/// 3D `u32` vector
pub type UVec3 = Vector<u32, 3>;
/// 4D `u32` vector
pub type UVec4 = Vector<u32, 4>;

/// Returns a 1D vector with component `x`
#[inline(always)]
pub const fn vec1<T>(x: T) -> Vector<T, 1> {
    Vector::new([x])
}

/// Returns a 2D vector with components `x` and `y`
#[inline(always)]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector::new([x, y])
}

/// Returns a 3D vector with components `x`, `y` and `z`
#[inline(always)]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::new([x, y, z])
}

/// Returns a 4D vector with components `x`, `y`, `z` and `w`
#[inline(always)]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::new([x, y, z, w])
}

impl<T, const L: usize> Vector<T, L> {
    /// Number of components
    pub const LEN: usize = L;

    // Evaluated at monomorphization; fails the build for L outside 1..=4.
    const DIMENSION_OK: () = assert!(matches!(L, 1..=4), "vector dimension must be 1 to 4");

    /// Builds a vector from its components
    #[inline(always)]
    pub const fn new(components: [T; L]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::DIMENSION_OK;
        Vector(components)
    }

    /// Borrows the components as an array
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; L] {
        &self.0
    }

    /// Consumes the vector and returns its components
    #[inline(always)]
    pub fn into_array(self) -> [T; L] {
        self.0
    }

    /// Iterates over the components in index order
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Copy, const L: usize> Vector<T, L> {
    /// Returns a vector with every component equal to `value` (broadcast)
    ///
    /// ```rust
    /// use rigel_vecmath::{vec4, Vec4};
    ///
    /// assert_eq!(Vec4::splat(0.5), vec4(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::new([value; L])
    }

    /// Copies the components out as an array
    #[inline(always)]
    pub fn to_array(&self) -> [T; L] {
        self.0
    }

    /// Applies `f` to every component
    #[inline(always)]
    pub fn map<U, F>(self, mut f: F) -> Vector<U, L>
    where
        F: FnMut(T) -> U,
    {
        Vector::new(array::from_fn(|i| f(self.0[i])))
    }

    /// Combines same-indexed components of `self` and `rhs` with `f`
    ///
    /// ```rust
    /// use rigel_vecmath::vec2;
    ///
    /// let sum = vec2(1, 2).zip_map(vec2(10, 20), |a, b| a + b);
    /// assert_eq!(sum, vec2(11, 22));
    /// ```
    #[inline(always)]
    pub fn zip_map<U, R, F>(self, rhs: Vector<U, L>, mut f: F) -> Vector<R, L>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        Vector::new(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<T: Scalar, const L: usize> Vector<T, L> {
    /// Component-wise minimum using ordinary ordering
    ///
    /// The result for a NaN component is unspecified; see [`Vector::fmin`].
    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Scalar>::min_ord)
    }

    /// Component-wise maximum using ordinary ordering
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Scalar>::max_ord)
    }

    /// Component-wise IEEE-754 minimum: a NaN component loses to a number
    ///
    /// ```rust
    /// use rigel_vecmath::vec3;
    ///
    /// let a = vec3(f32::NAN, 4.0, f32::NAN);
    /// let b = vec3(1.0, f32::NAN, 2.0);
    /// assert_eq!(a.fmin(b), vec3(1.0, 4.0, 2.0));
    /// ```
    #[inline(always)]
    pub fn fmin(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Scalar>::fmin)
    }

    /// Component-wise IEEE-754 maximum: a NaN component loses to a number
    #[inline(always)]
    pub fn fmax(self, rhs: Self) -> Self {
        self.zip_map(rhs, <T as Scalar>::fmax)
    }

    /// Returns true if any component is NaN
    #[inline]
    pub fn has_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }
}

impl<T: Default, const L: usize> Default for Vector<T, L> {
    fn default() -> Self {
        Self::new(array::from_fn(|_| T::default()))
    }
}

impl<T, const L: usize> Index<usize> for Vector<T, L> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const L: usize> IndexMut<usize> for Vector<T, L> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const L: usize> From<[T; L]> for Vector<T, L> {
    #[inline(always)]
    fn from(components: [T; L]) -> Self {
        Self::new(components)
    }
}

impl<T, const L: usize> From<Vector<T, L>> for [T; L] {
    #[inline(always)]
    fn from(v: Vector<T, L>) -> Self {
        v.0
    }
}

impl<'a, T, const L: usize> IntoIterator for &'a Vector<T, L> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
