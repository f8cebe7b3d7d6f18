#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! rigel-vecmath: component-wise min/max reductions over small vectors
//!
//! Generic over scalar type (`f32`, `f64`, every primitive integer) and over
//! vector width 1 to 4, with two NaN policies:
//!
//! - **Ordinary** (`min`, `max`, `min3`, `max4`, ...): plain ordering. NaN
//!   handling for floats is unspecified.
//! - **IEEE-754** (`fmin`, `fmax`, `fmin3`, `fmax4`, ...): a NaN operand never
//!   wins over a number; NaN comes out only when every operand is NaN.
//!
//! Every operation is a pure, allocation-free function of its inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use rigel_vecmath::{vec3, Vec3};
//! use rigel_vecmath::ops::{fmax4, min3};
//!
//! let a: Vec3 = vec3(1.0, 5.0, 9.0);
//! let b = vec3(4.0, 2.0, 9.0);
//! let c = vec3(0.0, 7.0, 9.0);
//! assert_eq!(min3(a, b, c), vec3(0.0, 2.0, 9.0));
//!
//! let nan = f32::NAN;
//! let m = fmax4(vec3(1.0, nan, 3.0), vec3(4.0, 5.0, nan), c, Vec3::splat(0.0));
//! assert_eq!(m, vec3(4.0, 7.0, 9.0));
//! ```

// Core trait definitions
pub mod traits;

// Vector container
pub mod vector;

// Scalar reductions
pub mod scalar;

// Functional-style vector operations
pub mod ops;

pub use traits::Scalar;

pub use vector::{
    vec1, vec2, vec3, vec4, DVec1, DVec2, DVec3, DVec4, IVec1, IVec2, IVec3, IVec4, UVec1, UVec2,
    UVec3, UVec4, Vec1, Vec2, Vec3, Vec4, Vector,
};
