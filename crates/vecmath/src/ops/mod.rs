//! Functional-style vector operations
//!
//! Free functions over [`Vector`](crate::Vector), grouped by NaN policy:
//!
//! - [`minmax`]: ordinary `min`/`max` with 2, 3 and 4 operands
//! - [`fminmax`]: IEEE-754 `fmin`/`fmax` with scalar broadcast, 2, 3 and 4 operands
//! - [`clamp`](mod@clamp): clamping built on either family
//!
//! Everything is re-exported here, so `use rigel_vecmath::ops::fmin3;` works.

pub mod clamp;
pub mod fminmax;
pub mod minmax;

pub use clamp::{clamp, clamp_scalar, fclamp, fclamp_scalar};
pub use fminmax::{fmax, fmax3, fmax4, fmax_scalar, fmin, fmin3, fmin4, fmin_scalar};
pub use minmax::{max, max3, max4, min, min3, min4};
