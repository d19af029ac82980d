//! # simd-conv
//!
//! Conversions between scalar floats and SIMD-register-shaped vectors and
//! matrices.
//!
//! - [`SimdFloat4`]: 4 f32 lanes (x, y, z, w) in the target's native vector
//!   register. Built from immediates ([`SimdFloat4::splat`],
//!   [`SimdFloat4::new`]) or from memory of any alignment
//!   (`load*_ptr_u`). 2- and 3-float loads zero-fill the remaining lanes.
//! - [`Float4x4`]: four [`SimdFloat4`] columns, column-major, with
//!   [`Float4x4::transpose`] to switch between row- and column-major data.
//! - [`Float2`], [`Float3`], [`Float4`]: the plain scalar tuples on the other
//!   side of the conversion.
//!
//! ```
//! use simd_conv::{Float4x4, SimdFloat4};
//!
//! let v = SimdFloat4::new(0.0, 1.0, 2.0, 3.0);
//! assert_eq!(v.z(), 2.0);
//!
//! let af: [f32; 16] = core::array::from_fn(|i| i as f32);
//! let m = Float4x4::from_cols_array(&af);
//! assert_eq!(m.cols[2].y(), 9.0);
//! assert_eq!(m.transpose().cols[1].z(), 9.0);
//! ```
//!
//! Everything here is pure and allocation-free: no operation touches memory
//! other than the caller's source and destination buffers.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

/// Native register backends.
pub mod backend;
/// Walkthrough configuration.
pub mod config;
/// 4x4 matrices and transpose.
pub mod float4x4;
/// 4-lane SIMD vectors and their loaders.
pub mod simd_float4;
/// Scalar float tuples.
pub mod vec_float;

pub use float4x4::{transpose, Float4x4, MatrixLayout};
pub use simd_float4::SimdFloat4;
pub use vec_float::{Float2, Float3, Float4};
