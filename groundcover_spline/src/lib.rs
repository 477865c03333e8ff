// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundcover Spline: interpolation kernels, piecewise splines and lookup
//! tables.
//!
//! Groundcover Spline turns ordered point sequences into cheap-to-evaluate
//! curves:
//!
//! - [`interpolate`]: centripetal Catmull-Rom through the points.
//! - [`interpolate_smooth`]: per-span smoothstep easing.
//! - [`interpolate_bezier`]: interpolating cubic Bézier segments.
//!
//! Each kernel densifies into a [`PiecewiseSpline`] of linear spans, which
//! evaluates by x in O(spans) and clamps outside its domain. For hot paths a
//! spline collapses further into a [`LookupTable`] with O(1) nearest-sample
//! lookup.
//!
//! Degenerate input surfaces as a typed [`GeometryError`] instead of NaN.
//!
//! # Example
//!
//! ```rust
//! use groundcover_spline::interpolate;
//! use kurbo::Point;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 0.0),
//! ];
//! let spline = interpolate(&points, 10)?;
//!
//! // The densified curve keeps the endpoints exactly.
//! assert_eq!(spline.eval_at(0.0), 0.0);
//! assert_eq!(spline.eval_at(2.0), 0.0);
//!
//! // Collapse into a lookup table for O(1) evaluation.
//! let lut = spline.lut_by_x(64);
//! assert!((lut.nearest(1.0) - spline.eval_at(1.0)).abs() < 0.1);
//! # Ok::<(), groundcover_spline::GeometryError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundcover_spline requires either the `std` or `libm` feature");

#[cfg(not(feature = "std"))]
mod floatfuncs;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
pub(crate) use floatfuncs::FloatFuncs;

pub mod bezier;
pub mod catmull_rom;
pub mod error;
pub mod export;
pub mod interpolate;
pub mod lut;
pub mod piecewise;

pub use bezier::bezier_segments;
pub use catmull_rom::CatmullRomSegment;
pub use error::{GEOMETRY_EPSILON, GeometryError};
pub use export::{points_and_spline_to_plot_script, points_to_plot_script, spline_to_csv};
pub use interpolate::{interpolate, interpolate_bezier, interpolate_smooth};
pub use lut::LookupTable;
pub use piecewise::{LinearSpan, PiecewiseSpline};
