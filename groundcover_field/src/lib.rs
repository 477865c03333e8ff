// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundcover Field: scalar distance fields and an adaptive field quadtree.
//!
//! Groundcover Field is the spatial-approximation layer of the Groundcover toolkit.
//!
//! - Signed/unsigned distance functors for line segments and closed polygons,
//!   exposed as plain `Fn(Point) -> f64` closures.
//! - [`FieldQuadtree`]: an adaptive quadtree over a square domain that
//!   approximates any scalar field to a configurable error bound.
//! - [`FieldQuadtreeBuilder`]: builds a tree from scratch and merges further
//!   fields into it by pointwise minimum.
//!
//! A scalar field here is any callable mapping a 2D point to a single `f64`
//! (for example distance-to-shape). The quadtree samples the field at cell
//! corners and refines cells whose bilinear interpolation disagrees with the
//! field at five probe points (cell center plus the four edge midpoints) by
//! more than a threshold, up to a maximum subdivision depth.
//!
//! Nodes live in one flat, append-only `Vec`; child links are plain indices
//! into that storage, so a tree is cheap to clone and trivially snapshotable.
//! Builders are single-threaded; a finished [`FieldQuadtree`] is immutable
//! and can be shared freely.
//!
//! # Example
//!
//! ```rust
//! use groundcover_field::{FieldQuadtreeBuilder, SegmentDistance, FIELD_INITIAL};
//! use kurbo::{Line, Point};
//!
//! // Approximate the unsigned distance to a segment over [0, 256]^2.
//! let segment = SegmentDistance::new(Line::new((200.0, 200.0), (50.0, 200.0)));
//!
//! let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 256.0).with_threshold(1.0);
//! builder.add(segment.unsigned_field());
//! let tree = builder.build();
//!
//! // Query inside the domain: finite values, close to the true distance.
//! let d = tree.sample(Point::new(125.0, 190.0));
//! assert!((d - 10.0).abs() < 2.0);
//!
//! // Outside the domain the sentinel is returned instead.
//! assert_eq!(tree.sample(Point::new(-1.0, 0.0)), FIELD_INITIAL);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundcover_field requires either the `std` or `libm` feature");

#[cfg(not(feature = "std"))]
mod floatfuncs;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
pub(crate) use floatfuncs::FloatFuncs;

pub mod distance;
pub mod tree;

pub use distance::{PolygonDistance, SegmentDistance};
pub use tree::{FIELD_INITIAL, FieldNode, FieldQuadtree, FieldQuadtreeBuilder, ProbeSamples};
