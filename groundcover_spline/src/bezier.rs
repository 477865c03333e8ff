// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier interpolation through point sequences.
//!
//! Derives one [`CubicBez`] per span between consecutive input points. Handle
//! directions come from the neighboring geometry: the tangent at an interior
//! point averages the normalized incoming and outgoing edge directions, with
//! a perpendicular fallback when the two fold back onto each other.

use alloc::vec::Vec;
use kurbo::{CubicBez, Point, Vec2};

use crate::error::{GEOMETRY_EPSILON, GeometryError};

/// Normalize `v`, rejecting near-zero input.
fn unit(v: Vec2) -> Result<Vec2, GeometryError> {
    let len = v.hypot();
    if len < GEOMETRY_EPSILON {
        return Err(GeometryError::LengthCloseToZero);
    }
    Ok(v / len)
}

/// Unit tangent at the joint between an incoming and an outgoing edge.
fn joint_tangent(incoming: Vec2, outgoing: Vec2) -> Result<Vec2, GeometryError> {
    let i = unit(incoming)?;
    let o = unit(outgoing)?;
    let sum = i + o;
    if sum.hypot() < GEOMETRY_EPSILON {
        // Anti-parallel edges: the average vanishes, turn perpendicular to
        // the incoming direction instead.
        return Ok(Vec2::new(-i.y, i.x));
    }
    unit(sum)
}

/// The cubic from `b` to `c` with the given unit tangents at each end.
///
/// Handles extend one third of the chord length, matching the handle spacing
/// a uniform cubic interpolant would use.
fn span_cubic(b: Point, c: Point, tan_b: Vec2, tan_c: Vec2) -> CubicBez {
    let third = (c - b).hypot() / 3.0;
    CubicBez::new(b, b + tan_b * third, c - tan_c * third, c)
}

/// Interpolating cubic Bézier segments through `points`, one per span.
///
/// Requires at least three points ([`GeometryError::InsufficientPoints`]
/// otherwise). `first_dir` and `last_dir` optionally pin the boundary
/// tangents; when absent the boundary tangent follows the end edge.
/// Near-zero edges between consecutive points are rejected with
/// [`GeometryError::LengthCloseToZero`].
pub fn bezier_segments(
    points: &[Point],
    first_dir: Option<Vec2>,
    last_dir: Option<Vec2>,
) -> Result<Vec<CubicBez>, GeometryError> {
    if points.len() < 3 {
        return Err(GeometryError::InsufficientPoints);
    }
    let span_count = points.len() - 1;
    let last = span_count - 1;
    let mut segments = Vec::with_capacity(span_count);

    for i in 0..span_count {
        let b = points[i];
        let c = points[i + 1];
        let out_edge = c - b;

        let tan_b = if i == 0 {
            match first_dir {
                Some(dir) => unit(dir)?,
                None => unit(out_edge)?,
            }
        } else {
            joint_tangent(b - points[i - 1], out_edge)?
        };

        let tan_c = if i == last {
            match last_dir {
                Some(dir) => unit(dir)?,
                None => unit(out_edge)?,
            }
        } else {
            joint_tangent(out_edge, points[i + 2] - c)?
        };

        segments.push(span_cubic(b, c, tan_b, tan_c));
    }
    Ok(segments)
}
