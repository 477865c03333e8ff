// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-sequence interpolation: densify an ordered point run into a
//! [`PiecewiseSpline`] with one of three kernels.

use alloc::vec::Vec;
use kurbo::{ParamCurve, Point};

use crate::bezier::bezier_segments;
use crate::catmull_rom::CatmullRomSegment;
use crate::error::GeometryError;
use crate::piecewise::PiecewiseSpline;

/// Hermite smoothstep, `3u^2 - 2u^3`.
fn smoothstep(u: f64) -> f64 {
    u * u * (3.0 - 2.0 * u)
}

/// Number of samples a densification pass emits: interior spans hold back
/// their final sample so span boundaries are not duplicated.
fn sample_count(span_count: usize, samples_per_span: usize) -> usize {
    span_count * (samples_per_span - 1) + 1
}

/// Densify `points` with centripetal Catmull-Rom interpolation.
///
/// Requires at least two points and `samples_per_span >= 2`. Tangent context
/// at the ends comes from virtual points extrapolated 10% of the end segment
/// vectors beyond the boundary, so the curve stays tame there. The emitted
/// first and last samples are exactly the input endpoints.
///
/// Coincident consecutive points fail with
/// [`GeometryError::LengthCloseToZero`].
pub fn interpolate(
    points: &[Point],
    samples_per_span: usize,
) -> Result<PiecewiseSpline, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::InsufficientPoints);
    }
    assert!(samples_per_span >= 2, "need at least two samples per span");
    let span_count = points.len() - 1;
    let last_input = points.len() - 1;

    let virtual_start = points[0] - (points[1] - points[0]) * 0.1;
    let virtual_end = points[last_input] + (points[last_input] - points[last_input - 1]) * 0.1;

    let mut samples = Vec::with_capacity(sample_count(span_count, samples_per_span));
    for i in 0..span_count {
        let p0 = if i == 0 { virtual_start } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i == span_count - 1 {
            virtual_end
        } else {
            points[i + 2]
        };
        let segment = CatmullRomSegment::new(p0, p1, p2, p3)?;

        let emitted = if i == span_count - 1 {
            samples_per_span
        } else {
            samples_per_span - 1
        };
        for j in 0..emitted {
            let u = j as f64 / (samples_per_span - 1) as f64;
            samples.push(segment.eval(u));
        }
    }

    // The kernel reproduces the endpoints only to within rounding; pin them.
    samples[0] = points[0];
    let tail = samples.len() - 1;
    samples[tail] = points[last_input];
    PiecewiseSpline::from_points(samples)
}

/// Densify `points` with per-span smoothstep easing: linear in x, eased in y.
///
/// Each span is independent of its neighbors. Requires at least two points
/// and `samples_per_span >= 2`.
pub fn interpolate_smooth(
    points: &[Point],
    samples_per_span: usize,
) -> Result<PiecewiseSpline, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::InsufficientPoints);
    }
    assert!(samples_per_span >= 2, "need at least two samples per span");
    let span_count = points.len() - 1;

    let mut samples = Vec::with_capacity(sample_count(span_count, samples_per_span));
    for i in 0..span_count {
        let p1 = points[i];
        let p2 = points[i + 1];

        let emitted = if i == span_count - 1 {
            samples_per_span
        } else {
            samples_per_span - 1
        };
        for j in 0..emitted {
            let u = j as f64 / (samples_per_span - 1) as f64;
            let t = smoothstep(u);
            samples.push(Point::new(
                p1.x + (p2.x - p1.x) * u,
                p1.y + (p2.y - p1.y) * t,
            ));
        }
    }
    PiecewiseSpline::from_points(samples)
}

/// Densify `points` with interpolating cubic Bézier segments.
///
/// Requires at least three points; see
/// [`bezier_segments`](crate::bezier_segments) for the handle derivation and
/// failure cases.
pub fn interpolate_bezier(
    points: &[Point],
    samples_per_span: usize,
) -> Result<PiecewiseSpline, GeometryError> {
    assert!(samples_per_span >= 2, "need at least two samples per span");
    let segments = bezier_segments(points, None, None)?;
    let span_count = segments.len();

    let mut samples = Vec::with_capacity(sample_count(span_count, samples_per_span));
    for (i, segment) in segments.iter().enumerate() {
        let emitted = if i == span_count - 1 {
            samples_per_span
        } else {
            samples_per_span - 1
        };
        for j in 0..emitted {
            let u = j as f64 / (samples_per_span - 1) as f64;
            samples.push(segment.eval(u));
        }
    }
    PiecewiseSpline::from_points(samples)
}
