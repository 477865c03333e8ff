// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear splines over the x axis.
//!
//! A [`PiecewiseSpline`] is the densified output of the higher-order
//! interpolation kernels: an ordered run of [`LinearSpan`]s, each evaluating
//! its local line in O(1).

use alloc::vec::Vec;
use kurbo::Point;

use crate::error::GeometryError;
use crate::lut::LookupTable;

/// One linear piece of a [`PiecewiseSpline`]: the line through `start` and
/// `end`, precomputed in slope/intercept form.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearSpan {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint; `end.x` must be greater than `start.x`.
    pub end: Point,
    /// Slope of the line through the endpoints.
    pub k: f64,
    /// Intercept of the line through the endpoints.
    pub c: f64,
}

impl LinearSpan {
    /// The span through `start` and `end`.
    pub fn new(start: Point, end: Point) -> Self {
        let k = (end.y - start.y) / (end.x - start.x);
        let c = start.y - k * start.x;
        Self { start, end, k, c }
    }

    /// The line value at `x`, extrapolating freely.
    pub fn eval_at(&self, x: f64) -> f64 {
        self.k * x + self.c
    }

    /// The line value at `x`, clamped to the endpoint values outside
    /// `[start.x, end.x)`.
    pub fn clamped_eval_at(&self, x: f64) -> f64 {
        if x < self.start.x {
            self.start.y
        } else if x >= self.end.x {
            self.end.y
        } else {
            self.eval_at(x)
        }
    }
}

/// An ordered sequence of contiguous [`LinearSpan`]s, evaluated by x.
///
/// Evaluating outside the covered x-range clamps to the first/last endpoint
/// value rather than extrapolating.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseSpline {
    spans: Vec<LinearSpan>,
}

impl PiecewiseSpline {
    /// Connect consecutive `points` with linear spans.
    ///
    /// Points must be ordered by strictly increasing x. Fails with
    /// [`GeometryError::InsufficientPoints`] on fewer than two points.
    pub fn from_points(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::InsufficientPoints);
        }
        let spans = points
            .windows(2)
            .map(|w| LinearSpan::new(w[0], w[1]))
            .collect();
        Ok(Self { spans })
    }

    /// The spline value at `x`, clamped to the boundary values outside the
    /// covered range.
    pub fn eval_at(&self, x: f64) -> f64 {
        if x < self.spans[0].start.x {
            return self.spans[0].start.y;
        }
        for span in &self.spans {
            if x < span.end.x {
                return span.eval_at(x);
            }
        }
        self.spans[self.spans.len() - 1].end.y
    }

    /// Start of the covered x-range.
    pub fn source_start(&self) -> f64 {
        self.spans[0].start.x
    }

    /// End of the covered x-range.
    pub fn source_end(&self) -> f64 {
        self.spans[self.spans.len() - 1].end.x
    }

    /// The spans, in x order.
    pub fn spans(&self) -> &[LinearSpan] {
        &self.spans
    }

    /// The knot points the spline passes through, in x order.
    pub fn to_points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.spans.iter().map(|s| s.start).collect();
        points.push(self.spans[self.spans.len() - 1].end);
        points
    }

    /// An evenly spaced lookup table of `sample_count` values over the
    /// spline's x-domain.
    ///
    /// The table is anchored at [`source_start`](Self::source_start), so
    /// splines that do not begin at x = 0 look up correctly.
    ///
    /// # Panics
    ///
    /// Panics if `sample_count < 2`.
    pub fn lut_by_x(&self, sample_count: usize) -> LookupTable<f64> {
        assert!(sample_count >= 2, "lookup table needs at least two samples");
        let start = self.source_start();
        let end = self.source_end();
        let delta = (end - start) / (sample_count - 1) as f64;
        let samples = (0..sample_count)
            .map(|i| self.eval_at(start + i as f64 * delta))
            .collect();
        LookupTable::new(samples, start, end)
    }
}
