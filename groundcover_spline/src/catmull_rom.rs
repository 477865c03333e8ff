// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centripetal Catmull-Rom segments.

use kurbo::{Point, Vec2};

use crate::error::{GEOMETRY_EPSILON, GeometryError};

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

/// Centripetal exponent. 0.5 gives knot spacing by the square root of chord
/// length, which avoids cusps and self-intersection for typical inputs.
const ALPHA: f64 = 0.5;

/// Knot interval between consecutive control points: `|b - a| ^ ALPHA`.
fn knot_interval(a: Point, b: Point) -> Result<f64, GeometryError> {
    let interval = (b - a).hypot2().powf(ALPHA * 0.5);
    if interval < GEOMETRY_EPSILON {
        return Err(GeometryError::LengthCloseToZero);
    }
    Ok(interval)
}

/// One centripetal Catmull-Rom segment through four control points.
///
/// The curve sweeps from `p1` to `p2` as the parameter runs 0 to 1; `p0` and
/// `p3` only shape the tangents. Knot positions are precomputed at
/// construction.
#[derive(Copy, Clone, Debug)]
pub struct CatmullRomSegment {
    p0: Vec2,
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    t1: f64,
    t2: f64,
    t3: f64,
}

impl CatmullRomSegment {
    /// A segment through `p0..p3`.
    ///
    /// Coincident (or nearly coincident) consecutive control points collapse
    /// a knot interval and are rejected with
    /// [`GeometryError::LengthCloseToZero`] instead of dividing by zero.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Result<Self, GeometryError> {
        let t1 = knot_interval(p0, p1)?;
        let t2 = t1 + knot_interval(p1, p2)?;
        let t3 = t2 + knot_interval(p2, p3)?;
        Ok(Self {
            p0: p0.to_vec2(),
            p1: p1.to_vec2(),
            p2: p2.to_vec2(),
            p3: p3.to_vec2(),
            t1,
            t2,
            t3,
        })
    }

    /// The curve point at `u` in `[0, 1]`, between `p1` and `p2`.
    ///
    /// Evaluated in the pyramidal (Barry-Goldman) form.
    pub fn eval(&self, u: f64) -> Point {
        let t0 = 0.0;
        let (t1, t2, t3) = (self.t1, self.t2, self.t3);
        let t = t1 + (t2 - t1) * u;

        let a1 = self.p0 * ((t1 - t) / (t1 - t0)) + self.p1 * ((t - t0) / (t1 - t0));
        let a2 = self.p1 * ((t2 - t) / (t2 - t1)) + self.p2 * ((t - t1) / (t2 - t1));
        let a3 = self.p2 * ((t3 - t) / (t3 - t2)) + self.p3 * ((t - t2) / (t3 - t2));

        let b1 = a1 * ((t2 - t) / (t2 - t0)) + a2 * ((t - t0) / (t2 - t0));
        let b2 = a2 * ((t3 - t) / (t3 - t1)) + a3 * ((t - t1) / (t3 - t1));

        (b1 * ((t2 - t) / (t2 - t1)) + b2 * ((t - t1) / (t2 - t1))).to_point()
    }
}
