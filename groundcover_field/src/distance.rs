// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance functors: signed/unsigned distance from a point to a line
//! segment or a closed polygon.
//!
//! These are the scalar fields typically fed to
//! [`FieldQuadtreeBuilder::add`](crate::FieldQuadtreeBuilder::add). The
//! `*_field` methods return borrowing closures so a functor can be reused
//! across several builder calls.

use alloc::vec::Vec;
use kurbo::{Line, Point, Vec2};

/// Distance from a zero-length segment degenerates to point distance below
/// this squared length.
const DEGENERATE_LEN2: f64 = 1e-18;

/// Clamped-projection unsigned distance from `p` to the segment `a..b`.
fn segment_unsigned(a: Point, b: Point, p: Point) -> f64 {
    let pa = p - a;
    let ba = b - a;
    let len2 = ba.hypot2();
    if len2 < DEGENERATE_LEN2 {
        return pa.hypot();
    }
    let h = (pa.dot(ba) / len2).clamp(0.0, 1.0);
    (pa - ba * h).hypot()
}

/// Signed and unsigned distance to a line segment.
///
/// The signed variant uses the CCW rule: points on the left of the directed
/// segment `p0 -> p1` get positive distance, points on the right negative.
#[derive(Copy, Clone, Debug)]
pub struct SegmentDistance {
    line: Line,
}

impl SegmentDistance {
    /// Wrap a segment.
    pub const fn new(line: Line) -> Self {
        Self { line }
    }

    /// The wrapped segment.
    pub const fn line(&self) -> Line {
        self.line
    }

    /// Unsigned distance from `p` to the segment.
    pub fn unsigned(&self, p: Point) -> f64 {
        segment_unsigned(self.line.p0, self.line.p1, p)
    }

    /// Signed distance from `p` to the segment (CCW rule).
    ///
    /// A degenerate (zero-length) segment has no orientation; the distance is
    /// then reported as positive.
    pub fn signed(&self, p: Point) -> f64 {
        let a = self.line.p0;
        let ba = self.line.p1 - a;
        let pa = p - a;
        let len2 = ba.hypot2();
        if len2 < DEGENERATE_LEN2 {
            return pa.hypot();
        }
        let h = (pa.dot(ba) / len2).clamp(0.0, 1.0);
        let dist = pa - ba * h;
        // Left normal of the segment direction.
        let normal = Vec2::new(ba.y, -ba.x);
        let sign = if normal.dot(dist) > 0.0 { 1.0 } else { -1.0 };
        sign * dist.hypot()
    }

    /// Unsigned distance as a scalar field closure.
    pub fn unsigned_field(&self) -> impl Fn(Point) -> f64 + use<> {
        let this = *self;
        move |p| this.unsigned(p)
    }

    /// Signed distance as a scalar field closure.
    pub fn signed_field(&self) -> impl Fn(Point) -> f64 + use<> {
        let this = *self;
        move |p| this.signed(p)
    }
}

/// Signed and unsigned distance to a closed polygon.
///
/// The polygon is closed implicitly: an edge connects the last vertex back to
/// the first. The signed variant is negative inside the polygon and positive
/// outside (even-odd rule).
#[derive(Clone, Debug)]
pub struct PolygonDistance {
    points: Vec<Point>,
}

impl PolygonDistance {
    /// Wrap a closed polygon given by its vertices in order.
    ///
    /// At least three vertices are expected; fewer degenerate to segment or
    /// point distance with an always-positive sign.
    pub fn new(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 vertices");
        Self { points }
    }

    /// The polygon vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Edge starting at vertex `idx`, wrapping around at the end.
    pub fn edge_at(&self, idx: usize) -> Line {
        let n = self.points.len();
        Line::new(self.points[idx % n], self.points[(idx + 1) % n])
    }

    /// Unsigned distance from `p` to the polygon boundary.
    pub fn unsigned(&self, p: Point) -> f64 {
        let n = self.points.len();
        let mut best = f64::MAX;
        for i in 0..n {
            let edge = self.edge_at(i);
            best = best.min(segment_unsigned(edge.p0, edge.p1, p));
        }
        best
    }

    /// Signed distance from `p`: negative inside, positive outside.
    pub fn signed(&self, p: Point) -> f64 {
        let d = self.unsigned(p);
        if self.contains(p) { -d } else { d }
    }

    /// Even-odd point containment test.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.points.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > p.y) != (pj.y > p.y) {
                let t = (p.y - pi.y) / (pj.y - pi.y);
                if p.x < pi.x + t * (pj.x - pi.x) {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Unsigned distance as a scalar field closure.
    pub fn unsigned_field(&self) -> impl Fn(Point) -> f64 + '_ {
        move |p| self.unsigned(p)
    }

    /// Signed distance as a scalar field closure.
    pub fn signed_field(&self) -> impl Fn(Point) -> f64 + '_ {
        move |p| self.signed(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn segment_perpendicular_and_endpoint_distance() {
        let seg = SegmentDistance::new(Line::new((0.0, 0.0), (10.0, 0.0)));
        // Perpendicular foot inside the segment.
        assert!(close(seg.unsigned(Point::new(5.0, 3.0)), 3.0));
        // Beyond the endpoint: distance to the endpoint itself.
        assert!(close(seg.unsigned(Point::new(13.0, 4.0)), 5.0));
    }

    #[test]
    fn segment_signed_side() {
        let seg = SegmentDistance::new(Line::new((0.0, 0.0), (10.0, 0.0)));
        // The left normal of +x is -y, so points above the segment are negative.
        assert!(seg.signed(Point::new(5.0, 2.0)) < 0.0);
        assert!(seg.signed(Point::new(5.0, -2.0)) > 0.0);
        assert!(close(seg.signed(Point::new(5.0, 2.0)).abs(), 2.0));
    }

    #[test]
    fn degenerate_segment_is_point_distance() {
        let seg = SegmentDistance::new(Line::new((1.0, 1.0), (1.0, 1.0)));
        assert!(close(seg.unsigned(Point::new(4.0, 5.0)), 5.0));
        assert!(seg.signed(Point::new(4.0, 5.0)) > 0.0);
    }

    #[test]
    fn polygon_containment_and_sign() {
        let poly = PolygonDistance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert!(poly.contains(Point::new(5.0, 5.0)));
        assert!(!poly.contains(Point::new(15.0, 5.0)));
        assert!(close(poly.signed(Point::new(5.0, 5.0)), -5.0));
        assert!(close(poly.signed(Point::new(12.0, 5.0)), 2.0));
    }

    #[test]
    fn polygon_unsigned_is_min_over_edges() {
        let poly = PolygonDistance::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ]);
        let p = Point::new(5.0, -2.0);
        let mut best = f64::MAX;
        for i in 0..3 {
            let e = poly.edge_at(i);
            best = best.min(SegmentDistance::new(e).unsigned(p));
        }
        assert!(close(poly.unsigned(p), best));
        assert!(close(poly.unsigned(p), 2.0));
    }
}
