// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Y-up drawing over a linear raster.
//!
//! [`Painter`] presumes (0, 0) at the lower left corner; the mapping to the
//! natural pixel rows (where row 0 is the top) happens internally. Primitives
//! overwrite pixels; [`Painter::blend_pixel_i`] is the compositing entry
//! point.

use groundcover_field::FieldQuadtree;
use groundcover_spline::LookupTable;
use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

use crate::color::LinearColor;
use crate::raster::LinearRaster;

/// Scanline edge, endpoints ordered by ascending y.
struct Edge {
    x1: i64,
    y1: i64,
    x2: i64,
    y2: i64,
}

impl Edge {
    fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        if y1 < y2 {
            Self { x1, y1, x2, y2 }
        } else {
            Self {
                x1: x2,
                y1: y2,
                x2: x1,
                y2: y1,
            }
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pixel coordinates are truncated toward zero on purpose"
)]
fn trunc(v: f64) -> i64 {
    v as i64
}

/// Perp-dot of two 2D vectors; positive when `b` lies counterclockwise of
/// `a`.
fn perp_dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Draws into a borrowed [`LinearRaster`] with a y-up coordinate convention.
#[derive(Debug)]
pub struct Painter<'a> {
    raster: &'a mut LinearRaster,
}

impl<'a> Painter<'a> {
    /// A painter over `raster`.
    pub fn new(raster: &'a mut LinearRaster) -> Self {
        Self { raster }
    }

    /// Guarded pixel write in signed y-up coordinates; silently drops
    /// anything outside the buffer.
    fn put(&mut self, x: i64, y: i64, color: LinearColor) {
        if x < 0 || y < 0 {
            return;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "checked non-negative and bounds-checked against the buffer"
        )]
        let (x, y) = (x as usize, y as usize);
        if x >= self.raster.width() || y >= self.raster.height() {
            return;
        }
        self.raster.set(x, self.raster.height() - 1 - y, color);
    }

    /// Overwrite the pixel containing `(x, y)`, y-up. Out-of-bounds
    /// coordinates are dropped.
    pub fn set_pixel(&mut self, x: f64, y: f64, color: LinearColor) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        self.put(trunc(x), trunc(y), color);
    }

    /// Overwrite the pixel at integer y-up coordinates. Out-of-bounds
    /// coordinates are dropped.
    pub fn set_pixel_i(&mut self, x: usize, y: usize, color: LinearColor) {
        if x >= self.raster.width() || y >= self.raster.height() {
            return;
        }
        self.raster.set(x, self.raster.height() - 1 - y, color);
    }

    /// Source-over blend `color` (premultiplied) onto the pixel at integer
    /// y-up coordinates.
    pub fn blend_pixel_i(&mut self, x: usize, y: usize, color: LinearColor) {
        if x >= self.raster.width() || y >= self.raster.height() {
            return;
        }
        let row = self.raster.height() - 1 - y;
        let under = self.raster.get(x, row);
        self.raster.set(x, row, color.blend_premultiplied(under));
    }

    /// Draw a one-pixel line from `p0` to `p1` by stepping along the major
    /// axis.
    pub fn draw_line(&mut self, color: LinearColor, p0: Point, p1: Point) {
        let xdiff = p1.x - p0.x;
        let ydiff = p1.y - p0.y;
        if xdiff == 0.0 && ydiff == 0.0 {
            self.set_pixel(p0.x, p0.y, color);
            return;
        }

        if xdiff.abs() > ydiff.abs() {
            let (xmin, xmax) = if p0.x < p1.x { (p0.x, p1.x) } else { (p1.x, p0.x) };
            let slope = ydiff / xdiff;
            let mut x = xmin;
            while x <= xmax {
                let y = p0.y + (x - p0.x) * slope;
                self.set_pixel(x, y, color);
                x += 1.0;
            }
        } else {
            let (ymin, ymax) = if p0.y < p1.y { (p0.y, p1.y) } else { (p1.y, p0.y) };
            let slope = xdiff / ydiff;
            let mut y = ymin;
            while y <= ymax {
                let x = p0.x + (y - p0.y) * slope;
                self.set_pixel(x, y, color);
                y += 1.0;
            }
        }
    }

    fn draw_span(&mut self, color: LinearColor, x1: i64, x2: i64, y: i64) {
        let (lo, hi) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        for x in lo..hi {
            self.put(x, y, color);
        }
    }

    fn draw_spans_between(&mut self, color: LinearColor, long: &Edge, short: &Edge) {
        let long_ydiff = (long.y2 - long.y1) as f64;
        if long_ydiff == 0.0 {
            return;
        }
        let short_ydiff = (short.y2 - short.y1) as f64;
        if short_ydiff == 0.0 {
            return;
        }

        let long_xdiff = (long.x2 - long.x1) as f64;
        let short_xdiff = (short.x2 - short.x1) as f64;

        let mut factor1 = (short.y1 - long.y1) as f64 / long_ydiff;
        let step1 = 1.0 / long_ydiff;
        let mut factor2 = 0.0;
        let step2 = 1.0 / short_ydiff;

        for y in short.y1..short.y2 {
            let xa = long.x1 + trunc(long_xdiff * factor1);
            let xb = short.x1 + trunc(short_xdiff * factor2);
            self.draw_span(color, xa, xb, y);
            factor1 += step1;
            factor2 += step2;
        }
    }

    /// Fill a triangle by drawing horizontal spans between its y-sorted
    /// edges.
    pub fn draw_triangle(&mut self, color: LinearColor, a: Point, b: Point, c: Point) {
        let edges = [
            Edge::new(trunc(a.x), trunc(a.y), trunc(b.x), trunc(b.y)),
            Edge::new(trunc(b.x), trunc(b.y), trunc(c.x), trunc(c.y)),
            Edge::new(trunc(c.x), trunc(c.y), trunc(a.x), trunc(a.y)),
        ];

        // The longest edge in y pairs with each of the other two.
        let mut long_edge = 0;
        let mut max_length = 0;
        for (i, e) in edges.iter().enumerate() {
            let length = e.y2 - e.y1;
            if length > max_length {
                max_length = length;
                long_edge = i;
            }
        }
        let short1 = (long_edge + 1) % 3;
        let short2 = (long_edge + 2) % 3;

        self.draw_spans_between(color, &edges[long_edge], &edges[short1]);
        self.draw_spans_between(color, &edges[long_edge], &edges[short2]);
    }

    /// Fill a triangle by testing every pixel of its bounding box against
    /// the three edge functions.
    pub fn draw_triangle_halfspace(&mut self, color: LinearColor, a: Point, b: Point, c: Point) {
        // Edge functions want counterclockwise winding.
        let (b, c) = if perp_dot(b - a, c - a) < 0.0 {
            (c, b)
        } else {
            (b, c)
        };

        let minx = trunc(a.x.min(b.x).min(c.x));
        let miny = trunc(a.y.min(b.y).min(c.y));
        let maxx = trunc(a.x.max(b.x).max(c.x));
        let maxy = trunc(a.y.max(b.y).max(c.y));

        let e1 = b - a;
        let e2 = c - b;
        let e3 = a - c;

        for y in miny..=maxy {
            for x in minx..=maxx {
                let p = Point::new(x as f64, y as f64);
                if perp_dot(e1, p - a) >= 0.0
                    && perp_dot(e2, p - b) >= 0.0
                    && perp_dot(e3, p - c) >= 0.0
                {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill the whole buffer by projecting each pixel onto the `start` to
    /// `end` axis and ramping through `lut`.
    ///
    /// Pixels before `start` clamp to the table's first sample, pixels past
    /// `end` to its last.
    pub fn apply_gradient(&mut self, start: Point, end: Point, lut: &LookupTable<LinearColor>) {
        let axis = end - start;
        let len2 = axis.hypot2();
        if len2 == 0.0 {
            return;
        }
        let domain = lut.source_end() - lut.source_start();
        for y in 0..self.raster.height() {
            for x in 0..self.raster.width() {
                let p = Point::new(x as f64, y as f64);
                let t = (p - start).dot(axis) / len2;
                let color = lut.nearest(lut.source_start() + t * domain);
                self.set_pixel_i(x, y, color);
            }
        }
    }

    /// Color every pixel from a sampled scalar field.
    ///
    /// Pixel centers in y-up coordinates are fed to `tree`; pixels outside
    /// the tree's domain see the sentinel value. `colorize` maps each sample
    /// to a color.
    pub fn apply_field(&mut self, tree: &FieldQuadtree, colorize: impl Fn(f64) -> LinearColor) {
        for y in 0..self.raster.height() {
            for x in 0..self.raster.width() {
                let d = tree.sample(Point::new(x as f64, y as f64));
                self.set_pixel_i(x, y, colorize(d));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::Gradient;

    fn blank(w: usize, h: usize) -> LinearRaster {
        LinearRaster::new(w, h, LinearColor::WHITE)
    }

    #[test]
    fn origin_is_the_lower_left_corner() {
        let mut raster = blank(4, 4);
        let mut painter = Painter::new(&mut raster);
        painter.set_pixel(0.0, 0.0, LinearColor::RED);
        assert_eq!(raster.get(0, 3), LinearColor::RED);
        assert_eq!(raster.get(0, 0), LinearColor::WHITE);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut raster = blank(2, 2);
        let mut painter = Painter::new(&mut raster);
        painter.set_pixel(-1.0, 0.0, LinearColor::RED);
        painter.set_pixel(5.0, 0.0, LinearColor::RED);
        painter.set_pixel(0.0, 5.0, LinearColor::RED);
        assert!(raster.data().iter().all(|&c| c == LinearColor::WHITE));
    }

    #[test]
    fn horizontal_line_paints_the_row() {
        let mut raster = blank(8, 4);
        let mut painter = Painter::new(&mut raster);
        painter.draw_line(LinearColor::BLACK, Point::new(1.0, 2.0), Point::new(6.0, 2.0));
        for x in 1..=6 {
            assert_eq!(raster.get(x, 1), LinearColor::BLACK, "x = {x}");
        }
        assert_eq!(raster.get(0, 1), LinearColor::WHITE);
        assert_eq!(raster.get(7, 1), LinearColor::WHITE);
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let mut raster = blank(8, 8);
        let mut painter = Painter::new(&mut raster);
        painter.draw_line(LinearColor::BLACK, Point::new(0.0, 0.0), Point::new(7.0, 7.0));
        assert_eq!(raster.get(0, 7), LinearColor::BLACK);
        assert_eq!(raster.get(7, 0), LinearColor::BLACK);
        assert_eq!(raster.get(3, 4), LinearColor::BLACK);
    }

    #[test]
    fn scanline_triangle_covers_the_centroid() {
        let mut raster = blank(40, 40);
        let mut painter = Painter::new(&mut raster);
        painter.draw_triangle(
            LinearColor::BLACK,
            Point::new(10.0, 10.0),
            Point::new(30.0, 10.0),
            Point::new(20.0, 30.0),
        );
        // Centroid is solidly inside; far corner untouched.
        assert_eq!(raster.get(20, 40 - 1 - 15), LinearColor::BLACK);
        assert_eq!(raster.get(2, 2), LinearColor::WHITE);
    }

    #[test]
    fn halfspace_triangle_ignores_winding() {
        for (b, c) in [
            (Point::new(30.0, 10.0), Point::new(20.0, 30.0)),
            (Point::new(20.0, 30.0), Point::new(30.0, 10.0)),
        ] {
            let mut raster = blank(40, 40);
            let mut painter = Painter::new(&mut raster);
            painter.draw_triangle_halfspace(LinearColor::BLACK, Point::new(10.0, 10.0), b, c);
            assert_eq!(raster.get(20, 40 - 1 - 15), LinearColor::BLACK);
            assert_eq!(raster.get(2, 2), LinearColor::WHITE);
        }
    }

    #[test]
    fn blend_pixel_composites_over_the_background() {
        let mut raster = blank(2, 2);
        let mut painter = Painter::new(&mut raster);
        let half_red = LinearColor::new(1.0, 0.0, 0.0, 0.5).premultiply();
        painter.blend_pixel_i(0, 0, half_red);
        let got = raster.get(0, 1);
        assert!((got.r - 1.0).abs() < 1e-6);
        assert!((got.g - 0.5).abs() < 1e-6);
        assert!((got.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn field_fill_separates_inside_from_outside() {
        use groundcover_field::{FieldQuadtreeBuilder, SegmentDistance};
        use kurbo::Line;

        let segment = SegmentDistance::new(Line::new((0.0, 4.0), (8.0, 4.0)));
        let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 8.0).with_threshold(0.5);
        builder.add(segment.unsigned_field());
        let tree = builder.build();

        let mut raster = blank(8, 8);
        let mut painter = Painter::new(&mut raster);
        painter.apply_field(&tree, |d| {
            if d < 1.5 {
                LinearColor::BLACK
            } else {
                LinearColor::WHITE
            }
        });
        // Near the segment (y-up row 4) the threshold colors pixels black.
        assert_eq!(raster.get(4, 8 - 1 - 4), LinearColor::BLACK);
        // Far from it they stay white.
        assert_eq!(raster.get(4, 7), LinearColor::WHITE);
    }

    #[test]
    fn gradient_ramps_along_the_axis() {
        let mut raster = blank(16, 2);
        let mut g = Gradient::new();
        g.add_stop(0.0, LinearColor::WHITE)
            .add_stop(1.0, LinearColor::BLACK);
        let lut = g.to_lut(64);
        let mut painter = Painter::new(&mut raster);
        painter.apply_gradient(Point::new(0.0, 0.0), Point::new(16.0, 0.0), &lut);
        let left = raster.get(0, 0);
        let mid = raster.get(8, 0);
        let right = raster.get(15, 0);
        assert!(left.r > mid.r && mid.r > right.r);
        assert!((left.r - 1.0).abs() < 0.05);
    }
}
