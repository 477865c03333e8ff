// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sequential scene rendering into a linear raster.

use kurbo::{Affine, Point, Vec2};

use crate::color::LinearColor;
use crate::painter::Painter;
use crate::raster::LinearRaster;
use crate::scene::{LayerFlags, LayerItem, Scene};

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

/// Stroke widths above this many pixels are rendered as filled quads instead
/// of single-pixel lines.
const THIN_LINE_LIMIT: f64 = 1.5;

/// Renders a [`Scene`] layer by layer into a fresh [`LinearRaster`].
///
/// Layers composite bottom-up; content coordinates pass through
/// `world_to_pixel` into the painter's y-up pixel space. Rendering is
/// sequential; parallel tiling harnesses sit outside this crate.
#[derive(Copy, Clone, Debug)]
pub struct Renderer {
    width: usize,
    height: usize,
    world_to_pixel: Affine,
}

impl Renderer {
    /// A renderer targeting a `width` by `height` buffer, world coordinates
    /// mapping straight to pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            world_to_pixel: Affine::IDENTITY,
        }
    }

    /// Replace the world-to-pixel transform.
    pub fn with_transform(mut self, world_to_pixel: Affine) -> Self {
        self.world_to_pixel = world_to_pixel;
        self
    }

    /// The world-to-pixel transform.
    pub fn world_to_pixel(&self) -> Affine {
        self.world_to_pixel
    }

    /// Draw `scene` into a new transparent buffer.
    pub fn render(&self, scene: &Scene) -> LinearRaster {
        let mut raster = LinearRaster::new(self.width, self.height, LinearColor::TRANSPARENT);
        let scale = self.world_to_pixel.determinant().abs().sqrt();
        let mut painter = Painter::new(&mut raster);

        for layer in scene.layers() {
            if !layer.flags.contains(LayerFlags::VISIBLE) {
                continue;
            }
            let opacity = layer.blend.opacity;
            for item in &layer.items {
                match *item {
                    LayerItem::Fill(idx) => {
                        let color = premultiplied(scene.fills()[idx].color, opacity);
                        self.fill_all(&mut painter, color);
                    }
                    LayerItem::Lines(idx) => {
                        let set = &scene.line_sets()[idx];
                        let material = scene.materials()[set.material];
                        let color = premultiplied(material.line_color, opacity);
                        let width_px = material.line_width * scale;
                        for &line in &set.lines {
                            let p0 = self.world_to_pixel * line.p0;
                            let p1 = self.world_to_pixel * line.p1;
                            if width_px > THIN_LINE_LIMIT {
                                draw_thick_line(&mut painter, color, p0, p1, width_px);
                            } else {
                                painter.draw_line(color, p0, p1);
                            }
                        }
                    }
                }
            }
        }
        raster
    }

    fn fill_all(&self, painter: &mut Painter<'_>, color: LinearColor) {
        for y in 0..self.height {
            for x in 0..self.width {
                painter.blend_pixel_i(x, y, color);
            }
        }
    }
}

/// The premultiplied form of `color` with the layer opacity folded in.
fn premultiplied(color: LinearColor, opacity: f32) -> LinearColor {
    let a = color.a * opacity;
    LinearColor::new(color.r * a, color.g * a, color.b * a, a)
}

/// A wide stroke as two triangles spanning the offset quad.
fn draw_thick_line(
    painter: &mut Painter<'_>,
    color: LinearColor,
    p0: Point,
    p1: Point,
    width_px: f64,
) {
    let dir = p1 - p0;
    let len = dir.hypot();
    if len == 0.0 {
        painter.set_pixel(p0.x, p0.y, color);
        return;
    }
    let normal = Vec2::new(-dir.y, dir.x) * (width_px * 0.5 / len);
    let q0 = p0 + normal;
    let q1 = p1 + normal;
    let q2 = p1 - normal;
    let q3 = p0 - normal;
    painter.draw_triangle_halfspace(color, q0, q1, q2);
    painter.draw_triangle_halfspace(color, q0, q2, q3);
}
