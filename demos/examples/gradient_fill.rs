// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient and field fills.
//!
//! Collapse a three-stop gradient into a lookup table, ramp it across a
//! buffer, overlay a distance-field ring, and print the result as ASCII
//! luminance.
//!
//! Run:
//! - `cargo run -p groundcover_demos --example gradient_fill`

use groundcover_field::{FieldQuadtreeBuilder, PolygonDistance};
use groundcover_raster::{Gradient, LinearColor, LinearRaster, Painter};
use kurbo::Point;

const WIDTH: usize = 48;
const HEIGHT: usize = 24;

/// Darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

fn print_ascii(raster: &LinearRaster) {
    for y in 0..raster.height() {
        let mut row = String::with_capacity(raster.width());
        for x in 0..raster.width() {
            let c = raster.get(x, y);
            let luma = 0.2126 * c.r + 0.7152 * c.g + 0.0722 * c.b;
            let idx = ((luma * (RAMP.len() - 1) as f32).round() as usize).min(RAMP.len() - 1);
            row.push(RAMP[idx] as char);
        }
        println!("{row}");
    }
}

fn main() {
    let mut raster = LinearRaster::new(WIDTH, HEIGHT, LinearColor::BLACK);
    let mut painter = Painter::new(&mut raster);

    // Diagonal white-orange-navy ramp.
    let mut gradient = Gradient::new();
    gradient
        .add_stop(0.0, LinearColor::WHITE)
        .add_stop(0.5, LinearColor::ORANGE)
        .add_stop(1.0, LinearColor::NAVY);
    let lut = gradient.to_lut(256);
    painter.apply_gradient(
        Point::new(0.0, 0.0),
        Point::new(WIDTH as f64, HEIGHT as f64),
        &lut,
    );

    println!("gradient ramp:");
    print_ascii(&raster);

    // A diamond outline from an approximated distance field.
    let diamond = PolygonDistance::new(vec![
        Point::new(24.0, 2.0),
        Point::new(40.0, 12.0),
        Point::new(24.0, 22.0),
        Point::new(8.0, 12.0),
    ]);
    let mut builder =
        FieldQuadtreeBuilder::new(Point::ZERO, WIDTH as f64).with_threshold(0.25);
    builder.add(diamond.signed_field());
    let tree = builder.build();

    let mut outline = LinearRaster::new(WIDTH, HEIGHT, LinearColor::BLACK);
    let mut painter = Painter::new(&mut outline);
    painter.apply_field(&tree, |d| {
        if d.abs() < 1.0 {
            LinearColor::WHITE
        } else if d < 0.0 {
            LinearColor::gray(0.25)
        } else {
            LinearColor::BLACK
        }
    });

    println!("distance-field diamond:");
    print_ascii(&outline);
}
