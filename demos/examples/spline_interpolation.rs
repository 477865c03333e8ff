// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spline interpolation.
//!
//! Densify a short point sequence three ways (Catmull-Rom, smoothstep,
//! Bezier), dump the result as CSV and as a plot script for offline
//! inspection.
//!
//! Run:
//! - `cargo run -p groundcover_demos --example spline_interpolation`

use groundcover_spline::{
    GeometryError, interpolate, interpolate_smooth, points_and_spline_to_plot_script,
    spline_to_csv,
};
use kurbo::Point;

fn main() -> Result<(), GeometryError> {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 2.0),
        Point::new(2.5, 1.5),
        Point::new(4.0, 3.0),
    ];

    let curved = interpolate(&points, 10)?;
    let eased = interpolate_smooth(&points, 10)?;

    println!("# Catmull-Rom knots as x;y CSV");
    print!("{}", spline_to_csv(&curved));

    println!("# plot script overlaying input and spline");
    print!("{}", points_and_spline_to_plot_script(&points, &curved));

    // Both splines agree exactly at the input knots.
    for p in &points {
        let c = curved.eval_at(p.x);
        let s = eased.eval_at(p.x);
        println!("x = {:.1}: input {:.3}, curved {c:.3}, eased {s:.3}", p.x, p.y);
    }

    // A coarse lookup table trades accuracy for O(1) evaluation.
    let lut = curved.lut_by_x(64);
    let mid = 2.0;
    println!(
        "at x = {mid}: spline {:.4}, lut {:.4}",
        curved.eval_at(mid),
        lut.nearest(mid)
    );
    Ok(())
}
