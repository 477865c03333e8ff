// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic text dumps: CSV and symbolic-math plot scripts.
//!
//! These are debugging aids for offline visual verification, not a stable
//! format. String-building only; writing to disk is the caller's concern.

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::Point;

use crate::piecewise::PiecewiseSpline;

/// The spline knots as semicolon-separated `x;y` lines.
pub fn spline_to_csv(spline: &PiecewiseSpline) -> String {
    let mut out = String::new();
    for p in spline.to_points() {
        let _ = writeln!(out, "{};{}", p.x, p.y);
    }
    out
}

fn push_point_list(out: &mut String, name: &str, points: &[Point]) {
    let _ = write!(out, "{name} = {{");
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{{{},{}}}", p.x, p.y);
    }
    out.push_str("};\n");
}

/// A plot script rendering `points` as a joined list plot.
pub fn points_to_plot_script(points: &[Point]) -> String {
    let mut out = String::new();
    push_point_list(&mut out, "points", points);
    out.push_str("ListLinePlot[points, PlotMarkers -> {Automatic, 20}, Frame -> True]\n");
    out
}

/// A plot script overlaying the source `points` (dashed) with the densified
/// `spline` knots.
pub fn points_and_spline_to_plot_script(points: &[Point], spline: &PiecewiseSpline) -> String {
    let mut out = String::new();
    push_point_list(&mut out, "ip", &spline.to_points());
    push_point_list(&mut out, "p", points);
    out.push_str(
        "ListPlot[{p, ip}, Joined -> {True, True}, PlotStyle -> {Dashed, Automatic}, \
         PlotMarkers -> Automatic, Frame -> True]\n",
    );
    out
}
