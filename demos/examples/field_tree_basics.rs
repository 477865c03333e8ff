// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field quadtree basics.
//!
//! Build an adaptive quadtree over a polygon's signed distance field, merge
//! in a second field, and inspect how refinement tracks the threshold.
//!
//! Run:
//! - `cargo run -p groundcover_demos --example field_tree_basics`

use groundcover_field::{FieldQuadtreeBuilder, PolygonDistance, SegmentDistance};
use kurbo::{Line, Point};

fn main() {
    let poly = PolygonDistance::new(vec![
        Point::new(60.0, 60.0),
        Point::new(200.0, 70.0),
        Point::new(180.0, 190.0),
        Point::new(80.0, 170.0),
    ]);

    for &threshold in &[4.0, 1.0, 0.25] {
        let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 256.0).with_threshold(threshold);
        builder.add(poly.signed_field());
        let tree = builder.build();

        println!(
            "threshold {:>5}: {:>5} nodes, deepest level {}",
            threshold,
            tree.nodes().len(),
            tree.max_depth()
        );
    }

    // A tight tree for queries, with a segment field merged in by pointwise
    // minimum.
    let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 256.0).with_threshold(0.25);
    builder.add(poly.signed_field());
    let segment = SegmentDistance::new(Line::new((20.0, 230.0), (230.0, 230.0)));
    builder.add(segment.unsigned_field());
    let tree = builder.build();

    let inside = tree.sample(Point::new(120.0, 120.0));
    let near_segment = tree.sample(Point::new(128.0, 226.0));
    println!("signed distance inside the polygon: {inside:.2}");
    println!("distance near the merged segment:   {near_segment:.2}");
    assert!(inside < 0.0, "polygon interior should be negative");
    assert!(
        near_segment < 5.0,
        "merged segment should dominate near its span"
    );
}
