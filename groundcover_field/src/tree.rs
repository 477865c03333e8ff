// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive quadtree approximation of a scalar field.
//!
//! A [`FieldQuadtreeBuilder`] samples a field at cell corners, measures how
//! far the cell's bilinear interpolation drifts from the field at five probe
//! points, and subdivides until every leaf is within threshold or at the
//! maximum depth. Additional fields merge into an existing tree by pointwise
//! minimum, which is the natural combinator for distance fields.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

/// Sentinel value for unset corners and out-of-domain samples.
pub const FIELD_INITIAL: f64 = -1.0e9;

/// Default refinement threshold for [`FieldQuadtreeBuilder`].
const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default subdivision depth cap for [`FieldQuadtreeBuilder`].
const DEFAULT_MAX_DEPTH: u8 = 8;

/// One square cell of a [`FieldQuadtree`].
///
/// Corners are stored counterclockwise from the minimum corner: SW, SE, NE,
/// NW. A node with `children == 0` is a leaf; otherwise its four children
/// occupy `children..children + 4` in the node arena, in the same quadrant
/// order as the corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldNode {
    /// Field values at the cell corners, in SW, SE, NE, NW order.
    pub corners: [f64; 4],
    /// Arena index of the first child, or 0 for a leaf.
    pub children: usize,
    /// Subdivision depth; the root is at depth 0.
    pub depth: u8,
    /// Minimum x of the cell.
    pub x0: f64,
    /// Minimum y of the cell.
    pub y0: f64,
    /// Side length of the cell.
    pub d: f64,
}

impl FieldNode {
    fn leaf(x0: f64, y0: f64, d: f64, depth: u8) -> Self {
        Self {
            corners: [FIELD_INITIAL; 4],
            children: 0,
            depth,
            x0,
            y0,
            d,
        }
    }

    /// Whether this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.children == 0
    }

    /// The cell covered by this node.
    pub fn cell(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x0 + self.d, self.y0 + self.d)
    }

    /// Whether `p` lies inside the cell (boundary inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 && p.x <= self.x0 + self.d && p.y >= self.y0 && p.y <= self.y0 + self.d
    }

    /// The corner positions, in the same order as [`corners`](Self::corners).
    pub fn corner_points(&self) -> [Point; 4] {
        [
            Point::new(self.x0, self.y0),
            Point::new(self.x0 + self.d, self.y0),
            Point::new(self.x0 + self.d, self.y0 + self.d),
            Point::new(self.x0, self.y0 + self.d),
        ]
    }

    /// Bilinear interpolation of the corner values at `p`.
    ///
    /// Exact for fields that are linear in x and y; the refinement loop
    /// bounds the error elsewhere.
    pub fn bilinear(&self, p: Point) -> f64 {
        let u = (p.x - self.x0) / self.d;
        let v = (p.y - self.y0) / self.d;
        let [sw, se, ne, nw] = self.corners;
        let bottom = sw + (se - sw) * u;
        let top = nw + (ne - nw) * u;
        bottom + (top - bottom) * v
    }

    /// The five probe points (center plus the four edge midpoints) together
    /// with their bilinear estimates.
    pub fn sample_points(&self) -> ProbeSamples {
        let h = self.d * 0.5;
        let points = [
            Point::new(self.x0 + h, self.y0 + h),
            Point::new(self.x0 + h, self.y0),
            Point::new(self.x0 + self.d, self.y0 + h),
            Point::new(self.x0 + h, self.y0 + self.d),
            Point::new(self.x0, self.y0 + h),
        ];
        let estimates = points.map(|p| self.bilinear(p));
        ProbeSamples { points, estimates }
    }

    /// Arena index of the child whose quadrant contains `p`.
    ///
    /// Only meaningful on interior nodes with `p` inside the cell.
    fn child_index(&self, p: Point) -> usize {
        let h = self.d * 0.5;
        let top = (p.y - self.y0) > h;
        let left = (p.x - self.x0) < h;
        let quadrant = match (top, left) {
            (false, true) => 0,
            (false, false) => 1,
            (true, false) => 2,
            (true, true) => 3,
        };
        self.children + quadrant
    }
}

/// Probe points of a cell with their bilinear estimates.
///
/// Produced by [`FieldNode::sample_points`]; the refinement loop compares the
/// estimates against the field being approximated.
#[derive(Copy, Clone, Debug)]
pub struct ProbeSamples {
    /// Center, then south, east, north and west edge midpoints.
    pub points: [Point; 5],
    /// Bilinear estimate at each probe point.
    pub estimates: [f64; 5],
}

impl ProbeSamples {
    /// Sum of absolute differences between `field` and the estimates.
    pub fn error(&self, field: impl Fn(Point) -> f64) -> f64 {
        self.points
            .iter()
            .zip(&self.estimates)
            .map(|(&p, &est)| (field(p) - est).abs())
            .sum()
    }
}

/// An immutable adaptive quadtree approximation of one or more scalar fields.
///
/// Built with [`FieldQuadtreeBuilder`]. Nodes live in a flat arena; index 0
/// is the root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldQuadtree {
    nodes: Vec<FieldNode>,
}

impl FieldQuadtree {
    /// All nodes in the arena, root first.
    pub fn nodes(&self) -> &[FieldNode] {
        &self.nodes
    }

    /// Whether the tree holds no field at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The square domain the tree covers, or a zero rect when empty.
    pub fn root_cell(&self) -> Rect {
        self.nodes.first().map_or(Rect::ZERO, FieldNode::cell)
    }

    /// The deepest subdivision level present in the tree.
    pub fn max_depth(&self) -> u8 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Arena index of the leaf whose cell contains `p`, or `None` if `p` is
    /// outside the domain (or the tree is empty).
    pub fn node_at(&self, p: Point) -> Option<usize> {
        let root = self.nodes.first()?;
        if !root.contains(p) {
            return None;
        }
        let mut idx = 0;
        loop {
            let node = &self.nodes[idx];
            if node.is_leaf() {
                return Some(idx);
            }
            idx = node.child_index(p);
        }
    }

    /// The approximated field value at `p`, or [`FIELD_INITIAL`] outside the
    /// domain.
    pub fn sample(&self, p: Point) -> f64 {
        match self.node_at(p) {
            Some(idx) => self.nodes[idx].bilinear(p),
            None => FIELD_INITIAL,
        }
    }
}

/// Builds a [`FieldQuadtree`] over a square domain.
///
/// The first [`add`](Self::add) samples the field from scratch; each further
/// `add` merges by pointwise minimum, refining cells where the merged field
/// is no longer well approximated.
#[derive(Debug)]
pub struct FieldQuadtreeBuilder {
    origin: Point,
    d: f64,
    threshold: f64,
    max_depth: u8,
    nodes: Vec<FieldNode>,
}

impl FieldQuadtreeBuilder {
    /// A builder for the square domain with minimum corner `origin` and side
    /// length `d`.
    pub fn new(origin: Point, d: f64) -> Self {
        Self {
            origin,
            d,
            threshold: DEFAULT_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
            nodes: Vec::new(),
        }
    }

    /// Set the refinement threshold: a leaf whose probe error exceeds this is
    /// subdivided.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Cap subdivision at `max_depth` levels below the root.
    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Add a scalar field to the tree.
    pub fn add(&mut self, field: impl Fn(Point) -> f64) {
        if self.nodes.is_empty() {
            self.add_new(&field);
        } else {
            self.add_existing(&field);
        }
    }

    /// Consume the builder, yielding the finished tree.
    pub fn build(self) -> FieldQuadtree {
        FieldQuadtree { nodes: self.nodes }
    }

    fn add_new<F: Fn(Point) -> f64>(&mut self, field: &F) {
        let mut root = FieldNode::leaf(self.origin.x, self.origin.y, self.d, 0);
        root.corners = root.corner_points().map(|p| field(p));
        self.nodes.push(root);

        let mut stack = Vec::new();
        stack.push(0_usize);
        while let Some(idx) = stack.pop() {
            let node = self.nodes[idx];
            if node.depth >= self.max_depth {
                continue;
            }
            if node.sample_points().error(field) <= self.threshold {
                continue;
            }
            let base = self.subdivide(idx, field);
            stack.extend(base..base + 4);
        }
    }

    /// Merge `field` into the existing tree by pointwise minimum.
    ///
    /// Every node's corners are lowered to the minimum first; leaves whose
    /// bilinear no longer tracks the merged field are subdivided. Children
    /// appended mid-loop are revisited by the same pass, so refinement
    /// cascades until the threshold or depth cap is met.
    fn add_existing<F: Fn(Point) -> f64>(&mut self, field: &F) {
        let mut idx = 0;
        while idx < self.nodes.len() {
            let old = self.nodes[idx];
            let mut node = old;
            let points = node.corner_points();
            for (corner, p) in node.corners.iter_mut().zip(points) {
                *corner = corner.min(field(p));
            }
            self.nodes[idx] = node;

            if node.is_leaf() && node.depth < self.max_depth {
                // The merged field: the new field min'ed with what the tree
                // represented here before this pass.
                let merged = |p: Point| field(p).min(old.bilinear(p));
                if node.sample_points().error(merged) > self.threshold {
                    self.subdivide(idx, &merged);
                }
            }
            idx += 1;
        }
    }

    /// Append four children for `idx`, sampling `corner_value` at their
    /// corners. Returns the arena index of the first child.
    fn subdivide<F: Fn(Point) -> f64>(&mut self, idx: usize, corner_value: &F) -> usize {
        let parent = self.nodes[idx];
        let base = self.nodes.len();
        let h = parent.d * 0.5;
        let depth = parent.depth + 1;
        let origins = [
            (parent.x0, parent.y0),
            (parent.x0 + h, parent.y0),
            (parent.x0 + h, parent.y0 + h),
            (parent.x0, parent.y0 + h),
        ];
        for (x0, y0) in origins {
            let mut child = FieldNode::leaf(x0, y0, h, depth);
            child.corners = child.corner_points().map(|p| corner_value(p));
            self.nodes.push(child);
        }
        self.nodes[idx].children = base;
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SegmentDistance;
    use kurbo::Line;

    fn segment_field() -> impl Fn(Point) -> f64 {
        SegmentDistance::new(Line::new((200.0, 200.0), (50.0, 200.0))).unsigned_field()
    }

    fn segment_tree() -> FieldQuadtree {
        let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 256.0).with_threshold(1.0);
        builder.add(segment_field());
        builder.build()
    }

    #[test]
    fn empty_tree_yields_sentinel() {
        let tree = FieldQuadtreeBuilder::new(Point::ZERO, 64.0).build();
        assert!(tree.is_empty());
        assert_eq!(tree.sample(Point::new(10.0, 10.0)), FIELD_INITIAL);
        assert_eq!(tree.node_at(Point::new(10.0, 10.0)), None);
        assert_eq!(tree.root_cell(), Rect::ZERO);
    }

    #[test]
    fn sentinel_outside_domain() {
        let tree = segment_tree();
        assert_eq!(tree.root_cell(), Rect::new(0.0, 0.0, 256.0, 256.0));
        assert_eq!(tree.sample(Point::new(-1.0, 50.0)), FIELD_INITIAL);
        assert_eq!(tree.sample(Point::new(50.0, 300.0)), FIELD_INITIAL);
        assert_eq!(tree.node_at(Point::new(257.0, 0.0)), None);
    }

    #[test]
    fn leaves_converge_or_hit_depth_cap() {
        let tree = segment_tree();
        let field = segment_field();
        assert!(tree.max_depth() <= 8, "depth cap exceeded");
        for node in tree.nodes() {
            if node.is_leaf() && node.depth < 8 {
                let err = node.sample_points().error(&field);
                assert!(err <= 1.0, "leaf at {:?} has error {err}", node.cell());
            }
        }
    }

    #[test]
    fn samples_track_segment_distance() {
        let tree = segment_tree();
        let field = segment_field();
        for &(x, y) in &[(125.0, 190.0), (60.0, 210.0), (20.0, 20.0), (240.0, 100.0)] {
            let p = Point::new(x, y);
            let err = (tree.sample(p) - field(p)).abs();
            assert!(err < 2.0, "sample at {p:?} off by {err}");
        }
    }

    #[test]
    fn node_at_returns_containing_leaf() {
        let tree = segment_tree();
        let p = Point::new(125.0, 190.0);
        let idx = tree.node_at(p).unwrap();
        let node = tree.nodes()[idx];
        assert!(node.is_leaf());
        assert!(node.contains(p));
    }

    #[test]
    fn children_tile_parent_in_quadrant_order() {
        let tree = segment_tree();
        let nodes = tree.nodes();
        for node in nodes {
            if node.is_leaf() {
                continue;
            }
            let h = node.d * 0.5;
            let expected = [
                (node.x0, node.y0),
                (node.x0 + h, node.y0),
                (node.x0 + h, node.y0 + h),
                (node.x0, node.y0 + h),
            ];
            for (i, &(x0, y0)) in expected.iter().enumerate() {
                let child = nodes[node.children + i];
                assert_eq!((child.x0, child.y0), (x0, y0));
                assert_eq!(child.d, h);
                assert_eq!(child.depth, node.depth + 1);
            }
        }
    }

    #[test]
    fn depth_cap_is_respected() {
        let field = segment_field();
        let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 256.0)
            .with_threshold(1e-6)
            .with_max_depth(2);
        builder.add(field);
        let tree = builder.build();
        assert_eq!(tree.max_depth(), 2);
        assert!(tree.nodes().len() <= 1 + 4 + 16);
    }

    #[test]
    fn merge_takes_pointwise_minimum() {
        // Both fields are linear, so bilinear interpolation is exact and the
        // merged tree reproduces min(f, g) without approximation error.
        let f = |p: Point| p.x;
        let g = |p: Point| 100.0 - p.x;

        let mut single = FieldQuadtreeBuilder::new(Point::ZERO, 100.0).with_threshold(0.5);
        single.add(f);
        let single = single.build();
        assert_eq!(single.nodes().len(), 1);

        let mut merged = FieldQuadtreeBuilder::new(Point::ZERO, 100.0).with_threshold(0.5);
        merged.add(f);
        merged.add(g);
        let merged = merged.build();
        // The crease at x = 50 forces at least one subdivision.
        assert!(merged.nodes().len() > single.nodes().len());

        for &(x, y) in &[(10.0, 20.0), (80.0, 30.0), (50.0, 50.0), (25.0, 75.0)] {
            let p = Point::new(x, y);
            let want = f(p).min(g(p));
            assert!((merged.sample(p) - want).abs() < 1e-9, "at {p:?}");
            // Merging can only lower the field.
            assert!(merged.sample(p) <= single.sample(p) + 1e-9);
        }
    }

    #[test]
    fn merge_into_empty_builds_fresh() {
        let mut builder = FieldQuadtreeBuilder::new(Point::ZERO, 100.0);
        builder.add(|p: Point| p.y);
        let tree = builder.build();
        assert!(!tree.is_empty());
        assert!((tree.sample(Point::new(30.0, 40.0)) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn bilinear_reproduces_corner_values() {
        let node = FieldNode {
            corners: [1.0, 2.0, 3.0, 4.0],
            children: 0,
            depth: 0,
            x0: 0.0,
            y0: 0.0,
            d: 2.0,
        };
        let pts = node.corner_points();
        for (i, &p) in pts.iter().enumerate() {
            assert!((node.bilinear(p) - node.corners[i]).abs() < 1e-12);
        }
        // Center is the mean of all four corners.
        assert!((node.bilinear(Point::new(1.0, 1.0)) - 2.5).abs() < 1e-12);
    }
}
