// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color gradients: ordered stops on `[0, 1]`, collapsible into a lookup
//! table for per-pixel use.

use alloc::vec::Vec;
use groundcover_spline::LookupTable;

use crate::color::LinearColor;

/// An ordered run of color stops on the unit interval.
///
/// Evaluation lerps between the bracketing stops and clamps outside the
/// first/last stop position. Stops keep insertion stability: adding a stop at
/// an existing position places it after the earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    stops: Vec<(f64, LinearColor)>,
}

impl Gradient {
    /// An empty gradient.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stops, ordered by position.
    pub fn stops(&self) -> &[(f64, LinearColor)] {
        &self.stops
    }

    /// Insert a stop at position `t`, keeping the stops ordered.
    pub fn add_stop(&mut self, t: f64, color: LinearColor) -> &mut Self {
        debug_assert!((0.0..=1.0).contains(&t), "stop position out of [0, 1]");
        let at = self.stops.partition_point(|&(pos, _)| pos <= t);
        self.stops.insert(at, (t, color));
        self
    }

    /// The gradient color at `t`, clamped to the end stops outside their
    /// range.
    ///
    /// # Panics
    ///
    /// Panics if the gradient has no stops.
    pub fn eval(&self, t: f64) -> LinearColor {
        assert!(!self.stops.is_empty(), "gradient has no stops");
        let (first_pos, first_color) = self.stops[0];
        if t <= first_pos {
            return first_color;
        }
        for w in self.stops.windows(2) {
            let (p0, c0) = w[0];
            let (p1, c1) = w[1];
            if t <= p1 {
                if p1 - p0 <= 0.0 {
                    return c1;
                }
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "unit-interval blend factor fits in f32"
                )]
                let u = ((t - p0) / (p1 - p0)) as f32;
                return c0.lerp(c1, u);
            }
        }
        self.stops[self.stops.len() - 1].1
    }

    /// Collapse into an evenly spaced lookup table over `[0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if the gradient has no stops or `sample_count < 2`.
    pub fn to_lut(&self, sample_count: usize) -> LookupTable<LinearColor> {
        assert!(sample_count >= 2, "lookup table needs at least two samples");
        let delta = 1.0 / (sample_count - 1) as f64;
        let samples = (0..sample_count)
            .map(|i| self.eval(i as f64 * delta))
            .collect();
        LookupTable::new(samples, 0.0, 1.0)
    }
}
