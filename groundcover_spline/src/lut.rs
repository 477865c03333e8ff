// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced lookup tables for O(1) approximate function evaluation.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

/// A precomputed, evenly spaced sample array over a source domain
/// `[start, end]`.
///
/// [`nearest`](Self::nearest) is a single multiply, floor and index; queries
/// outside the domain clamp to the boundary samples. Built once (typically
/// from a [`PiecewiseSpline`](crate::PiecewiseSpline) or a gradient ramp) and
/// immutable thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupTable<T> {
    samples: Vec<T>,
    start: f64,
    end: f64,
}

impl<T: Copy> LookupTable<T> {
    /// A table of `samples` evenly spaced over `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `samples` is empty.
    pub fn new(samples: Vec<T>, start: f64, end: f64) -> Self {
        assert!(!samples.is_empty(), "lookup table needs at least one sample");
        Self {
            samples,
            start,
            end,
        }
    }

    /// The sample nearest below `x`, clamped to the boundary samples outside
    /// `[start, end)`.
    pub fn nearest(&self, x: f64) -> T {
        if x < self.start {
            return self.samples[0];
        }
        if x >= self.end {
            return self.samples[self.samples.len() - 1];
        }
        let t = (x - self.start) / (self.end - self.start);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "non-negative and clamped below the sample count"
        )]
        let idx = (self.samples.len() as f64 * t).floor() as usize;
        self.samples[idx.min(self.samples.len() - 1)]
    }

    /// Start of the source domain.
    pub fn source_start(&self) -> f64 {
        self.start
    }

    /// End of the source domain.
    pub fn source_end(&self) -> f64 {
        self.end
    }

    /// The raw samples, in domain order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Samples paired with the domain position each one represents.
    pub fn iter_with_positions(&self) -> impl Iterator<Item = (f64, T)> + '_ {
        let n = self.samples.len();
        let dx = if n > 1 {
            (self.end - self.start) / (n - 1) as f64
        } else {
            0.0
        };
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &s)| (self.start + dx * i as f64, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn boundary_lookups_clamp() {
        let lut = LookupTable::new(vec![10.0, 20.0, 30.0, 40.0], 0.0, 4.0);
        assert_eq!(lut.nearest(0.0), 10.0);
        assert_eq!(lut.nearest(-5.0), 10.0);
        assert_eq!(lut.nearest(4.0 - 1e-9), 40.0);
        assert_eq!(lut.nearest(4.0), 40.0);
        assert_eq!(lut.nearest(100.0), 40.0);
    }

    #[test]
    fn lookup_is_monotonic_in_index() {
        let lut = LookupTable::new(vec![0_usize, 1, 2, 3, 4], 2.0, 12.0);
        let mut prev = 0;
        let mut x = 2.0;
        while x < 12.0 {
            let got = lut.nearest(x);
            assert!(got >= prev, "index decreased at x = {x}");
            prev = got;
            x += 0.25;
        }
        assert_eq!(lut.nearest(2.0), 0);
        assert_eq!(lut.nearest(12.0), 4);
    }

    #[test]
    fn offset_domain_is_respected() {
        let lut = LookupTable::new(vec![1.0, 2.0], 5.0, 7.0);
        assert_eq!(lut.source_start(), 5.0);
        assert_eq!(lut.source_end(), 7.0);
        assert_eq!(lut.nearest(5.5), 1.0);
        assert_eq!(lut.nearest(6.5), 2.0);
    }

    #[test]
    fn positions_cover_the_domain() {
        let lut = LookupTable::new(vec![0.0, 0.5, 1.0], 10.0, 20.0);
        let got: Vec<_> = lut.iter_with_positions().collect();
        assert_eq!(got, vec![(10.0, 0.0), (15.0, 0.5), (20.0, 1.0)]);
    }
}
