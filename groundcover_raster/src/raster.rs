// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense 2D pixel buffers in row-major order.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::{LinearColor, Srgb8};

/// A dense, row-major 2D buffer of pixels.
///
/// Row 0 is the top row; the painter layer applies the y-up flip. Out of
/// bounds access panics; callers that need guarded writes go through
/// [`Painter`](crate::Painter).
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Raster<T> {
    /// A `width` by `height` buffer with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `(x, y)`, row 0 at the top.
    pub fn get(&self, x: usize, y: usize) -> T {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y * self.width + x] = value;
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> &[T] {
        let base = y * self.width;
        &self.data[base..base + self.width]
    }

    /// All pixels, row-major.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

/// Linear-light working buffer.
pub type LinearRaster = Raster<LinearColor>;

/// 8-bit sRGB output buffer.
pub type SrgbRaster = Raster<Srgb8>;

impl LinearRaster {
    /// Encode the whole buffer into 8-bit sRGB.
    pub fn to_srgb(&self) -> SrgbRaster {
        SrgbRaster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|c| c.to_srgb()).collect(),
        }
    }
}

impl SrgbRaster {
    /// Decode the whole buffer into linear light.
    pub fn to_linear(&self) -> LinearRaster {
        LinearRaster {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|c| c.to_linear()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_pixel() {
        let r = LinearRaster::new(4, 3, LinearColor::NAVY);
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
        assert!(r.data().iter().all(|&c| c == LinearColor::NAVY));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut r = LinearRaster::new(4, 4, LinearColor::BLACK);
        r.set(2, 1, LinearColor::RED);
        assert_eq!(r.get(2, 1), LinearColor::RED);
        assert_eq!(r.get(1, 2), LinearColor::BLACK);
        assert_eq!(r.row(1)[2], LinearColor::RED);
    }

    #[test]
    #[should_panic(expected = "pixel out of bounds")]
    fn out_of_bounds_get_panics() {
        let r = LinearRaster::new(2, 2, LinearColor::BLACK);
        let _ = r.get(2, 0);
    }

    #[test]
    fn srgb_conversion_round_trips() {
        let mut r = LinearRaster::new(2, 2, LinearColor::WHITE);
        r.set(0, 0, LinearColor::new(0.25, 0.5, 0.75, 1.0));
        let back = r.to_srgb().to_linear();
        let c = back.get(0, 0);
        assert!((c.r - 0.25).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert!((c.b - 0.75).abs() < 0.01);
    }
}
