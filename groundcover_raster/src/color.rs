// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color types and conversions.
//!
//! [`LinearColor`] is the working representation: linear-light RGBA with
//! straight (non-premultiplied) alpha unless stated otherwise. [`Srgb8`] is
//! the 8-bit encoded form for output buffers, and [`Lab`] is CIE L*a*b* for
//! perceptual interpolation. All conversions go through linear light.

#[cfg(not(feature = "std"))]
use crate::floatfuncs::FloatFuncs;

/// Linear-light RGBA color with `f32` channels.
///
/// Channels are nominally in `[0, 1]`; nothing clamps intermediate values.
/// Alpha is straight unless a method says premultiplied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearColor {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha; 1.0 is opaque.
    pub a: f32,
}

impl LinearColor {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    /// Opaque violet.
    pub const VIOLET: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Opaque orange.
    pub const ORANGE: Self = Self::new(1.0, 0.65, 0.0, 1.0);
    /// Opaque navy blue.
    pub const NAVY: Self = Self::new(0.0, 0.0, 0.502, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// A color from its channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque gray of the given intensity.
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v, 1.0)
    }

    /// The premultiplied form: color channels scaled by alpha.
    pub fn premultiply(self) -> Self {
        Self::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Channel-wise linear interpolation toward `other`.
    pub fn lerp(self, other: Self, u: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * u,
            self.g + (other.g - self.g) * u,
            self.b + (other.b - self.b) * u,
            self.a + (other.a - self.a) * u,
        )
    }

    /// Source-over blend of two premultiplied colors, `self` over `under`.
    pub fn blend_premultiplied(self, under: Self) -> Self {
        let fb = 1.0 - self.a;
        Self::new(
            self.r + under.r * fb,
            self.g + under.g * fb,
            self.b + under.b * fb,
            self.a + under.a * fb,
        )
    }

    /// Source-over blend of two straight-alpha colors, `self` over `under`.
    ///
    /// The result carries premultiplied color channels, as a compositing
    /// pipeline would hold internally.
    pub fn blend_straight(self, under: Self) -> Self {
        let fb = 1.0 - self.a;
        Self::new(
            self.a * self.r + under.a * under.r * fb,
            self.a * self.g + under.a * under.g * fb,
            self.a * self.b + under.a * under.b * fb,
            self.a + under.a * fb,
        )
    }

    /// Encode into 8-bit sRGB.
    pub fn to_srgb(self) -> Srgb8 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped to [0, 255] before the cast"
        )]
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        Srgb8 {
            r: linear_to_srgb_u8(self.r),
            g: linear_to_srgb_u8(self.g),
            b: linear_to_srgb_u8(self.b),
            a,
        }
    }

    /// Convert to CIE L*a*b* (D65 white point).
    pub fn to_lab(self) -> Lab {
        // Linear sRGB to XYZ.
        let x = 0.412_456_4 * self.r + 0.357_576_1 * self.g + 0.180_437_5 * self.b;
        let y = 0.212_672_9 * self.r + 0.715_152_2 * self.g + 0.072_175 * self.b;
        let z = 0.019_333_9 * self.r + 0.119_192 * self.g + 0.950_304_1 * self.b;

        let fx = lab_f(x / D65_X);
        let fy = lab_f(y / D65_Y);
        let fz = lab_f(z / D65_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: self.a,
        }
    }
}

/// 8-bit sRGB-encoded RGBA.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Srgb8 {
    /// Red, sRGB-encoded.
    pub r: u8,
    /// Green, sRGB-encoded.
    pub g: u8,
    /// Blue, sRGB-encoded.
    pub b: u8,
    /// Alpha, linearly scaled to `0..=255`.
    pub a: u8,
}

impl Srgb8 {
    /// Decode into linear light.
    pub fn to_linear(self) -> LinearColor {
        LinearColor::new(
            srgb_u8_to_linear(self.r),
            srgb_u8_to_linear(self.g),
            srgb_u8_to_linear(self.b),
            f32::from(self.a) / 255.0,
        )
    }
}

/// CIE L*a*b* color (D65 white point), alpha carried through untouched.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lab {
    /// Lightness, 0 to 100.
    pub l: f32,
    /// Green-red axis.
    pub a: f32,
    /// Blue-yellow axis.
    pub b: f32,
    /// Alpha; 1.0 is opaque.
    pub alpha: f32,
}

impl Lab {
    /// Convert back to linear-light RGBA.
    pub fn to_linear(self) -> LinearColor {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let x = lab_f_inv(fx) * D65_X;
        let y = lab_f_inv(fy) * D65_Y;
        let z = lab_f_inv(fz) * D65_Z;

        LinearColor::new(
            3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z,
            -0.969_266 * x + 1.876_010_8 * y + 0.041_556 * z,
            0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z,
            self.alpha,
        )
    }
}

const D65_X: f32 = 0.950_47;
const D65_Y: f32 = 1.0;
const D65_Z: f32 = 1.088_83;

// CIE forward/inverse companding around the delta = 6/29 knee.
const LAB_DELTA_CUBED: f32 = 0.008_856_452;

fn lab_f(t: f32) -> f32 {
    if t > LAB_DELTA_CUBED {
        t.powf(1.0 / 3.0)
    } else {
        7.787_037 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(f: f32) -> f32 {
    let cubed = f * f * f;
    if cubed > LAB_DELTA_CUBED {
        cubed
    } else {
        (f - 16.0 / 116.0) / 7.787_037
    }
}

/// Encode one linear-light channel into its 8-bit sRGB value.
pub fn linear_to_srgb_u8(v: f32) -> u8 {
    let v = v.clamp(0.0, 1.0);
    let encoded = if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to [0, 255] before the cast"
    )]
    let byte = (encoded * 255.0).round() as u8;
    byte
}

/// Decode one 8-bit sRGB channel into linear light.
pub fn srgb_u8_to_linear(u: u8) -> f32 {
    let c = f32::from(u) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
