// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groundcover Raster: a small software rasterizer over linear-color buffers.
//!
//! Groundcover Raster is the drawing layer of the Groundcover toolkit.
//!
//! - [`LinearColor`]: linear-light RGBA with straight alpha, plus conversions
//!   to and from 8-bit sRGB and CIELAB.
//! - [`Raster`]: a plain row-major pixel grid, generic over the pixel type.
//! - [`Painter`]: y-up drawing primitives on a linear raster (pixels, DDA
//!   lines, filled triangles, gradient and scalar-field fills).
//! - [`Gradient`]: ordered color stops, collapsible into a lookup table.
//! - [`Scene`] and [`Renderer`]: a layered retained scene of fills and line
//!   sets, rendered bottom-up through a world-to-pixel transform.
//!
//! All drawing happens in linear color; convert to sRGB only at the edge,
//! when a buffer leaves the library.
//!
//! # Example
//!
//! ```rust
//! use groundcover_raster::{ColorFill, LinearColor, LineSet, Material, Renderer, SceneBuilder};
//! use kurbo::{Line, Point};
//!
//! let mut builder = SceneBuilder::new();
//! let layer = builder.add_layer();
//! let material = builder.add_material(Material::default());
//!
//! builder.add_fill(layer, ColorFill { color: LinearColor::WHITE });
//! let mut lines = LineSet::new(material);
//! lines.push(Line::new(Point::new(4.0, 4.0), Point::new(28.0, 4.0)));
//! builder.add_lines(layer, lines);
//!
//! let raster = Renderer::new(32, 32).render(&builder.build());
//! // Rows are y-up: world y = 4 is four rows above the bottom edge.
//! assert_eq!(raster.get(16, 32 - 1 - 4), LinearColor::BLACK);
//! assert_eq!(raster.get(1, 1), LinearColor::WHITE);
//!
//! // Hand off as 8-bit sRGB.
//! let srgb = raster.to_srgb();
//! assert_eq!(srgb.get(1, 1).r, 255);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("groundcover_raster requires either the `std` or `libm` feature");

#[cfg(not(feature = "std"))]
mod floatfuncs;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
pub(crate) use floatfuncs::FloatFuncs;

pub mod color;
pub mod gradient;
pub mod painter;
pub mod raster;
pub mod render;
pub mod scene;

pub use color::{Lab, LinearColor, Srgb8, linear_to_srgb_u8, srgb_u8_to_linear};
pub use gradient::Gradient;
pub use painter::Painter;
pub use raster::{LinearRaster, Raster, SrgbRaster};
pub use render::Renderer;
pub use scene::{
    Blend, ColorFill, Layer, LayerFlags, LayerItem, LineSet, Material, Scene, SceneBuilder,
};
