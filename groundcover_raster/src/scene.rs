// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small layered 2D scene: materials, fills and line sets grouped into
//! ordered layers.
//!
//! Content lives in flat arenas on the [`Scene`]; layers reference it by
//! index in draw order. Build with [`SceneBuilder`], render with
//! [`Renderer`](crate::Renderer).

use alloc::vec::Vec;
use kurbo::Line;

use crate::color::LinearColor;

/// Stroke and fill parameters shared by scene content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Stroke width in world units.
    pub line_width: f64,
    /// Fill color for closed shapes.
    pub fill_color: LinearColor,
    /// Stroke color for lines.
    pub line_color: LinearColor,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            fill_color: LinearColor::WHITE,
            line_color: LinearColor::BLACK,
        }
    }
}

/// A full-buffer color fill.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorFill {
    /// The fill color.
    pub color: LinearColor,
}

/// A batch of world-space line segments sharing one material.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSet {
    /// Arena index of the material, from [`SceneBuilder::add_material`].
    pub material: usize,
    /// The segments, in draw order.
    pub lines: Vec<Line>,
}

impl LineSet {
    /// An empty line set using `material`.
    pub fn new(material: usize) -> Self {
        Self {
            material,
            lines: Vec::new(),
        }
    }

    /// Append a segment.
    pub fn push(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }
}

/// How a layer composites onto the layers below it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blend {
    /// Layer opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Default for Blend {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

bitflags::bitflags! {
    /// Layer flags controlling rendering.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Layer participates in rendering.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for LayerFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// One item of layer content, referencing a scene arena by index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerItem {
    /// A [`ColorFill`], by arena index.
    Fill(usize),
    /// A [`LineSet`], by arena index.
    Lines(usize),
}

/// An ordered group of content drawn together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    /// Rendering flags.
    pub flags: LayerFlags,
    /// Compositing mode for the whole layer.
    pub blend: Blend,
    /// Content in draw order.
    pub items: Vec<LayerItem>,
}

/// An immutable layered scene. Build with [`SceneBuilder`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub(crate) materials: Vec<Material>,
    pub(crate) fills: Vec<ColorFill>,
    pub(crate) line_sets: Vec<LineSet>,
    pub(crate) layers: Vec<Layer>,
}

impl Scene {
    /// The material arena.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// The layers, bottom first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The fill arena.
    pub fn fills(&self) -> &[ColorFill] {
        &self.fills
    }

    /// The line set arena.
    pub fn line_sets(&self) -> &[LineSet] {
        &self.line_sets
    }
}

/// Accumulates a [`Scene`]: layers first, then content appended to them.
#[derive(Clone, Debug, Default)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty visible layer with default blending; returns its
    /// index.
    pub fn add_layer(&mut self) -> usize {
        self.scene.layers.push(Layer::default());
        self.scene.layers.len() - 1
    }

    /// Append a layer with explicit flags and blend; returns its index.
    pub fn add_layer_with(&mut self, flags: LayerFlags, blend: Blend) -> usize {
        self.scene.layers.push(Layer {
            flags,
            blend,
            items: Vec::new(),
        });
        self.scene.layers.len() - 1
    }

    /// Register a material; returns its arena index for [`LineSet`]s.
    pub fn add_material(&mut self, material: Material) -> usize {
        self.scene.materials.push(material);
        self.scene.materials.len() - 1
    }

    /// Append a color fill to `layer`.
    pub fn add_fill(&mut self, layer: usize, fill: ColorFill) {
        self.scene.fills.push(fill);
        let idx = self.scene.fills.len() - 1;
        self.scene.layers[layer].items.push(LayerItem::Fill(idx));
    }

    /// Append a line set to `layer`.
    pub fn add_lines(&mut self, layer: usize, lines: LineSet) {
        debug_assert!(
            lines.material < self.scene.materials.len(),
            "line set references an unregistered material"
        );
        self.scene.line_sets.push(lines);
        let idx = self.scene.line_sets.len() - 1;
        self.scene.layers[layer].items.push(LayerItem::Lines(idx));
    }

    /// Finish, yielding the scene.
    pub fn build(self) -> Scene {
        self.scene
    }
}
