// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed failures for degenerate or insufficient geometry input.

use core::fmt;

/// Tolerance below which lengths and areas count as degenerate.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Why a geometry construction could not proceed.
///
/// Fallible constructors in this crate return this instead of producing
/// NaN-poisoned output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Fewer input points than the interpolation kernel requires.
    InsufficientPoints,
    /// An edge or knot interval is shorter than [`GEOMETRY_EPSILON`].
    LengthCloseToZero,
    /// A spanned area is smaller than [`GEOMETRY_EPSILON`].
    AreaCloseToZero,
    /// Input dimensions do not match what the operation expects.
    IncompatibleDimension,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InsufficientPoints => "not enough input points",
            Self::LengthCloseToZero => "length close to zero",
            Self::AreaCloseToZero => "area close to zero",
            Self::IncompatibleDimension => "incompatible dimension",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for GeometryError {}
