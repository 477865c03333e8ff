// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float methods from `std` that are missing from `core`, routed through
//! `libm` for `no_std` builds. Mirrors Kurbo's own shim.

pub(crate) trait FloatFuncs: Sized {
    /// Absolute value.
    fn abs(self) -> Self;

    /// Raise to a floating point power.
    fn powf(self, n: Self) -> Self;

    /// Round half away from zero.
    fn round(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;
}

impl FloatFuncs for f32 {
    #[inline]
    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        libm::powf(self, n)
    }

    #[inline]
    fn round(self) -> Self {
        libm::roundf(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
}

impl FloatFuncs for f64 {
    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    #[inline]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}
