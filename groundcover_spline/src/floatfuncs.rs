// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float methods from `std` that are missing from `core`, routed through
//! `libm` for `no_std` builds. Mirrors Kurbo's own shim.

pub(crate) trait FloatFuncs: Sized {
    /// Largest integer less than or equal to the value.
    fn floor(self) -> Self;

    /// Raise to a floating point power.
    fn powf(self, n: Self) -> Self;
}

impl FloatFuncs for f64 {
    #[inline]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline]
    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }
}
