// Copyright 2026 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float methods from `std` that are missing from `core`, routed through
//! `libm` for `no_std` builds. Mirrors Kurbo's own shim.

pub(crate) trait FloatFuncs: Sized {
    /// Absolute value.
    fn abs(self) -> Self;
}

impl FloatFuncs for f64 {
    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }
}
