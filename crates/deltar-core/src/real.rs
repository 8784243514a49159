// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Floating-point abstraction for the ΔR routines.
//!
//! Collections coming out of columnar event data are usually `f32`; fits and
//! offline studies tend to use `f64`. The calculator is written once against
//! [`Real`] and bound to either.

use core::fmt;
use core::ops::{Add, Mul, Neg, Rem, Sub};

/// IEEE-754 binary floating-point value usable by the ΔR routines.
///
/// Operators come from the standard traits so generic code reads like scalar
/// code. `%` must follow IEEE `fmod` semantics (result carries the sign of the
/// dividend), which both primitive floats do.
pub trait Real:
    Copy
    + fmt::Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Half a turn, π.
    const PI: Self;
    /// A full turn, 2π.
    const TAU: Self;

    /// Square root.
    fn sqrt(self) -> Self;
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const PI: Self = core::f32::consts::PI;
    const TAU: Self = core::f32::consts::TAU;

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const PI: Self = core::f64::consts::PI;
    const TAU: Self = core::f64::consts::TAU;

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}
