// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Azimuthal wraparound and single-pair ΔR.

use crate::real::Real;

/// Reduces an azimuthal difference into the half-open range `(−π, π]`.
///
/// The remainder by 2π is taken first, so differences spanning several turns
/// land on the shortest signed arc as well. `−π` maps to `+π`. NaN and
/// infinite inputs yield NaN.
pub fn wrap_phi<T: Real>(dphi: T) -> T {
    let r = dphi % T::TAU;
    if r > T::PI {
        r - T::TAU
    } else if r <= -T::PI {
        r + T::TAU
    } else {
        r
    }
}

/// Shortest signed azimuthal separation `phi1 − phi2`, wrapped into `(−π, π]`.
pub fn delta_phi<T: Real>(phi1: T, phi2: T) -> T {
    wrap_phi(phi1 - phi2)
}

/// ΔR between two directions given as separate η and φ components.
pub fn delta_r<T: Real>(eta1: T, eta2: T, phi1: T, phi2: T) -> T {
    let deta = eta1 - eta2;
    let dphi = delta_phi(phi1, phi2);
    (deta * deta + dphi * dphi).sqrt()
}

/// A particle direction in (η, φ) space.
///
/// Conventions:
/// - `eta` is pseudorapidity, unbounded.
/// - `phi` is azimuth in radians; any real value is accepted and treated
///   modulo 2π.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AngularCoord<T> {
    /// Pseudorapidity.
    pub eta: T,
    /// Azimuth in radians.
    pub phi: T,
}

impl<T: Real> AngularCoord<T> {
    /// Creates a coordinate pair.
    pub const fn new(eta: T, phi: T) -> Self {
        Self { eta, phi }
    }

    /// ΔR from `self` to `other`.
    pub fn delta_r(&self, other: &Self) -> T {
        delta_r(self.eta, other.eta, self.phi, other.phi)
    }

    /// Wrapped azimuthal separation from `other` to `self`.
    pub fn delta_phi(&self, other: &Self) -> T {
        delta_phi(self.phi, other.phi)
    }
}

impl<T> From<(T, T)> for AngularCoord<T> {
    fn from((eta, phi): (T, T)) -> Self {
        Self { eta, phi }
    }
}
