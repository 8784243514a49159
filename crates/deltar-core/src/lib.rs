// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! deltar-core: pairwise angular separation between particle collections.
//!
//! ΔR is the Euclidean distance in (η, φ) space with φ taken modulo 2π:
//!
//! ```text
//! ΔR = sqrt(Δη² + Δφ²),   Δφ wrapped into (−π, π]
//! ```
//!
//! The central entry point is [`compute_delta_r`], which compares every
//! element of collection A against every element of collection B and returns
//! the `n × m` results in row-major order (`out[i * m + j]` is pair `(i, j)`).
//!
//! ```
//! use deltar_core::compute_delta_r;
//!
//! let out = compute_delta_r(&[0.0_f64], &[0.0, 1.0], &[0.0], &[0.0, 0.0])?;
//! assert_eq!(out, vec![0.0, 1.0]);
//! # Ok::<(), deltar_core::DeltaRError>(())
//! ```
//!
//! Everything here is pure and allocation-light: inputs are borrowed, the
//! only allocation is the returned vector.
#![forbid(unsafe_code)]

mod angle;
mod collection;
mod combinations;
mod error;
mod pairwise;
mod real;

pub use angle::{delta_phi, delta_r, wrap_phi, AngularCoord};
pub use collection::{Collection, Side};
pub use combinations::{combinations, CrossProduct};
pub use error::DeltaRError;
pub use pairwise::{compute_delta_r, delta_r_elementwise, pairwise};
pub use real::Real;
