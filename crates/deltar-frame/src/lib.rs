// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! deltar-frame: register pairwise ΔR as a derived column.
//!
//! The crate owns no table implementation. It defines the [`ColumnFrame`]
//! port (a single "define a column from other columns" capability) and the
//! [`define_delta_r`] helper that plugs [`deltar_core::compute_delta_r`] into
//! it. Column wiring can also come from JSON via [`DeltaRConfig`].
#![forbid(unsafe_code)]

mod config;
mod define;
mod port;

pub use config::{ConfigError, DeltaRColumn, DeltaRConfig};
pub use define::{define_delta_r, DefineError, DELTA_R_ARITY};
pub use port::ColumnFrame;
