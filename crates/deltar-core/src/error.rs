// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use crate::collection::Side;

/// Errors raised by the ΔR routines.
///
/// Both variants are precondition failures detected before any value is
/// computed; no partial output is ever returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeltaRError {
    /// The η and φ sequences describing one collection differ in length.
    #[error("invalid input: collection {side} has {eta_len} eta values but {phi_len} phi values")]
    InvalidInput {
        /// Which collection was malformed.
        side: Side,
        /// Length of the η sequence.
        eta_len: usize,
        /// Length of the φ sequence.
        phi_len: usize,
    },
    /// Element-wise operands are not all the same length.
    #[error("invalid input: element-wise operands have lengths {lengths:?}")]
    UnalignedOperands {
        /// Lengths of `eta1`, `eta2`, `phi1`, `phi2`, in argument order.
        lengths: [usize; 4],
    },
}
