// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use deltar_core::{compute_delta_r, DeltaRError, Real};
use thiserror::Error;
use tracing::debug;

use crate::port::ColumnFrame;

/// Number of input columns a ΔR column reads: `eta_a, eta_b, phi_a, phi_b`.
pub const DELTA_R_ARITY: usize = 4;

/// Errors raised while wiring or evaluating a derived ΔR column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefineError {
    /// The new column was given an empty name.
    #[error("column name must not be empty")]
    EmptyName,
    /// Wrong number of input columns.
    #[error("delta R needs {expected} input columns (eta_a, eta_b, phi_a, phi_b), got {got}")]
    Arity {
        /// Required number of inputs.
        expected: usize,
        /// Number supplied.
        got: usize,
    },
    /// A row's collections were malformed.
    #[error(transparent)]
    Compute(#[from] DeltaRError),
}

/// Defines column `name` on `frame` as the pairwise ΔR of the four columns
/// in `vars`, given in the order `[eta_a, eta_b, phi_a, phi_b]`.
///
/// Name and arity are checked before the frame is touched. Per-row length
/// mismatches are reported by the frame as [`DefineError::Compute`] when it
/// evaluates the column.
pub fn define_delta_r<T, D, S>(frame: D, name: &str, vars: &[S]) -> Result<D, D::Error>
where
    T: Real,
    D: ColumnFrame<T>,
    S: AsRef<str>,
{
    if name.is_empty() {
        return Err(DefineError::EmptyName.into());
    }
    if vars.len() != DELTA_R_ARITY {
        return Err(DefineError::Arity {
            expected: DELTA_R_ARITY,
            got: vars.len(),
        }
        .into());
    }
    let inputs: Vec<&str> = vars.iter().map(AsRef::as_ref).collect();
    debug!(column = name, ?inputs, "defining delta R column");
    frame.define_column(name, &inputs, delta_r_row::<T>)
}

fn delta_r_row<T: Real>(args: &[&[T]]) -> Result<Vec<T>, DefineError> {
    match *args {
        [eta_a, eta_b, phi_a, phi_b] => {
            compute_delta_r(eta_a, eta_b, phi_a, phi_b).map_err(DefineError::from)
        }
        _ => Err(DefineError::Arity {
            expected: DELTA_R_ARITY,
            got: args.len(),
        }),
    }
}
