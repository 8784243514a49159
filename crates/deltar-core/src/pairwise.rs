// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Pairwise and element-wise ΔR over whole collections.

use tracing::{debug, trace};

use crate::angle::delta_r;
use crate::collection::{Collection, Side};
use crate::combinations::combinations;
use crate::error::DeltaRError;
use crate::real::Real;

/// ΔR between every particle of collection A and every particle of
/// collection B.
///
/// `eta_a`/`phi_a` describe A (length `n`), `eta_b`/`phi_b` describe B
/// (length `m`). The result has `n × m` entries; `out[i * m + j]` is the
/// separation of `A[i]` and `B[j]`. Either collection may be empty, in which
/// case the result is empty.
///
/// A and B are treated positionally even when they are the same event
/// collection passed twice; the diagonal is then all zeros.
///
/// # Errors
/// [`DeltaRError::InvalidInput`] if `eta_a.len() != phi_a.len()` or
/// `eta_b.len() != phi_b.len()`. A is checked before B.
pub fn compute_delta_r<T: Real>(
    eta_a: &[T],
    eta_b: &[T],
    phi_a: &[T],
    phi_b: &[T],
) -> Result<Vec<T>, DeltaRError> {
    let a = Collection::new(Side::A, eta_a, phi_a)?;
    let b = Collection::new(Side::B, eta_b, phi_b)?;
    Ok(pairwise(&a, &b))
}

/// Infallible core of [`compute_delta_r`] over already-validated collections.
pub fn pairwise<T: Real>(a: &Collection<'_, T>, b: &Collection<'_, T>) -> Vec<T> {
    let pairs = combinations(a.len(), b.len());
    trace!(n = a.len(), m = b.len(), "pairwise delta R");
    let (eta_a, phi_a) = (a.eta(), a.phi());
    let (eta_b, phi_b) = (b.eta(), b.phi());
    pairs
        .map(|(i, j)| delta_r(eta_a[i], eta_b[j], phi_a[i], phi_b[j]))
        .collect()
}

/// ΔR between aligned entries: `out[k]` compares `(eta1[k], phi1[k])` with
/// `(eta2[k], phi2[k])`.
///
/// # Errors
/// [`DeltaRError::UnalignedOperands`] unless all four slices have the same
/// length.
pub fn delta_r_elementwise<T: Real>(
    eta1: &[T],
    eta2: &[T],
    phi1: &[T],
    phi2: &[T],
) -> Result<Vec<T>, DeltaRError> {
    let lengths = [eta1.len(), eta2.len(), phi1.len(), phi2.len()];
    if lengths.iter().any(|&len| len != lengths[0]) {
        debug!(?lengths, "rejecting unaligned element-wise operands");
        return Err(DeltaRError::UnalignedOperands { lengths });
    }
    Ok(eta1
        .iter()
        .zip(eta2)
        .zip(phi1.iter().zip(phi2))
        .map(|((&e1, &e2), (&p1, &p2))| delta_r(e1, e2, p1, p2))
        .collect())
}
