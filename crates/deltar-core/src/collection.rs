// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::debug;

use crate::angle::AngularCoord;
use crate::error::DeltaRError;
use crate::real::Real;

/// Role a collection plays in a pairwise comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    /// First operand; indexes the rows of the output.
    A,
    /// Second operand; indexes the columns of the output.
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Borrowed view of one particle collection as parallel η/φ slices.
///
/// Invariant: `eta.len() == phi.len()`, checked once in [`Collection::new`].
#[derive(Debug, Copy, Clone)]
pub struct Collection<'a, T> {
    side: Side,
    eta: &'a [T],
    phi: &'a [T],
}

impl<'a, T: Real> Collection<'a, T> {
    /// Pairs up `eta` and `phi` for `side`, rejecting unequal lengths.
    pub fn new(side: Side, eta: &'a [T], phi: &'a [T]) -> Result<Self, DeltaRError> {
        if eta.len() != phi.len() {
            debug!(
                %side,
                eta_len = eta.len(),
                phi_len = phi.len(),
                "rejecting misaligned collection"
            );
            return Err(DeltaRError::InvalidInput {
                side,
                eta_len: eta.len(),
                phi_len: phi.len(),
            });
        }
        Ok(Self { side, eta, phi })
    }

    /// The role this collection was built for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.eta.len()
    }

    /// `true` when the collection holds no particles.
    pub fn is_empty(&self) -> bool {
        self.eta.is_empty()
    }

    /// Pseudorapidities.
    pub fn eta(&self) -> &'a [T] {
        self.eta
    }

    /// Azimuths.
    pub fn phi(&self) -> &'a [T] {
        self.phi
    }

    /// Coordinate pair at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<AngularCoord<T>> {
        Some(AngularCoord::new(
            *self.eta.get(index)?,
            *self.phi.get(index)?,
        ))
    }

    /// Iterates the collection as coordinate pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = AngularCoord<T>> + 'a {
        self.eta
            .iter()
            .zip(self.phi)
            .map(|(&eta, &phi)| AngularCoord::new(eta, phi))
    }
}
