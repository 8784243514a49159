// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Row-major cross product of two index ranges.

use core::iter::FusedIterator;

/// Enumerates every `(i, j)` with `i < n` and `j < m`, `j` varying fastest.
///
/// The sequence is a plain Cartesian product: pairs are ordered, never
/// deduplicated, and `i == j` is not skipped.
#[derive(Debug, Clone)]
pub struct CrossProduct {
    n: usize,
    m: usize,
    next: usize,
    end: usize,
}

/// Returns the row-major cross product of `0..n` and `0..m`.
pub fn combinations(n: usize, m: usize) -> CrossProduct {
    // `end == 0` whenever `m == 0`, so `next` never divides by zero.
    CrossProduct {
        n,
        m,
        next: 0,
        end: n.saturating_mul(m),
    }
}

impl CrossProduct {
    /// Length of the first index range.
    pub fn rows(&self) -> usize {
        self.n
    }

    /// Length of the second index range.
    pub fn cols(&self) -> usize {
        self.m
    }
}

impl Iterator for CrossProduct {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some((k / self.m, k % self.m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for CrossProduct {}

impl FusedIterator for CrossProduct {}
