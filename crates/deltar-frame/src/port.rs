// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Column-definition port implemented by tabular pipelines.

use crate::define::DefineError;

/// A table that can grow a new column computed row-wise from existing ones.
///
/// For each row the implementation gathers the values of `inputs` (each a
/// variable-length sequence of `T`, in the order given) and calls `f` with
/// them; the returned vector becomes that row's value in column `name`.
/// Evaluation may be eager or deferred; `f` is `'static` so it can be stored.
pub trait ColumnFrame<T>: Sized {
    /// Error surfaced by the frame. Row-function failures arrive as
    /// [`DefineError`] and must be convertible.
    type Error: From<DefineError>;

    /// Returns the frame extended with column `name`.
    fn define_column<F>(self, name: &str, inputs: &[&str], f: F) -> Result<Self, Self::Error>
    where
        F: Fn(&[&[T]]) -> Result<Vec<T>, DefineError> + Send + Sync + 'static;
}
