// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory frame fake for exercising the column port without a real
//! dataframe engine.

#![allow(dead_code)]

use std::collections::BTreeMap;

use deltar_core::Real;
use deltar_frame::{ColumnFrame, DefineError};

/// Errors the fake frame can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Row function or pre-flight check failed.
    Define(DefineError),
    /// An input column does not exist.
    UnknownColumn(String),
    /// The output column already exists.
    Duplicate(String),
    /// [`UntouchableFrame`] was asked to define a column.
    Touched,
}

impl From<DefineError> for FrameError {
    fn from(err: DefineError) -> Self {
        Self::Define(err)
    }
}

/// Eager column store: every column holds one `Vec<T>` per row.
#[derive(Debug, Clone)]
pub struct MemoryFrame<T> {
    rows: usize,
    columns: BTreeMap<String, Vec<Vec<T>>>,
}

impl<T: Real> MemoryFrame<T> {
    /// Empty frame with `rows` events.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: BTreeMap::new(),
        }
    }

    /// Adds a source column; `values` must have one entry per row.
    pub fn with_column(mut self, name: &str, values: Vec<Vec<T>>) -> Self {
        assert_eq!(values.len(), self.rows, "column {name} has wrong row count");
        self.columns.insert(name.to_owned(), values);
        self
    }

    /// Values of column `name`.
    pub fn column(&self, name: &str) -> Option<&[Vec<T>]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}

impl<T: Real> ColumnFrame<T> for MemoryFrame<T> {
    type Error = FrameError;

    fn define_column<F>(mut self, name: &str, inputs: &[&str], f: F) -> Result<Self, Self::Error>
    where
        F: Fn(&[&[T]]) -> Result<Vec<T>, DefineError> + Send + Sync + 'static,
    {
        if self.columns.contains_key(name) {
            return Err(FrameError::Duplicate(name.to_owned()));
        }
        let sources = inputs
            .iter()
            .map(|input| {
                self.columns
                    .get(*input)
                    .ok_or_else(|| FrameError::UnknownColumn((*input).to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut out = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let args: Vec<&[T]> = sources.iter().map(|col| col[row].as_slice()).collect();
            out.push(f(args.as_slice())?);
        }
        self.columns.insert(name.to_owned(), out);
        Ok(self)
    }
}

/// Frame that fails any column definition; proves a check ran first.
#[derive(Debug, Clone, Copy)]
pub struct UntouchableFrame;

impl ColumnFrame<f32> for UntouchableFrame {
    type Error = FrameError;

    fn define_column<F>(self, _name: &str, _inputs: &[&str], _f: F) -> Result<Self, Self::Error>
    where
        F: Fn(&[&[f32]]) -> Result<Vec<f32>, DefineError> + Send + Sync + 'static,
    {
        Err(FrameError::Touched)
    }
}

/// Two events of muons and jets, named the way NanoAOD-style skims name them.
pub fn muon_jet_frame() -> MemoryFrame<f32> {
    MemoryFrame::new(2)
        .with_column("good_Muon_eta", vec![vec![0.0], vec![]])
        .with_column("good_Muon_phi", vec![vec![0.0], vec![]])
        .with_column("good_Jet_eta", vec![vec![0.0, 1.0], vec![0.5]])
        .with_column("good_Jet_phi", vec![vec![0.0, 0.0], vec![1.0]])
}
