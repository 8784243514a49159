// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON-described ΔR column wiring.
//!
//! ```json
//! {
//!   "columns": [
//!     {
//!       "name": "MuonJet_DR",
//!       "eta_a": "good_Muon_eta",
//!       "eta_b": "good_Jet_eta",
//!       "phi_a": "good_Muon_phi",
//!       "phi_b": "good_Jet_phi"
//!     }
//!   ]
//! }
//! ```
//!
//! Callers own the bytes; nothing here touches the filesystem.

use std::collections::BTreeSet;

use deltar_core::Real;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::define::define_delta_r;
use crate::port::ColumnFrame;

/// Error type for column configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or a field of the wrong shape.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A column entry has an empty `name`.
    #[error("column #{index} has an empty name")]
    EmptyName {
        /// Position of the entry in `columns`.
        index: usize,
    },
    /// Two entries share a `name`.
    #[error("duplicate column name: {0}")]
    DuplicateName(String),
}

/// One derived ΔR column and the four columns it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeltaRColumn {
    /// Name of the column to define.
    pub name: String,
    /// Column holding collection A's pseudorapidities.
    pub eta_a: String,
    /// Column holding collection B's pseudorapidities.
    pub eta_b: String,
    /// Column holding collection A's azimuths.
    pub phi_a: String,
    /// Column holding collection B's azimuths.
    pub phi_b: String,
}

impl DeltaRColumn {
    /// Builds an entry from its five column names.
    pub fn new(
        name: impl Into<String>,
        eta_a: impl Into<String>,
        eta_b: impl Into<String>,
        phi_a: impl Into<String>,
        phi_b: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            eta_a: eta_a.into(),
            eta_b: eta_b.into(),
            phi_a: phi_a.into(),
            phi_b: phi_b.into(),
        }
    }

    /// Input column names in the order [`define_delta_r`] expects.
    pub fn inputs(&self) -> [&str; 4] {
        [
            self.eta_a.as_str(),
            self.eta_b.as_str(),
            self.phi_a.as_str(),
            self.phi_b.as_str(),
        ]
    }
}

/// A set of ΔR columns to define on a frame, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeltaRConfig {
    /// Columns to define.
    #[serde(default)]
    pub columns: Vec<DeltaRColumn>,
}

impl DeltaRConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON blob.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects empty and duplicate column names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for (index, column) in self.columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ConfigError::DuplicateName(column.name.clone()));
            }
        }
        Ok(())
    }

    /// Defines every configured column on `frame`, stopping at the first
    /// failure.
    pub fn define_all<T, D>(&self, frame: D) -> Result<D, D::Error>
    where
        T: Real,
        D: ColumnFrame<T>,
    {
        debug!(count = self.columns.len(), "defining configured delta R columns");
        self.columns.iter().try_fold(frame, |frame, column| {
            define_delta_r::<T, D, &str>(frame, &column.name, &column.inputs())
        })
    }
}
