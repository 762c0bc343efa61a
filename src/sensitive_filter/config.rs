// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the sensitive word filter

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyDict;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{FilterError, Result};

/// Marker substituted for every matched keyword
pub const DEFAULT_REPLACEMENT: &str = "***";

/// Configuration for the sensitive word filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keywords loaded before the wordlist file
    pub keywords: Vec<String>,

    /// Optional wordlist, one keyword per line
    pub wordlist_path: Option<PathBuf>,

    /// Text used in place of each matched keyword
    pub replacement: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            wordlist_path: None,
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

impl FilterConfig {
    /// Parse a JSON document, filling missing fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FilterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject settings the engine cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.replacement.is_empty() {
            return Err(FilterError::InvalidConfig(
                "replacement must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Extract configuration from Python dict
    #[cfg(feature = "python")]
    pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let mut config = Self::default();

        if let Some(value) = dict.get_item("keywords")? {
            config.keywords = value.extract()?;
        }

        if let Some(value) = dict.get_item("wordlist_path")? {
            if !value.is_none() {
                let path: String = value.extract()?;
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        if let Some(value) = dict.get_item("replacement")? {
            config.replacement = value.extract()?;
        }

        config
            .validate()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;

        Ok(config)
    }
}
