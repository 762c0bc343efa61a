// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Error types for the sensitive word filter

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading keywords or configuration.
///
/// Scanning itself is infallible; only the I/O-facing collaborators
/// (wordlist reader, config loader) produce these.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read wordlist: {0}")]
    Read(#[from] io::Error),

    #[error("invalid filter config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid filter config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
