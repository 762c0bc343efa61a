// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sensitive Word Filter - Rust Implementation
//
// Keyword masking using:
// - Arena-backed trie shared across all keywords
// - Single left-to-right scan with symbol-transparent matching
// - Builder/filter split so the trie is immutable while serving

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod masking;
pub mod trie;

#[cfg(feature = "python")]
pub mod bindings;

#[cfg(feature = "python")]
pub use bindings::SensitiveFilterRust;
pub use config::{FilterConfig, DEFAULT_REPLACEMENT};
pub use error::FilterError;
pub use filter::{SensitiveFilter, SensitiveFilterBuilder};
pub use masking::{is_symbol, KeywordMatch};
