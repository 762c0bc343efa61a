// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Rust sensitive word filter for MCP Gateway
// Optional PyO3 bindings for Python integration (feature "python")

// PyO3 macro expansions emit impls outside the annotated items
#![cfg_attr(feature = "python", allow(non_local_definitions))]

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod sensitive_filter;

/// Python module: sensitive_filter_rust
///
/// Trie-based sensitive word masking.
///
/// # Examples
///
/// ```python
/// from sensitive_filter_rust import SensitiveFilterRust
///
/// # Load keywords inline and from a wordlist file
/// config = {
///     "keywords": ["gamble"],
///     "wordlist_path": "sensitive-words.txt",
/// }
/// sf = SensitiveFilterRust(config)
///
/// # Symbols inside a match are swallowed with it
/// print(sf.filter("let's g*a*m*b*l*e!"))  # "let's ***!"
///
/// # Inspect matches without masking
/// print(sf.find_matches("gamble"))  # [{"value": "gamble", "start": 0, "end": 6}]
/// ```
#[cfg(feature = "python")]
#[pymodule]
fn sensitive_filter_rust(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<sensitive_filter::SensitiveFilterRust>()?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Trie-based sensitive word masking")?;

    Ok(())
}
