// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Wordlist loading: one keyword per line from a reader or file

use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::{FilterError, Result};
use super::filter::SensitiveFilterBuilder;

/// Load every line of `reader` as a keyword
///
/// Line terminators are stripped, nothing else is trimmed. Lines read
/// before an I/O error stay loaded in `builder`; the error is returned
/// so the caller can decide how to report it.
///
/// # Returns
/// Number of lines consumed
pub fn load_wordlist<R: BufRead>(builder: &mut SensitiveFilterBuilder, reader: R) -> Result<usize> {
    let mut loaded = 0;
    for line in reader.lines() {
        builder.load_keyword(&line?);
        loaded += 1;
    }
    debug!("Loaded {} wordlist lines", loaded);
    Ok(loaded)
}

/// Load a wordlist file into `builder`
pub fn load_wordlist_file<P: AsRef<Path>>(
    builder: &mut SensitiveFilterBuilder,
    path: P,
) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FilterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let loaded = load_wordlist(builder, BufReader::new(file)).map_err(|e| match e {
        FilterError::Read(source) => FilterError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    info!("Loaded {} keywords from {}", loaded, path.display());
    Ok(loaded)
}
