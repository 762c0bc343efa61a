// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Sensitive word filter engine: load phase (builder) and query phase (filter)

use log::{debug, error, warn};

use super::config::{FilterConfig, DEFAULT_REPLACEMENT};
use super::loader;
use super::masking::{self, KeywordMatch};
use super::trie::{Trie, TrieBuilder};

/// Collects keywords before the filter is frozen
///
/// # Example
/// ```
/// use sensitive_filter_rust::sensitive_filter::SensitiveFilterBuilder;
///
/// let mut builder = SensitiveFilterBuilder::new();
/// builder.load_keyword("bad");
/// let filter = builder.build();
///
/// assert_eq!(filter.filter("this is bad").as_deref(), Some("this is ***"));
/// ```
#[derive(Debug, Clone)]
pub struct SensitiveFilterBuilder {
    trie: TrieBuilder,
    replacement: String,
}

impl Default for SensitiveFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitiveFilterBuilder {
    pub fn new() -> Self {
        Self {
            trie: TrieBuilder::new(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }

    /// Override the replacement marker
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    /// Add one keyword to the trie
    ///
    /// Empty keywords are ignored and duplicates are harmless.
    pub fn load_keyword(&mut self, keyword: &str) {
        self.trie.insert(keyword);
    }

    pub fn load_keywords<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.load_keyword(keyword.as_ref());
        }
    }

    /// Finish loading and produce an immutable filter
    pub fn build(self) -> SensitiveFilter {
        let trie = self.trie.build();
        debug!(
            "Built sensitive filter: {} keywords, {} trie nodes",
            trie.keyword_count(),
            trie.node_count()
        );
        if trie.is_empty() {
            warn!("Sensitive filter built with no keywords; nothing will be masked");
        }
        SensitiveFilter {
            trie,
            replacement: self.replacement,
        }
    }
}

/// Immutable keyword masker
///
/// Holds no interior mutability, so a single instance can be shared across
/// threads by reference or `Arc` once built.
#[derive(Debug, Clone)]
pub struct SensitiveFilter {
    trie: Trie,
    replacement: String,
}

impl SensitiveFilter {
    pub fn builder() -> SensitiveFilterBuilder {
        SensitiveFilterBuilder::new()
    }

    /// Build a filter from a fixed keyword list with the default marker
    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = SensitiveFilterBuilder::new();
        builder.load_keywords(keywords);
        builder.build()
    }

    /// Build a filter from configuration
    ///
    /// Inline keywords are loaded first, then the wordlist file. A wordlist
    /// that cannot be read is logged and skipped; keywords loaded before the
    /// failure are kept, so the filter is always usable (possibly empty).
    /// An invalid replacement is logged and replaced by [`DEFAULT_REPLACEMENT`].
    pub fn from_config(config: &FilterConfig) -> Self {
        let replacement = match config.validate() {
            Ok(()) => config.replacement.clone(),
            Err(e) => {
                warn!("{}; using '{}'", e, DEFAULT_REPLACEMENT);
                DEFAULT_REPLACEMENT.to_string()
            }
        };

        let mut builder = SensitiveFilterBuilder::new().with_replacement(replacement);
        builder.load_keywords(&config.keywords);

        if let Some(path) = &config.wordlist_path {
            if let Err(e) = loader::load_wordlist_file(&mut builder, path) {
                error!("Failed to load sensitive word list: {}", e);
            }
        }

        builder.build()
    }

    /// Mask every keyword occurrence in `text`
    ///
    /// # Returns
    /// `None` when `text` is empty or whitespace only, otherwise the masked
    /// copy with each match replaced by the marker.
    pub fn filter(&self, text: &str) -> Option<String> {
        if is_blank(text) {
            return None;
        }
        Some(masking::mask_keywords(&self.trie, text, &self.replacement))
    }

    /// Report the spans `filter` would mask, in order
    pub fn find_matches(&self, text: &str) -> Vec<KeywordMatch> {
        if is_blank(text) {
            return Vec::new();
        }
        masking::find_keyword_spans(&self.trie, text)
    }

    pub fn contains_sensitive(&self, text: &str) -> bool {
        !self.find_matches(text).is_empty()
    }

    pub fn keyword_count(&self) -> usize {
        self.trie.keyword_count()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

/// Characters that make a text count as blank
///
/// Space, line and paragraph separators except the no-break spaces
/// (U+00A0, U+2007, U+202F), plus the controls U+0009..U+000D and the
/// information separators U+001C..U+001F. Unlike `char::is_whitespace`
/// this excludes NEL (U+0085) and the no-break spaces.
fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{001C}'..='\u{001F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}
