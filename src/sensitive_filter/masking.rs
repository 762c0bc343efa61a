// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Single-pass keyword scanning and masking over a frozen trie

use super::trie::Trie;

/// First code point of the East Asian script block treated as matchable text
const EAST_ASIAN_START: u32 = 0x2E80;
/// Last code point of the East Asian script block treated as matchable text
const EAST_ASIAN_END: u32 = 0x9FFF;

/// Returns true for characters that are transparent during matching
///
/// Anything that is neither ASCII alphanumeric nor inside the East Asian
/// ideograph range counts as a symbol. The check is on Unicode scalar
/// values, so characters outside the BMP are always symbols.
#[inline]
pub fn is_symbol(c: char) -> bool {
    let cp = c as u32;
    !c.is_ascii_alphanumeric() && !(EAST_ASIAN_START..=EAST_ASIAN_END).contains(&cp)
}

/// A keyword occurrence found by the scanner
///
/// `start` and `end` are character indices (end exclusive). `value` holds
/// the original characters, including any symbols swallowed mid-match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// Receives the scanner's decisions in text order
trait ScanSink {
    /// Characters passed through unchanged
    fn keep(&mut self, chars: &[char]);
    /// A keyword spanning `start..end` was matched
    fn replace(&mut self, chars: &[char], start: usize, end: usize);
}

/// Drive the three-cursor scan over `chars`
///
/// `begin` marks the first character of the current candidate, `position`
/// is the scan cursor and `node` tracks the trie path walked so far. On a
/// mismatch only `text[begin]` is emitted and scanning resumes at
/// `begin + 1`, so candidates are retried from every position.
fn scan<S: ScanSink>(trie: &Trie, chars: &[char], sink: &mut S) {
    let root = trie.root();
    let mut node = root;
    let mut begin = 0;
    let mut position = 0;

    while position < chars.len() {
        let c = chars[position];

        if is_symbol(c) {
            if node == root {
                sink.keep(&chars[position..=position]);
                begin += 1;
            }
            position += 1;
            continue;
        }

        match trie.child(node, c) {
            None => {
                sink.keep(&chars[begin..=begin]);
                begin += 1;
                position = begin;
                node = root;
            }
            Some(next) if trie.is_end(next) => {
                sink.replace(&chars[begin..=position], begin, position + 1);
                begin = position + 1;
                position = begin;
                node = root;
            }
            Some(next) => {
                node = next;
                position += 1;
            }
        }
    }

    // Unresolved partial match is emitted unmasked
    sink.keep(&chars[begin..]);
}

struct MaskedOutput<'r> {
    out: String,
    replacement: &'r str,
}

impl ScanSink for MaskedOutput<'_> {
    fn keep(&mut self, chars: &[char]) {
        self.out.extend(chars);
    }

    fn replace(&mut self, _chars: &[char], _start: usize, _end: usize) {
        self.out.push_str(self.replacement);
    }
}

#[derive(Default)]
struct SpanCollector {
    matches: Vec<KeywordMatch>,
}

impl ScanSink for SpanCollector {
    fn keep(&mut self, _chars: &[char]) {}

    fn replace(&mut self, chars: &[char], start: usize, end: usize) {
        self.matches.push(KeywordMatch {
            value: chars.iter().collect(),
            start,
            end,
        });
    }
}

/// Replace every keyword occurrence in `text` with `replacement`
///
/// Characters outside matched spans are copied through in order. Empty
/// input yields an empty string; blank handling is the caller's concern.
pub fn mask_keywords(trie: &Trie, text: &str, replacement: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut sink = MaskedOutput {
        out: String::with_capacity(text.len()),
        replacement,
    };
    scan(trie, &chars, &mut sink);
    sink.out
}

/// List the spans `mask_keywords` would replace, in text order
pub fn find_keyword_spans(trie: &Trie, text: &str) -> Vec<KeywordMatch> {
    let chars: Vec<char> = text.chars().collect();
    let mut sink = SpanCollector::default();
    scan(trie, &chars, &mut sink);
    sink.matches
}
