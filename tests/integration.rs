// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Integration tests for the Rust sensitive word filter

use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use tempfile::NamedTempFile;

use sensitive_filter_rust::sensitive_filter::{
    is_symbol, loader, FilterConfig, SensitiveFilter, SensitiveFilterBuilder,
};

/// Helper to write a wordlist to a temp file
fn wordlist_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn test_exact_single_match() {
    let filter = SensitiveFilter::from_keywords(["bad"]);
    assert_eq!(filter.filter("this is bad").as_deref(), Some("this is ***"));
}

#[test]
fn test_adjacent_overlapping_keywords() {
    let filter = SensitiveFilter::from_keywords(["ab", "bc"]);
    assert_eq!(filter.filter("abc").as_deref(), Some("***c"));
}

#[test]
fn test_symbol_interleaving_inside_match() {
    let filter = SensitiveFilter::from_keywords(["bad"]);
    assert_eq!(filter.filter("b-a-d").as_deref(), Some("***"));
}

#[test]
fn test_symbol_pass_through_outside_match() {
    let filter = SensitiveFilter::from_keywords(["bad"]);
    assert_eq!(filter.filter("!!!good!!!").as_deref(), Some("!!!good!!!"));
}

#[test]
fn test_prefix_sharing() {
    let filter = SensitiveFilter::from_keywords(["cat", "car"]);

    // root -> c -> a -> {t, r}
    assert_eq!(filter.trie().node_count(), 5);
    assert_eq!(
        filter.filter("my cat and car").as_deref(),
        Some("my *** and ***")
    );
}

#[test]
fn test_blank_input_returns_none() {
    let filter = SensitiveFilter::from_keywords(["bad"]);
    assert!(filter.filter("").is_none());
    assert!(filter.filter(" \r\n\t ").is_none());
}

#[test]
fn test_chinese_wordlist_from_file() {
    let file = wordlist_file(&["赌博", "嫖娼", "吸毒", "开票"]);
    let config = FilterConfig {
        wordlist_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let filter = SensitiveFilter::from_config(&config);

    assert_eq!(filter.keyword_count(), 4);
    let text = "这里可以赌博,可以嫖娼,可以吸毒,可以开票,哈哈哈!";
    assert_eq!(
        filter.filter(text).as_deref(),
        Some("这里可以***,可以***,可以***,可以***,哈哈哈!")
    );

    let decorated = "这里可以☆赌☆博☆,可以☆嫖☆娼☆,可以☆吸☆毒☆,可以☆开☆票☆,哈哈哈!";
    assert_eq!(
        filter.filter(decorated).as_deref(),
        Some("这里可以☆***☆,可以☆***☆,可以☆***☆,可以☆***☆,哈哈哈!")
    );
}

#[test]
fn test_config_file_with_wordlist() {
    let words = wordlist_file(&["spam", "scam"]);
    let mut config_file = NamedTempFile::new().unwrap();
    let json = serde_json::json!({
        "keywords": ["junk"],
        "wordlist_path": words.path(),
        "replacement": "[censored]",
    });
    config_file.write_all(json.to_string().as_bytes()).unwrap();

    let config = FilterConfig::load_from_file(config_file.path()).unwrap();
    let filter = SensitiveFilter::from_config(&config);

    assert_eq!(filter.keyword_count(), 3);
    assert_eq!(
        filter.filter("no spam, no s.c.a.m, no junk").as_deref(),
        Some("no [censored], no [censored], no [censored]")
    );
}

#[test]
fn test_unreadable_wordlist_falls_back_to_inline_keywords() {
    let config = FilterConfig {
        keywords: vec!["bad".to_string()],
        wordlist_path: Some("/definitely/not/here.txt".into()),
        ..Default::default()
    };
    let filter = SensitiveFilter::from_config(&config);

    assert_eq!(filter.keyword_count(), 1);
    assert_eq!(filter.filter("bad news").as_deref(), Some("*** news"));
}

#[test]
fn test_empty_filter_matches_nothing() {
    let filter = SensitiveFilter::from_config(&FilterConfig::default());
    assert_eq!(filter.keyword_count(), 0);
    assert_eq!(filter.filter("anything").as_deref(), Some("anything"));
}

#[test]
fn test_loader_counts_lines() {
    let file = wordlist_file(&["a", "", "b", "a"]);
    let mut builder = SensitiveFilterBuilder::new();
    let loaded = loader::load_wordlist_file(&mut builder, file.path()).unwrap();

    assert_eq!(loaded, 4);
    assert_eq!(builder.build().keyword_count(), 2);
}

#[test]
fn test_find_matches_agree_with_filter() {
    let filter = SensitiveFilter::from_keywords(["bad", "evil"]);
    let text = "bad, e-v-i-l and b.a.d things";
    let matches = filter.find_matches(text);

    let values: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(values, vec!["bad", "e-v-i-l", "b.a.d"]);
    assert_eq!(
        filter.filter(text).as_deref(),
        Some("***, *** and *** things")
    );
}

#[test]
fn test_shared_across_threads() {
    let filter = Arc::new(SensitiveFilter::from_keywords(["bad"]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || filter.filter(&format!("thread {} is bad", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, Some(format!("thread {} is ***", i)));
    }
}

proptest! {
    // Keywords are drawn from a letter the text never contains
    #[test]
    fn prop_no_match_is_identity(text in "[a-y0-9 ,.!?中文]{1,64}") {
        prop_assume!(!text.trim().is_empty());
        let filter = SensitiveFilter::from_keywords(["zz", "z"]);
        prop_assert_eq!(filter.filter(&text), Some(text.clone()));
    }

    #[test]
    fn prop_length_accounts_for_each_match(
        chunks in prop::collection::vec("[a-c ]{0,6}", 1..8)
    ) {
        // "xyz" cannot be formed from the filler alphabet, so matches never overlap
        let text = chunks.join("xyz");
        prop_assume!(!text.trim().is_empty());
        let filter = SensitiveFilter::from_keywords(["xyz"]);

        let matches = filter.find_matches(&text);
        prop_assert_eq!(matches.len(), chunks.len() - 1);

        let masked = filter.filter(&text).unwrap();
        let matched: usize = matches.iter().map(|m| m.end - m.start).sum();
        let expected = text.chars().count() - matched + matches.len() * "***".chars().count();
        prop_assert_eq!(masked.chars().count(), expected);
    }

    #[test]
    fn prop_symbols_outside_match_preserved(text in "[!@#$%^&*() ]{1,32}") {
        prop_assert!(text.chars().all(is_symbol));
        let filter = SensitiveFilter::from_keywords(["bad"]);
        match filter.filter(&text) {
            Some(out) => prop_assert_eq!(out, text),
            None => prop_assert!(text.trim().is_empty()),
        }
    }
}
