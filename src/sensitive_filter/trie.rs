// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Arena-backed prefix tree for keyword storage
// Nodes live in a Vec and refer to children by index; the root is index 0.

use std::collections::HashMap;

/// Index of a node inside a trie arena
pub type NodeId = usize;

/// Index of the root node in every arena
pub const ROOT: NodeId = 0;

/// A single trie node
#[derive(Debug, Clone, Default)]
struct TrieNode {
    is_keyword_end: bool,
    children: HashMap<char, NodeId>,
}

/// Mutable trie used during the load phase
///
/// Call [`TrieBuilder::build`] once every keyword is inserted to obtain a
/// read-only [`Trie`] suitable for scanning.
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    /// Create a builder holding only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Allocate a fresh, unlinked node
    pub fn new_node(&mut self) -> NodeId {
        self.nodes.push(TrieNode::default());
        self.nodes.len() - 1
    }

    /// Look up the transition for `c` out of `node`
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node].children.get(&c).copied()
    }

    /// Insert or overwrite the transition for `c` out of `node`
    pub fn add_child(&mut self, node: NodeId, c: char, child: NodeId) {
        self.nodes[node].children.insert(c, child);
    }

    pub fn is_end(&self, node: NodeId) -> bool {
        self.nodes[node].is_keyword_end
    }

    pub fn mark_end(&mut self, node: NodeId) {
        self.nodes[node].is_keyword_end = true;
    }

    /// Insert a keyword, extending shared prefixes
    ///
    /// Returns `false` for the empty string, which leaves the trie unchanged.
    pub fn insert(&mut self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return false;
        }

        let mut node = ROOT;
        for c in keyword.chars() {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.new_node();
                    self.add_child(node, c, next);
                    next
                }
            };
        }

        self.mark_end(node);
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze the arena into a query-only trie
    pub fn build(self) -> Trie {
        let keyword_count = self.nodes.iter().filter(|n| n.is_keyword_end).count();
        Trie {
            nodes: self.nodes.into_boxed_slice(),
            keyword_count,
        }
    }
}

/// Read-only trie produced by [`TrieBuilder::build`]
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Box<[TrieNode]>,
    keyword_count: usize,
}

impl Trie {
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Look up the transition for `c` out of `node`
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node].children.get(&c).copied()
    }

    #[inline]
    pub fn is_end(&self, node: NodeId) -> bool {
        self.nodes[node].is_keyword_end
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct keywords stored
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    pub fn is_empty(&self) -> bool {
        self.keyword_count == 0
    }

    /// Walk `word` from the root and report whether it was loaded as a keyword
    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = ROOT;
        for c in word.chars() {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node != ROOT && self.is_end(node)
    }
}
