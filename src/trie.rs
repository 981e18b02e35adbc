//! The prefix tree that indexes the DUCET: codepoint sequences (single codepoints as
//! well as multi-codepoint contractions) to collation-element arrays.
//!
//! Lookup always wants the *longest* bound prefix of a query sequence, so nodes don't
//! just record whether a key exists — each node that terminates a loaded entry carries
//! its `Cea` directly, and the deepest such node seen during descent wins.

use rustc_hash::FxHashMap;

use crate::types::Cea;

#[derive(Debug, Default)]
struct Node {
    children: Option<FxHashMap<u32, Box<Node>>>,
    value: Option<Cea>,
}

/// Maps non-empty codepoint sequences to collation-element arrays.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `key` with `value`. `key` must be non-empty. If `key` already has a
    /// bound value, the new one replaces it (last loaded wins).
    pub fn insert(&mut self, key: &[u32], value: Cea) {
        debug_assert!(!key.is_empty(), "Trie keys must be non-empty codepoint sequences");

        let mut node = &mut self.root;
        for &cp in key {
            node = node
                .children
                .get_or_insert_with(FxHashMap::default)
                .entry(cp)
                .or_insert_with(|| Box::new(Node::default()));
        }
        node.value = Some(value);
    }

    /// Finds the longest prefix of `query` that terminates at a bound node.
    ///
    /// Returns `(matched_len, value)`: `matched_len` is the length of that prefix (`0`
    /// if no bound prefix exists, including when `query` is empty), and `value` is the
    /// `Cea` bound there, cloned out since `Cea` is a small inline buffer. The caller
    /// can recover the matched prefix and remainder as `query[..matched_len]` and
    /// `query[matched_len..]`.
    pub fn longest_prefix_match(&self, query: &[u32]) -> (usize, Option<Cea>) {
        let mut node = &self.root;
        let mut best_len = 0;
        let mut best_value = None;

        for (i, &cp) in query.iter().enumerate() {
            let Some(children) = &node.children else { break };
            let Some(child) = children.get(&cp) else { break };
            node = child;
            if let Some(value) = &node.value {
                best_len = i + 1;
                best_value = Some(value.clone());
            }
        }

        (best_len, best_value)
    }

    /// True if the exact sequence `key` (no more, no less) is bound to a value.
    ///
    /// Used by the discontiguous-match step of the extractor, which needs to know
    /// whether `S ++ [C]` is bound *exactly*, not merely whether it is a prefix of
    /// something longer.
    pub fn get_exact(&self, key: &[u32]) -> Option<Cea> {
        let mut node = &self.root;
        for cp in key {
            let children = node.children.as_ref()?;
            node = children.get(cp)?;
        }
        node.value.clone()
    }
}
