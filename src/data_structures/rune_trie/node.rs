// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Rune Trie.
//!
//! Each node owns its value slot and the map of codepoint edges to its
//! children. There are no parent links; the tree is strictly singly owned.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the Rune Trie.
///
/// A node is reached from its parent through exactly one codepoint edge.
/// Nodes without children are leaves and, unless they are the root, always
/// hold a value.
///
/// `Drop`, `Clone` and `Debug` are implemented by hand so that none of them
/// recurses once per level; a single long key builds a chain as deep as the
/// key has codepoints.
pub(crate) struct TrieNode<V> {
    /// Value stored for the key that ends at this node
    pub(crate) value: Option<V>,

    /// Map of codepoints to child nodes
    pub(crate) children: FnvHashMap<char, TrieNode<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node with no child map allocation.
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty trie node whose child map can hold `capacity`
    /// edges before reallocating.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            value: None,
            children: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child reached through `c`, allocating it if absent.
    pub(crate) fn child_or_insert(&mut self, c: char, capacity: usize) -> &mut TrieNode<V> {
        self.children
            .entry(c)
            .or_insert_with(|| TrieNode::with_capacity(capacity))
    }

    /// Follows `path` edge by edge, stopping at the first missing edge.
    pub(crate) fn descend<I>(&self, path: I) -> Option<&TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in path {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`TrieNode::descend`].
    pub(crate) fn descend_mut<I>(&mut self, path: I) -> Option<&mut TrieNode<V>>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in path {
            node = node.children.get_mut(&c)?;
        }
        Some(node)
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for TrieNode<V> {
    fn drop(&mut self) {
        // Detach descendants onto a heap stack so every node is dropped
        // with an empty child map.
        let mut pending: Vec<TrieNode<V>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<V: Clone> Clone for TrieNode<V> {
    fn clone(&self) -> Self {
        // Breadth-first listing of (source, parent index, edge). Parents
        // always precede their children, so attaching copies in reverse
        // order completes every subtree before it is moved into its parent.
        let mut order: Vec<(&TrieNode<V>, usize, char)> = vec![(self, 0, '\0')];
        let mut next = 0;
        while next < order.len() {
            let source = order[next].0;
            order.extend(source.children.iter().map(|(&c, child)| (child, next, c)));
            next += 1;
        }

        let mut copies: Vec<Option<TrieNode<V>>> = order
            .iter()
            .map(|(source, _, _)| {
                let mut copy = TrieNode::with_capacity(source.children.len());
                copy.value = source.value.clone();
                Some(copy)
            })
            .collect();

        for index in (1..order.len()).rev() {
            let (_, parent, c) = order[index];
            if let Some(copy) = copies[index].take() {
                if let Some(parent_copy) = copies[parent].as_mut() {
                    parent_copy.children.insert(c, copy);
                }
            }
        }

        copies[0].take().unwrap_or_default()
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .field("subtree_size", &self.subtree_size())
            .finish()
    }
}
