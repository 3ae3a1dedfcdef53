// Copyright (c) 2025 Rune Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rune Trie Implementation
//!
//! A prefix tree keyed one Unicode codepoint per edge, mapping string keys
//! to values of any type `V`.
//!
//! # Features
//!
//! - O(k) lookups, insertions and deletions where k is the key length in codepoints
//! - Deletion prunes every node that no longer leads to a value
//! - Unordered depth-first enumeration of all entries
//! - Ordered root-to-key enumeration for longest-prefix matching
//!
//! # Example
//!
//! ```
//! use rune_trie_lib::data_structures::rune_trie::RuneTrie;
//!
//! let mut routes = RuneTrie::new();
//! assert!(routes.put("/api", "api"));
//! assert!(routes.put("/api/v1", "v1"));
//!
//! assert_eq!(routes.get("/api"), Some(&"api"));
//! assert_eq!(
//!     routes.longest_prefix_match("/api/v1/users"),
//!     Some(("/api/v1", &"v1"))
//! );
//!
//! assert!(routes.delete("/api/v1"));
//! assert_eq!(routes.get("/api/v1"), None);
//! ```
//!
//! # Stored values
//!
//! Presence is tracked separately from the payload: any stored `V` counts as
//! an entry, including values such as `0`, `()` or an empty string.

mod node;

use std::convert::Infallible;

use tracing::trace;

use crate::config::trie::TrieConfig;
use node::TrieNode;

/// A trie mapping codepoint sequences to values.
///
/// Every node other than the root exists only because it holds a value or
/// leads to a node that does. Nodes are allocated lazily by [`RuneTrie::put`]
/// and released as soon as [`RuneTrie::delete`] makes them unnecessary.
///
/// The structure has no internal synchronization. Mutations take `&mut self`,
/// so concurrent use needs an external lock.
#[derive(Debug, Clone)]
pub struct RuneTrie<V> {
    /// The root node, addressed by the empty key
    root: TrieNode<V>,

    /// Number of stored values
    len: usize,

    /// Configuration options
    config: TrieConfig,
}

impl<V> RuneTrie<V> {
    /// Creates a new empty `RuneTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `RuneTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::with_capacity(config.children_capacity),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Retrieves the value stored at `key`.
    ///
    /// Returns `None` both when no node exists for the key and when the node
    /// exists only as an interior node.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        self.root.descend(key.as_ref().chars())?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored at `key`.
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: AsRef<str>,
    {
        self.root.descend_mut(key.as_ref().chars())?.value.as_mut()
    }

    /// Checks if a value is stored at `key`.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Inserts a value at `key`, replacing any existing value.
    ///
    /// Missing nodes along the key are created one per codepoint. The empty
    /// key stores the value on the root.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// `true` if the key held no value before, `false` if a value was replaced.
    pub fn put<K>(&mut self, key: K, value: V) -> bool
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let capacity = self.config.children_capacity;

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.child_or_insert(c, capacity);
        }

        let is_new = node.value.is_none();
        node.value = Some(value);
        if is_new {
            self.len += 1;
        }

        trace!(key_len = key.len(), is_new, "rune trie put");
        is_new
    }

    /// Removes the value stored at `key` and prunes nodes left without purpose.
    ///
    /// The node's value is cleared whether or not one was present. If the
    /// node is then a leaf, it is unlinked together with every ancestor that
    /// has no other child and no value of its own. The root is never removed.
    ///
    /// # Returns
    ///
    /// `true` if a node was reachable for `key`, even one without a value.
    /// `false` if the key's path breaks off, in which case nothing changes.
    pub fn delete<K>(&mut self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();

        // Edges taken from the root, and the depth of the deepest ancestor that
        // keeps another child or a value. Pruning stops at that ancestor.
        let mut edges = Vec::new();
        let mut keep = 0;

        let mut node = &mut self.root;
        for c in key.chars() {
            if !edges.is_empty() && (node.children.len() > 1 || node.value.is_some()) {
                keep = edges.len();
            }
            edges.push(c);
            node = match node.children.get_mut(&c) {
                Some(child) => child,
                None => return false,
            };
        }

        let had_value = node.value.take().is_some();
        if had_value {
            self.len -= 1;
        }

        let mut pruned = 0;
        if node.is_leaf() && !edges.is_empty() {
            if let Some(ancestor) = self.root.descend_mut(edges[..keep].iter().copied()) {
                if ancestor.children.remove(&edges[keep]).is_some() {
                    pruned = edges.len() - keep;
                }
            }
        }

        trace!(key_len = key.len(), had_value, pruned, "rune trie delete");
        true
    }

    /// Visits every stored entry, depth first.
    ///
    /// The root is visited first if it holds a value. Sibling branches are
    /// visited in no particular order. Each visit receives the full key and
    /// the value, as soon as the entry is reached.
    ///
    /// # Errors
    ///
    /// The first error returned by `visitor` stops the walk and is returned
    /// unchanged.
    pub fn walk<'a, E, F>(&'a self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        Self::walk_subtree(&self.root, String::new(), &mut visitor)
    }

    /// Visits every stored entry whose key starts with `prefix`.
    ///
    /// Keys are reported in full, prefix included. A prefix with no node
    /// visits nothing. Ordering and error behavior match [`RuneTrie::walk`].
    pub fn walk_prefix<'a, K, E, F>(&'a self, prefix: K, mut visitor: F) -> Result<(), E>
    where
        K: AsRef<str>,
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        let prefix = prefix.as_ref();
        match self.root.descend(prefix.chars()) {
            Some(start) => Self::walk_subtree(start, prefix.to_string(), &mut visitor),
            None => Ok(()),
        }
    }

    /// Visits the stored entries on the path from the root to `key`.
    ///
    /// Entries are visited in root-to-key order with the prefix of `key`
    /// consumed so far, root and final node included. Nodes without a value
    /// are skipped. If the path breaks off before `key` is consumed, the walk
    /// ends cleanly after the part that exists.
    ///
    /// # Errors
    ///
    /// The first error returned by `visitor` stops the walk and is returned
    /// unchanged.
    pub fn walk_path<'a, K, E, F>(&'a self, key: K, mut visitor: F) -> Result<(), E>
    where
        K: AsRef<str>,
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        let key = key.as_ref();
        let mut node = &self.root;

        if let Some(value) = &node.value {
            visitor("", value)?;
        }

        for (offset, c) in key.char_indices() {
            node = match node.children.get(&c) {
                Some(child) => child,
                None => return Ok(()),
            };
            if let Some(value) = &node.value {
                visitor(&key[..offset + c.len_utf8()], value)?;
            }
        }

        Ok(())
    }

    /// Finds the longest prefix of `key` that has a stored value.
    ///
    /// # Returns
    ///
    /// The matching prefix, borrowed from `key`, and its value.
    pub fn longest_prefix_match<'k>(&self, key: &'k str) -> Option<(&'k str, &V)> {
        let mut longest = None;
        let walked = self.walk_path(key, |prefix, value| {
            longest = Some((prefix.len(), value));
            Ok::<(), Infallible>(())
        });
        if let Err(never) = walked {
            match never {}
        }
        longest.map(|(len, value)| (&key[..len], value))
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated nodes, the root included.
    ///
    /// This walks the whole tree, so it's an O(n) operation.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Removes every entry, keeping only an empty root.
    pub fn clear(&mut self) {
        self.root = TrieNode::with_capacity(self.config.children_capacity);
        self.len = 0;
    }

    fn walk_subtree<'a, E, F>(start: &'a TrieNode<V>, mut key: String, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&str, &'a V) -> Result<(), E>,
    {
        // One shared key buffer. Each entry carries the byte length of its
        // parent's key and the edge leading to it; everything popped between
        // a push and its pop lies below the same parent, so truncating back
        // to that length restores the parent's key.
        let mut stack = vec![(key.len(), None, start)];
        while let Some((parent_len, edge, node)) = stack.pop() {
            key.truncate(parent_len);
            if let Some(c) = edge {
                key.push(c);
            }
            if let Some(value) = &node.value {
                visitor(key.as_str(), value)?;
            }
            let len = key.len();
            stack.extend(node.children.iter().map(|(&c, child)| (len, Some(c), child)));
        }
        Ok(())
    }
}

#[cfg(test)]
impl<V> RuneTrie<V> {
    /// Returns the keys of non-root nodes that hold no value and have no
    /// children. A correctly pruned trie has none.
    pub(crate) fn dangling_nodes(&self) -> Vec<String> {
        let mut dangling = Vec::new();
        let mut key = String::new();
        let mut stack: Vec<(usize, char, &TrieNode<V>)> =
            self.root.children.iter().map(|(&c, child)| (0, c, child)).collect();
        while let Some((parent_len, c, node)) = stack.pop() {
            key.truncate(parent_len);
            key.push(c);
            if node.is_leaf() && node.value.is_none() {
                dangling.push(key.clone());
            }
            let len = key.len();
            stack.extend(node.children.iter().map(|(&c, child)| (len, c, child)));
        }
        dangling
    }

    /// Returns the number of values reachable from the root, counted by
    /// traversal rather than from the maintained counter.
    pub(crate) fn counted_values(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += usize::from(node.value.is_some());
            stack.extend(node.children.values());
        }
        count
    }
}

impl<V> Default for RuneTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for RuneTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K, V> Extend<(K, V)> for RuneTrie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
