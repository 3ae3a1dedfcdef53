//! Data structures for Rune Trie.
//!
//! This module contains the codepoint-keyed trie and its node type.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Strict single ownership of every node
//! - Operations bounded by key length or visited subtree size

pub mod rune_trie;

// Re-export common data structures
pub use rune_trie::RuneTrie;
