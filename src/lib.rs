//! Rune Trie Library
//!
//! This library provides a trie keyed one Unicode codepoint per edge, along
//! with the configuration and error types used by the `rune_trie` binary.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - The trie never fails; only caller-supplied visitors can abort a walk
//! - Nodes exist only while they lead to a stored value
//! - Strict single ownership, no reference counting or parent links
//! - Comprehensive error handling for configuration and input files

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod entries;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::RuneTrie;

/// Version information for Rune Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
