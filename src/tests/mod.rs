//! Test modules for Rune Trie.
//!
//! This module contains crate-internal test suites:
//! - Structural invariant checks that look at the node tree directly
//! - Property-based tests comparing the trie against a `HashMap` model
//! - Configuration loading tests
//!
//! Unit tests for individual modules live beside the code they cover.

pub mod test_utils;

pub use test_utils::{assert_pruned, key_strategy, TestFixture};
