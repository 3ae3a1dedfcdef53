//! Test utilities and fixtures for Rune Trie.
//!
//! Reusable strategies, fixtures and structural assertions shared by the
//! crate-internal test suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::data_structures::rune_trie::RuneTrie;

/// Generate a strategy for trie keys.
///
/// Keys draw from a small alphabet, mixing ASCII with multi-byte codepoints,
/// so that generated keys share prefixes often.
///
/// # Parameters
///
/// * `max_length` - The maximum key length in codepoints.
pub fn key_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(
        prop_oneof![Just('a'), Just('b'), Just('c'), Just('é'), Just('日'), Just('🦀')],
        0..=max_length,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
    .boxed()
}

/// Assert that a trie holds no childless, valueless nodes besides the root
/// and that its entry counter matches the values actually reachable.
pub fn assert_pruned<V>(trie: &RuneTrie<V>) {
    let dangling = trie.dangling_nodes();
    assert!(dangling.is_empty(), "unpruned nodes at keys {dangling:?}");
    assert_eq!(trie.len(), trie.counted_values(), "entry counter out of sync");
}

/// Test fixture for tests that need files on disk or environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Vector of environment variables to cleanup after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name into the fixture directory.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
