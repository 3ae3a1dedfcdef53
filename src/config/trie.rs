//! Trie configuration module.
//!
//! This module defines the tuning knobs applied to every trie built from
//! loaded configuration.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound for `children_capacity`; a codepoint fan-out beyond this is
/// better left to the map's own growth.
pub const MAX_CHILDREN_CAPACITY: usize = 1024;

/// Trie configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Initial capacity of each newly allocated child map.
    /// Zero defers allocation until the first edge is inserted.
    pub children_capacity: usize,
}

impl TrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity of child maps created by insertions.
    pub fn with_children_capacity(mut self, children_capacity: usize) -> Self {
        self.children_capacity = children_capacity;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            children_capacity: 0,
        }
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.children_capacity > MAX_CHILDREN_CAPACITY {
            return Err(ConfigError::ValidationError(format!(
                "children_capacity must be at most {MAX_CHILDREN_CAPACITY}, got {}",
                self.children_capacity
            )));
        }

        Ok(())
    }
}
