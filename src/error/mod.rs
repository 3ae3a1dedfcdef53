//! Error module for Rune Trie.
//!
//! The trie itself never fails; its traversals hand back whatever error the
//! caller's visitor produced. The types here cover the fallible surroundings:
//! loading configuration and reading entry files.

use thiserror::Error;

pub mod config;

/// Result type alias used by the fallible parts of the crate.
pub type RuneTrieResult<T> = Result<T, RuneTrieError>;

/// Core error enum for Rune Trie.
#[derive(Error, Debug)]
pub enum RuneTrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An entries document that is not a map of string keys to values.
    #[error("Invalid entries: {0}")]
    InvalidEntries(String),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
