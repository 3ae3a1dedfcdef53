//! Loading trie entries from JSON documents.
//!
//! An entries document is a single JSON object. Each member name becomes a
//! key and each member value is stored unchanged.

use std::path::Path;

use serde_json::Value;

use crate::config::TrieConfig;
use crate::data_structures::rune_trie::RuneTrie;
use crate::error::{RuneTrieError, RuneTrieResult};

/// Builds a trie from the text of an entries document.
///
/// # Arguments
///
/// * `json` - The document text.
/// * `config` - Configuration for the resulting trie.
///
/// # Returns
///
/// * `Ok(RuneTrie<Value>)` - A trie holding one entry per object member.
/// * `Err(RuneTrieError)` - If the text is not JSON or not an object.
pub fn parse_entries(json: &str, config: TrieConfig) -> RuneTrieResult<RuneTrie<Value>> {
    let document: Value = serde_json::from_str(json)?;
    let members = match document {
        Value::Object(members) => members,
        other => {
            return Err(RuneTrieError::InvalidEntries(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            )))
        }
    };

    let mut trie = RuneTrie::with_config(config);
    trie.extend(members);
    tracing::debug!(entries = trie.len(), nodes = trie.node_count(), "entries loaded");
    Ok(trie)
}

/// Reads an entries document from `path` and builds a trie from it.
pub fn load_entries<P: AsRef<Path>>(path: P, config: TrieConfig) -> RuneTrieResult<RuneTrie<Value>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_entries(&text, config)
}

/// Renders a stored value for display, unquoting plain strings.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_entries() {
        let trie = parse_entries(r#"{"a": 1, "ab": "two", "": null}"#, TrieConfig::default())
            .unwrap();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.get("a"), Some(&json!(1)));
        assert_eq!(trie.get("ab"), Some(&json!("two")));
        // JSON null is stored like any other value.
        assert_eq!(trie.get(""), Some(&Value::Null));
    }

    #[test]
    fn test_parse_entries_rejects_non_objects() {
        let err = parse_entries("[1, 2]", TrieConfig::default()).unwrap_err();
        assert!(matches!(err, RuneTrieError::InvalidEntries(_)));
        assert_eq!(err.to_string(), "Invalid entries: expected a JSON object, found an array");

        let err = parse_entries("{not json", TrieConfig::default()).unwrap_err();
        assert!(matches!(err, RuneTrieError::Serialization(_)));
    }

    #[test]
    fn test_load_entries_missing_file() {
        let err = load_entries("/nonexistent/entries.json", TrieConfig::default()).unwrap_err();
        assert!(matches!(err, RuneTrieError::Io(_)));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("plain")), "plain");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
        assert_eq!(display_value(&Value::Null), "null");
    }
}
