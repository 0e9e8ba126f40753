//! Map-valued cell converters and their `key=value` sub-grammar.
//!
//! A map cell holds space/semicolon-separated `key=value` tokens. Keys
//! are identifiers; values are letters/digits/underscore/dot, optionally
//! quoted. Text that matches neither is skipped, not rejected.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::value::{Value, ValueKind};
use crate::error::{LoadError, Result};

static KV_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_]+)[ \t]*=[ \t'"]*([A-Za-z0-9_.]+)"#)
        .expect("key=value token pattern is valid")
});

/// Extract every `key=value` pair from a cell, skipping unmatched text
pub fn kv_pairs(text: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for capture in KV_TOKEN.captures_iter(text) {
        pairs.insert(capture[1].to_string(), capture[2].to_string());
    }
    pairs
}

pub fn parse_text_map(text: &str) -> Result<Value> {
    Ok(Value::TextMap(kv_pairs(text)))
}

/// String-to-string first, then every value must parse as an integer
pub fn parse_int_map(text: &str) -> Result<Value> {
    let mut map = HashMap::new();
    for (key, raw) in kv_pairs(text) {
        let value = raw.parse::<i64>().map_err(|_| {
            LoadError::conversion(
                ValueKind::IntMap,
                text,
                format!("value '{raw}' for key '{key}' is not an integer"),
            )
        })?;
        map.insert(key, value);
    }
    Ok(Value::IntMap(map))
}

/// String-to-string first, then every value must parse as a 32-bit float
pub fn parse_float_map(text: &str) -> Result<Value> {
    let mut map = HashMap::new();
    for (key, raw) in kv_pairs(text) {
        let value = raw.parse::<f32>().map_err(|_| {
            LoadError::conversion(
                ValueKind::FloatMap,
                text,
                format!("value '{raw}' for key '{key}' is not a float"),
            )
        })?;
        map.insert(key, value);
    }
    Ok(Value::FloatMap(map))
}
