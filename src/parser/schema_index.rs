//! Header indexing for tag-to-column resolution.
//!
//! Built fresh per file from its header row. Tags are case-sensitive and
//! matched exactly, without trimming.

use std::collections::HashMap;
use tracing::debug;

/// Mapping from column tag to zero-based column position
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    positions: HashMap<String, usize>,
}

impl SchemaIndex {
    /// Index a header row split by the configured field separator.
    ///
    /// A repeated tag keeps its last position.
    pub fn from_header(header: &str, field_separator: &str) -> Self {
        let mut positions = HashMap::new();
        for (position, tag) in header.split(field_separator).enumerate() {
            if let Some(previous) = positions.insert(tag.to_string(), position) {
                debug!(
                    "header tag '{}' repeated: column {} replaces column {}",
                    tag, position, previous
                );
            }
        }
        Self { positions }
    }

    /// Column position of a tag, if the header carries it
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.positions.get(tag).copied()
    }

    /// Whether the header carries a tag
    pub fn contains(&self, tag: &str) -> bool {
        self.positions.contains_key(tag)
    }

    /// Number of distinct tags indexed
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
