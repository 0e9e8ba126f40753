//! Buff-to-effect registration seam.
//!
//! Called from record post-parse hooks to turn raw buff parameters into
//! the effect values the rest of the game consumes. The combat system
//! owns effect semantics; the loader only carries the values through.

use std::collections::HashMap;

/// Register a record's buff parameters, returning its effect map
pub fn register_buffs(buffs: &HashMap<String, f32>) -> HashMap<String, f32> {
    buffs
        .iter()
        .map(|(name, value)| (name.clone(), *value))
        .collect()
}
