//! Generic deserialization engine for tabular configuration data.
//!
//! The engine is organized into logical components:
//! - [`value`] - Closed union of target value types and their kind identities
//! - [`converters`] - Converter registry and built-in scalar converters
//! - [`kv_map`] - Map-valued cell converters and the `key=value` sub-grammar
//! - [`schema_index`] - Header indexing for tag-to-column resolution
//! - [`record_mapper`] - Field bindings and row-to-record mapping

pub mod converters;
pub mod kv_map;
pub mod record_mapper;
pub mod schema_index;
pub mod value;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use converters::{Converter, ConverterRegistry};
pub use record_mapper::{FieldBinding, Record, map_record};
pub use schema_index::SchemaIndex;
pub use value::{ShapeMismatch, TimeValue, Value, ValueKind};
