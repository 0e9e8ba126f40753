//! Record mapping from flat text rows to typed record fields.
//!
//! Each record type declares a static list of field bindings, built once
//! per type instead of inspected from field metadata at run time.
//! `map_record` resolves every bound tag through the schema index,
//! converts the cell, assigns the value, and runs the post-parse hook
//! once the record is fully populated.

use super::converters::ConverterRegistry;
use super::schema_index::SchemaIndex;
use super::value::{ShapeMismatch, Value, ValueKind};
use crate::error::{LoadError, Result};

/// Binds one record field to one column tag and target kind.
///
/// A binding with an empty tag is skipped during mapping; its field
/// keeps the record's default value.
pub struct FieldBinding<R> {
    /// Record field name, used in error messages
    pub field: &'static str,

    /// External column identifier
    pub tag: &'static str,

    /// Target kind the cell converts to
    pub kind: ValueKind,

    /// Moves the converted value into the record field
    pub assign: fn(&mut R, Value) -> std::result::Result<(), ShapeMismatch>,
}

/// A type that can be filled from one table row.
///
/// `Default` is the blank-record factory. `key` derives the identifier
/// the owning table stores the record under. `after_parse` is the
/// optional hook run exactly once after all tagged fields are set.
pub trait Record: Default + std::fmt::Debug + 'static {
    /// Field bindings, built once per record type
    fn bindings() -> &'static [FieldBinding<Self>];

    /// Unique identifier keying this record in its table
    fn key(&self) -> String;

    /// Hook for derived-field computation, run after mapping
    fn after_parse(&mut self) {}
}

/// Fill one record from one data row.
///
/// Any single field failure aborts the whole record; the partial record
/// is dropped, never handed to a table.
pub fn map_record<R: Record>(
    row: &str,
    index: &SchemaIndex,
    converters: &ConverterRegistry,
    field_separator: &str,
) -> Result<R> {
    let cells: Vec<&str> = row.split(field_separator).collect();
    let mut record = R::default();

    for binding in R::bindings() {
        if binding.tag.is_empty() {
            continue;
        }

        let position = index.position(binding.tag).ok_or_else(|| {
            LoadError::schema(binding.tag, binding.field, "tag not present in header")
        })?;

        if position >= cells.len() {
            return Err(LoadError::schema(
                binding.tag,
                binding.field,
                format!(
                    "column {} out of range for a {}-column row",
                    position,
                    cells.len()
                ),
            ));
        }

        let value = converters.convert(binding.kind, cells[position])?;
        (binding.assign)(&mut record, value)
            .map_err(|mismatch| LoadError::record_shape(binding.field, mismatch))?;
    }

    record.after_parse();
    Ok(record)
}
