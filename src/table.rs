//! Typed, keyed record tables.
//!
//! A [`Table`] owns every record parsed from one backing file, keyed by
//! the record's derived unique identifier. [`TableOps`] is the
//! object-safe view the registry drives the load through, with a
//! downcast back to the concrete table for typed access.

use std::any::Any;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::parser::converters::ConverterRegistry;
use crate::parser::record_mapper::{Record, map_record};
use crate::parser::schema_index::SchemaIndex;

/// Counters for one table's load pass
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TableStats {
    /// Data rows seen (header excluded)
    pub rows: usize,

    /// Records parsed and appended
    pub records_loaded: usize,

    /// Empty rows skipped
    pub rows_skipped: usize,
}

/// Object-safe table interface the registry loads through
pub trait TableOps {
    /// Identifying file base name
    fn name(&self) -> &str;

    /// Parse file content into records: header row first, then one
    /// record per non-empty data row
    fn load(
        &mut self,
        content: &str,
        config: &LoaderConfig,
        converters: &ConverterRegistry,
    ) -> Result<TableStats>;

    /// Number of records currently stored
    fn record_count(&self) -> usize;

    /// Every record as (identifier, formatted text), for diagnostics only
    fn debug_records(&self) -> Vec<(String, String)>;

    fn as_any(&self) -> &dyn Any;
}

/// Named, keyed collection of one record type
#[derive(Debug)]
pub struct Table<R: Record> {
    name: String,
    records: HashMap<String, R>,
}

impl<R: Record> Table<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: HashMap::new(),
        }
    }

    /// Look up a record by its unique identifier
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    /// Insert a record under its derived key.
    ///
    /// A duplicate key overwrites the previous record.
    pub fn append(&mut self, record: R) {
        let key = record.key();
        if self.records.contains_key(&key) {
            debug!(
                "table '{}': duplicate id '{}' overwrites previous record",
                self.name, key
            );
        }
        self.records.insert(key, record);
    }

    /// Iterate over (identifier, record) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &R)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Record> TableOps for Table<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(
        &mut self,
        content: &str,
        config: &LoaderConfig,
        converters: &ConverterRegistry,
    ) -> Result<TableStats> {
        let mut rows = content.split(config.row_separator.as_str());

        // split always yields at least one piece, the header
        let header = rows.next().unwrap_or_default();
        let index = SchemaIndex::from_header(header, &config.field_separator);
        debug!("table '{}': {} columns indexed", self.name, index.len());

        let mut stats = TableStats::default();

        // row numbers count from the header as row 0
        for (offset, row) in rows.enumerate() {
            if row.trim().is_empty() {
                stats.rows_skipped += 1;
                continue;
            }
            stats.rows += 1;

            let record =
                map_record::<R>(row, &index, converters, &config.field_separator)
                    .map_err(|e| LoadError::table_load(self.name.as_str(), offset + 1, e))?;

            self.append(record);
            stats.records_loaded += 1;
        }

        Ok(stats)
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn debug_records(&self) -> Vec<(String, String)> {
        self.records
            .iter()
            .map(|(key, record)| (key.clone(), format!("{record:?}")))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
