//! Table registry and load orchestration.
//!
//! The registry owns the ordered table list, the shared converter
//! registry, and the loader configuration. It is a plain value owned by
//! the application's startup routine; tests create as many independent
//! registries as they need.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{FailurePolicy, LoaderConfig};
use crate::constants::TABLE_FILE_EXTENSION;
use crate::error::{LoadError, Result};
use crate::parser::converters::{Converter, ConverterRegistry};
use crate::parser::record_mapper::Record;
use crate::parser::value::ValueKind;
use crate::table::{Table, TableOps};

/// Aggregate outcome of one load pass
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Tables loaded to completion
    pub tables_loaded: usize,

    /// Records appended across all tables
    pub records_loaded: usize,

    /// Errors collected under the `Recover` policy
    pub errors: Vec<LoadError>,
}

impl LoadReport {
    /// Whether every table loaded without error
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Owns every registered table and drives the one load pass over them
pub struct TableRegistry {
    config: LoaderConfig,
    converters: ConverterRegistry,
    tables: Vec<Box<dyn TableOps>>,
    loaded: bool,
}

impl TableRegistry {
    /// Create a registry with the built-in converters and no tables
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            converters: ConverterRegistry::default(),
            tables: Vec::new(),
            loaded: false,
        })
    }

    /// Register a table for record type `R`, loaded from `<name>.tsv`.
    ///
    /// Tables load in registration order.
    pub fn register_table<R: Record>(&mut self, name: impl Into<String>) {
        self.tables.push(Box::new(Table::<R>::new(name)));
    }

    /// Store a converter for a kind, replacing any previous one
    pub fn register_converter(&mut self, kind: ValueKind, converter: Converter) {
        self.converters.register(kind, converter);
    }

    /// Load every registered table from `<dir>/<name>.tsv`, in
    /// registration order.
    ///
    /// Under `FailFast` the first error aborts the pass; under `Recover`
    /// it is recorded in the report and loading continues with the next
    /// table, leaving already-loaded tables intact. A registry loads at
    /// most once.
    pub fn load_all(&mut self, dir: &Path) -> Result<LoadReport> {
        if self.loaded {
            return Err(LoadError::configuration(
                "tables already loaded; create a new registry to reload",
            ));
        }
        self.loaded = true;

        let mut report = LoadReport::default();

        for table in &mut self.tables {
            let name = table.name().to_string();
            let path = dir.join(format!("{name}.{TABLE_FILE_EXTENSION}"));
            info!("loading table '{}' from {}", name, path.display());

            let outcome = match fs::read_to_string(&path) {
                Ok(content) => table.load(&content, &self.config, &self.converters),
                Err(e) => Err(LoadError::file_read(&path, e)),
            };

            match outcome {
                Ok(stats) => {
                    info!(
                        "table '{}': {} records from {} rows",
                        name, stats.records_loaded, stats.rows
                    );
                    report.tables_loaded += 1;
                    report.records_loaded += stats.records_loaded;
                }
                Err(err) => match self.config.failure_policy {
                    FailurePolicy::FailFast => return Err(err),
                    FailurePolicy::Recover => {
                        warn!("table '{}' failed, continuing: {}", name, err);
                        report.errors.push(err);
                    }
                },
            }
        }

        Ok(report)
    }

    /// Typed access to a loaded table
    pub fn table<R: Record>(&self, name: &str) -> Option<&Table<R>> {
        self.tables
            .iter()
            .find(|table| table.name() == name)
            .and_then(|table| table.as_any().downcast_ref::<Table<R>>())
    }

    /// Number of registered tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Format every record of every table for diagnostic printing.
    ///
    /// Output order is stable per table; it is not a data format.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for table in &self.tables {
            out.push_str(&format!(
                "== table '{}' ({} records) ==\n",
                table.name(),
                table.record_count()
            ));
            let mut records = table.debug_records();
            records.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, record) in records {
                out.push_str(&format!("{key}: {record}\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let config = LoaderConfig::default().with_field_separator("");
        assert!(matches!(
            TableRegistry::new(config),
            Err(LoadError::Configuration { .. })
        ));
    }
}
