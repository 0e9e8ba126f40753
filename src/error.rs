//! Error handling for table loading operations.
//!
//! Provides the error taxonomy for file access, schema resolution,
//! cell conversion, and record assembly failures.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::parser::value::{ShapeMismatch, ValueKind};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read table file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema error: tag '{tag}' [{field}]: {reason}")]
    Schema {
        tag: String,
        field: String,
        reason: String,
    },

    #[error("no converter registered for {kind} values")]
    ConverterNotFound { kind: ValueKind },

    #[error("cannot convert '{text}' to {kind}: {reason}")]
    Conversion {
        kind: ValueKind,
        text: String,
        reason: String,
    },

    #[error("record shape error: field '{field}' is bound as {expected} but received a {found} value")]
    RecordShape {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("table '{table}' row {row} failed to load")]
    TableLoad {
        table: String,
        row: usize,
        #[source]
        source: Box<LoadError>,
    },
}

impl LoadError {
    /// Create a file read error with the offending path
    pub fn file_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a schema error naming the tag and the record field
    pub fn schema(
        tag: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Schema {
            tag: tag.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing converter error
    pub fn converter_not_found(kind: ValueKind) -> Self {
        Self::ConverterNotFound { kind }
    }

    /// Create a conversion error carrying the offending cell text
    pub fn conversion(kind: ValueKind, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Conversion {
            kind,
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create a record shape error from a binding/value mismatch
    pub fn record_shape(field: impl Into<String>, mismatch: ShapeMismatch) -> Self {
        Self::RecordShape {
            field: field.into(),
            expected: mismatch.expected,
            found: mismatch.found,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a row-level error with its table name and row number
    pub fn table_load(table: impl Into<String>, row: usize, source: LoadError) -> Self {
        Self::TableLoad {
            table: table.into(),
            row,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
