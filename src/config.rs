//! Loader configuration and validation.
//!
//! Holds the file-format separators and the failure policy applied
//! during a load pass. The policy is chosen once here, never inside
//! leaf parsing functions.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIELD_SEPARATOR, DEFAULT_ROW_SEPARATOR};
use crate::error::{LoadError, Result};

/// How the loader reacts when a table fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Abort the entire load on the first error
    FailFast,
    /// Record the error, keep already-loaded tables, continue with the next table
    Recover,
}

/// Configuration for a table load pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Separator between columns within a row
    pub field_separator: String,

    /// Separator between rows within a file
    pub row_separator: String,

    /// Reaction to load failures
    pub failure_policy: FailurePolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            field_separator: DEFAULT_FIELD_SEPARATOR.to_string(),
            row_separator: DEFAULT_ROW_SEPARATOR.to_string(),
            failure_policy: FailurePolicy::FailFast,
        }
    }
}

impl LoaderConfig {
    /// Set the column separator
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// Set the row separator
    pub fn with_row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Check that both separators are usable
    pub fn validate(&self) -> Result<()> {
        if self.field_separator.is_empty() {
            return Err(LoadError::configuration("field separator must not be empty"));
        }
        if self.row_separator.is_empty() {
            return Err(LoadError::configuration("row separator must not be empty"));
        }
        Ok(())
    }
}
