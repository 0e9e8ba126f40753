//! Shared constants for table file layout.

/// Column separator used by table files
pub const DEFAULT_FIELD_SEPARATOR: &str = "\t";

/// Row separator used by table files
pub const DEFAULT_ROW_SEPARATOR: &str = "\n";

/// File extension for table data files
pub const TABLE_FILE_EXTENSION: &str = "tsv";
