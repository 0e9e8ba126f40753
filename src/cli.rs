//! Command-line interface components.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gamecfg")]
#[command(about = "Load tab-separated game configuration tables into typed records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing the .tsv table files
    #[arg(value_name = "DATA_DIR", default_value = "conf")]
    pub data_dir: PathBuf,

    /// Keep loading remaining tables when one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Print every loaded record after the load completes
    #[arg(long)]
    pub dump: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve and check the data directory
    pub fn resolve_data_dir(&self) -> anyhow::Result<PathBuf> {
        let dir = self
            .data_dir
            .canonicalize()
            .with_context(|| format!("data directory not found: {}", self.data_dir.display()))?;

        if !dir.is_dir() {
            anyhow::bail!("not a directory: {}", dir.display());
        }

        Ok(dir)
    }

    /// Log level implied by the flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
