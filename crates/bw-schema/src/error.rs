//! Schema aggregation error types.

use std::path::PathBuf;

/// Errors from discovering and reading schema fragments.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema directory does not exist.
    #[error("cannot read schema directory {}: no such file or directory", .dir.display())]
    MissingDirectory { dir: PathBuf },

    /// No matching files were found, or none of them could be read.
    #[error("no schema files found in directory: {}", .dir.display())]
    Empty { dir: PathBuf },

    /// A single schema file could not be read.
    #[error("cannot read schema file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
