use std::path::PathBuf;

use thiserror::Error;

/// Failure to read an optional list file.
///
/// Both variants are recoverable: the caller falls back to asking the operator.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("'{path}' not found")]
    FileAbsent { path: PathBuf },

    #[error("'{path}' could not be read: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to persist rendered output. Always fatal.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode CSV rows: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV rows: {0}")]
    Flush(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("invalid site name: '{0}'")]
    InvalidSiteName(String),

    #[error("failed to prepare '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
