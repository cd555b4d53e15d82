use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Job not found: {0}")]
    NotFound(u64),
}

/// Errors raised while building a directory from external data
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read jobs file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid jobs JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Job id must be a positive integer")]
    InvalidId,

    #[error("Job {0} has an empty title")]
    EmptyTitle(u64),

    #[error("Duplicate job id: {0}")]
    DuplicateId(u64),
}
