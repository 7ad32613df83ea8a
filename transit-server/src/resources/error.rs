//! Resource loading error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while loading the network snapshots.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but holds a value the network cannot represent
    #[error("invalid record in {}: {source}", path.display())]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

impl ResourceError {
    /// The file the error relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ResourceError::Io { path, .. }
            | ResourceError::Json { path, .. }
            | ResourceError::InvalidRecord { path, .. } => path,
        }
    }
}
