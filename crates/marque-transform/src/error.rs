//! Error types for tag resolution and include handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for marque-transform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a tag-resolution pass.
///
/// Shape normalization never fails: a function whose precondition does not
/// hold returns its input unchanged. Errors arise only from resolvers, and
/// the first one aborts the whole traversal. Nodes already replaced by then
/// stay replaced; there is no rollback.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file failed.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Enumerating a directory failed.
    #[error("failed to walk directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An included fragment was not valid YAML.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: marque_yaml::Error,
    },

    /// A custom resolver reported an error of its own.
    #[error("{0}")]
    Resolver(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an arbitrary error raised inside a custom resolver.
    pub fn resolver(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Resolver(err.into())
    }
}
