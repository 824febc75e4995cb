//! Error types for YAML parsing.

use thiserror::Error;

/// Result type alias for marque-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing YAML into a node tree.
#[derive(Debug, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("YAML syntax error: {0}")]
    Scan(#[from] yaml_rust2::ScanError),

    /// The input contained no YAML document at all.
    #[error("no YAML document found in input")]
    EmptyDocument,

    /// An error in input associated with a named file.
    #[error("{filename}: {source}")]
    InFile {
        filename: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach a filename to this error for reporting.
    pub(crate) fn in_file(self, filename: &str) -> Self {
        Error::InFile {
            filename: filename.to_string(),
            source: Box::new(self),
        }
    }
}
