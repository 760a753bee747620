//! Error types for graph formatting

/// Error type for formatter selection
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Output format name not recognized
    #[error("unknown output format '{0}' (expected 'turtle' or 'ntriples')")]
    UnknownFormat(String),
}

/// Result type for format operations
pub type Result<T> = std::result::Result<T, FormatError>;
