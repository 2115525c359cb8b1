//! Error types for osrs_items

use std::path::PathBuf;

/// Why the GE price snapshot could not be fetched
#[derive(Debug, thiserror::Error)]
pub enum PriceFetchError {
    /// Request never produced a response (DNS, connect, timeout, body decode)
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// Price API answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
}

/// Unified error type for osrs_items operations
#[derive(Debug, thiserror::Error)]
pub enum ItemsError {
    /// A required local file is absent
    #[error("{} not found.\n{hint}", .path.display())]
    MissingResource {
        path: PathBuf,
        /// How to obtain the file (download command, job to run first)
        hint: String,
    },
    /// Reference file parsed but has an unrecognized structure
    #[error("Unexpected JSON structure: {0}")]
    Schema(String),
    /// Latest GE prices could not be fetched
    #[error("Failed to fetch GE prices: {0}")]
    PriceFetch(#[from] PriceFetchError),
    /// Patch output would overwrite its own input artifact
    #[error("Refusing to overwrite input artifact {}", .0.display())]
    WouldOverwrite(PathBuf),
    /// HTTP client could not be built (TLS backend, invalid user agent)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse or serialize JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for osrs_items operations
pub type Result<T> = std::result::Result<T, ItemsError>;
