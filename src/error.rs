//! Error types for jsonhome.

use thiserror::Error;

/// Result type for jsonhome operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or (de)serializing a JSON Home
/// document.
#[derive(Error, Debug)]
pub enum Error {
    /// There is not enough information in the document to produce a URI, or
    /// template variables required by `set_uri` were not supplied.
    #[error("Missing values: {0}")]
    MissingValues(String),

    /// No resource is registered under the requested relation.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// A resource with the requested relation already exists in the document.
    #[error("Resource already exists: {0}")]
    ResourceAlreadyExists(String),

    /// A resource URI was specified more than one way at creation time.
    #[error("Conflicting URI specification: {0}")]
    ConflictingUri(String),

    /// A URI template could not be parsed or expanded.
    #[error("URI template error: {0}")]
    Template(String),

    /// Error occurred during JSON (de)serialization.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
