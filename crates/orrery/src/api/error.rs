//! Error types for coordinator operations and catalog loading.

use thiserror::Error;

use crate::api::types::BodyId;

/// Result type for coordinator operations.
pub type Result<T> = std::result::Result<T, CoordinatorError>;

/// A rejected coordinator operation. State is left unchanged and nothing is
/// retried: these point at a stale identifier in the calling layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinatorError {
    /// No body in the catalog has this identifier.
    #[error("unknown body: {0}")]
    UnknownBody(BodyId),

    /// The location is not one of the active body's locations.
    #[error("location '{location}' does not belong to active body '{active}'")]
    LocationMismatch { location: String, active: BodyId },
}

/// Errors raised while building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The manifest JSON could not be parsed.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The manifest lists no bodies.
    #[error("catalog has no bodies")]
    Empty,

    /// Two bodies share an identifier.
    #[error("duplicate body id: {0}")]
    DuplicateBody(BodyId),
}
