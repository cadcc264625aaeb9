//! Error types for cinerig

use thiserror::Error;

/// The main error type for cinerig operations
#[derive(Debug, Error)]
pub enum CinerigError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Missing DOLLY or LOOKAT collection in {0}")]
    MissingSequence(String),

    #[error("Count mismatch in {tree}: {dolly} DOLLY vs {lookat} LOOKAT nodes")]
    CountMismatch {
        tree: String,
        dolly: usize,
        lookat: usize,
    },

    #[error("Spline {tree} must have at least 4 DOLLY and LOOKAT nodes, found {count}")]
    MinimumCount { tree: String, count: usize },

    #[error("Spline entry '{0}' points to a deleted collection")]
    BrokenReference(String),

    #[error("Nothing to export: the spline list is empty")]
    EmptyRegistry,

    #[error("Node {node} must belong to exactly one collection, found {count}")]
    AmbiguousContainer { node: String, count: usize },

    #[error("Not a DOLLY node: {0}")]
    NotADollyNode(String),

    #[error("No object selected")]
    NothingSelected,

    #[error("Viewer camera not found")]
    CameraMissing,

    #[error("Camera already exists")]
    CameraExists,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for cinerig operations
pub type Result<T> = std::result::Result<T, CinerigError>;

impl From<serde_json::Error> for CinerigError {
    fn from(err: serde_json::Error) -> Self {
        CinerigError::Parse(err.to_string())
    }
}
