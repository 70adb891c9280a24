//! Error types for the generation pipeline
//!
//! Split by pipeline stage: structural errors during the scene-graph
//! transform are fatal and abort the whole document; template failures
//! surface at emission; the driver wraps both along with I/O.
//!
//! Styling failures are deliberately *not* errors: an unresolvable fill
//! degrades to the `"transparent"` sentinel, a malformed effect entry is
//! skipped, and an unrecognized node type falls through to the Unknown
//! placeholder variant.

use thiserror::Error;

/// Fatal errors raised while building the element tree
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// A node that requires geometry has no `absoluteBoundingBox`. Every
    /// position downstream depends on it, so the transform aborts rather
    /// than emitting a partial tree.
    #[error("node `{name}` ({id}) is missing absoluteBoundingBox")]
    MissingGeometry { id: String, name: String },

    /// The document/canvas structure expected at the top of a Figma file
    /// export is absent.
    #[error("malformed document: missing {0}")]
    MalformedDocument(String),
}

/// Errors raised while rendering fragments from the element tree
#[derive(Debug, Error)]
pub enum EmitError {
    /// Template compilation or rendering failed
    #[error("template rendering failed: {0}")]
    Template(#[from] mustache::Error),
}

/// Top-level driver error type
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    #[error("emission failed: {0}")]
    Emit(#[from] EmitError),
}
