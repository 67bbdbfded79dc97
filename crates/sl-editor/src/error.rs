//! Editor error types

use thiserror::Error;
use uuid::Uuid;

use crate::scene::SceneError;

/// Error type for editor operations.
///
/// Nothing here is fatal: validation errors carry a user-facing message
/// and every failed operation leaves the session unchanged.
#[derive(Debug, Clone, Error)]
pub enum EditorError {
    #[error("select 3 points for a pyramid or 4 for a cuboid (got {count})")]
    InvalidPointCount { count: usize },

    #[error("vertex index {index} out of range for a solid with {count} vertices")]
    VertexIndexOutOfRange { index: usize, count: usize },

    #[error("unknown solid {0}")]
    UnknownSolid(Uuid),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
