//! Error types for the frame solver

use thiserror::Error;

/// Main error type for frame analysis operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node '{0}' not found in model")]
    NodeNotFound(String),

    #[error("Member '{0}' not found in model")]
    MemberNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Member '{0}' has zero length")]
    ZeroLengthMember(String),

    #[error("Member '{member}' has invalid {property}: {value}")]
    InvalidProperty {
        member: String,
        property: &'static str,
        value: f64,
    },

    #[error("Structure is unstable (singular stiffness matrix) - check supports and releases")]
    Unstable,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for frame analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
