//! Error types for generation and canvas operations.

use thiserror::Error;

use crate::{Category, Language, NodeId, Shape};

/// Result type for generation operations.
pub type FillResult<T> = Result<T, FillError>;

/// Errors that can occur while generating content.
#[derive(Debug, Error)]
pub enum FillError {
    /// No sample sentences for the requested category and language.
    #[error("No sample sentences for {category} in {language}")]
    EmptyPool {
        /// Requested category.
        category: Category,
        /// Requested language.
        language: Language,
    },

    /// Target size below the minimum for the shape.
    #[error("Target size {target} is below the minimum of {minimum} for {shape}")]
    TargetTooSmall {
        /// Requested shape.
        shape: Shape,
        /// Requested target size.
        target: usize,
        /// Minimum accepted for the shape.
        minimum: usize,
    },

    /// Category name not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Language code not recognised.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Shape name not recognised.
    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    /// Direction name not recognised.
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    /// Scene serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors reported by a canvas host when committing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// Node not found on the canvas.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// The host refused the operation.
    #[error("Canvas rejected the operation: {0}")]
    Rejected(String),
}
