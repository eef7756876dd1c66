//! Quadtree construction errors.

use thiserror::Error;

/// Errors that can occur while building a [`QuadTree`](crate::QuadTree).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// Root bounds with a negative or NaN width or height
    #[error("invalid bounds: width {w} and height {h} must be non-negative")]
    InvalidBounds {
        /// Offending width
        w: f64,
        /// Offending height
        h: f64,
    },

    /// Subdivision would exceed the configured depth
    #[error("subdivision exceeded maximum depth of {max_depth}")]
    MaxDepthExceeded {
        /// Configured limit
        max_depth: usize,
    },
}

/// Result alias for quadtree construction
pub type Result<T> = std::result::Result<T, QuadTreeError>;
