//! Error types.

use thiserror::Error;

/// Errors reported by world construction, cell access and stepping.
#[derive(Debug, Error)]
pub enum LifeError {
    /// A world cannot have a negative edge length.
    #[error("world size must be non-negative, got {0}")]
    NegativeSize(i16),

    /// A coordinate fell outside `[0, size)` on at least one axis.
    #[error("coordinate ({x}, {y}, {z}) is outside a world of size {size}")]
    OutOfBounds { x: i16, y: i16, z: i16, size: i16 },

    /// The worker pool for parallel stepping could not be built.
    #[error("failed to build stepping thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for world operations.
pub type LifeResult<T> = Result<T, LifeError>;
