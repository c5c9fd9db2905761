//! Error types for quadsplit-region

use quadsplit_core::Rect;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadsplit_core::Error),

    /// Input buffer with no pixels
    #[error("invalid input: {width}x{height} buffer has no pixels")]
    InvalidInput { width: u32, height: u32 },

    /// Invalid argument (e.g. a negative tolerance)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Statistics requested over a zero-area region
    #[error("empty region: {0:?}")]
    EmptyRegion(Rect),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
