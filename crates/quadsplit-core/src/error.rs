//! Error types for quadsplit-core
//!
//! Provides a unified error type for the buffer and rectangle types.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use crate::Rect;
use thiserror::Error;

/// quadsplit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Buffer dimensions whose byte size cannot be represented
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw sample data does not match the declared dimensions
    #[error("data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Buffer dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Rectangle not contained in the buffer
    #[error("rect {rect:?} out of bounds for {width}x{height} buffer")]
    RectOutOfBounds { rect: Rect, width: u32, height: u32 },
}

/// Result type alias for quadsplit-core operations
pub type Result<T> = std::result::Result<T, Error>;
