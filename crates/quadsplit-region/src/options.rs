//! Options for the quadtree traversals
//!
//! Defaults follow the usual starting points for photographs: a compression
//! tolerance of 10, an edge color tolerance of 8 and an edge variance
//! tolerance of 7.

use crate::error::{RegionError, RegionResult};

/// Check that a tolerance is a finite, non-negative number.
pub fn validate_tolerance(name: &str, value: f64) -> RegionResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RegionError::InvalidArgument(format!(
            "{} must be a finite value >= 0, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Options for quadtree compression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressOptions {
    /// Divergence below which a region is merged.
    ///
    /// Lower values (5-10) keep detail; higher values (15-30) give a
    /// blockier image with fewer regions.
    pub tolerance: f64,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self { tolerance: 10.0 }
    }
}

impl CompressOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the merge tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> RegionResult<()> {
        validate_tolerance("tolerance", self.tolerance)
    }
}

/// Options for quadtree edge masks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDetectOptions {
    /// Divergence below which a region is marked.
    ///
    /// Lower values (5-10) pick up faint edges and noise; higher values
    /// (10-20) keep only strong edges.
    pub color_tolerance: f64,
    /// Mean channel variance below which a region is marked.
    ///
    /// Lower values (3-6) pick up more texture; higher values (7-12) give
    /// a smoother mask.
    pub variance_tolerance: f64,
}

impl Default for EdgeDetectOptions {
    fn default() -> Self {
        Self {
            color_tolerance: 8.0,
            variance_tolerance: 7.0,
        }
    }
}

impl EdgeDetectOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color tolerance
    pub fn with_color_tolerance(mut self, tolerance: f64) -> Self {
        self.color_tolerance = tolerance;
        self
    }

    /// Set the variance tolerance
    pub fn with_variance_tolerance(mut self, tolerance: f64) -> Self {
        self.variance_tolerance = tolerance;
        self
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> RegionResult<()> {
        validate_tolerance("color_tolerance", self.color_tolerance)?;
        validate_tolerance("variance_tolerance", self.variance_tolerance)
    }
}
