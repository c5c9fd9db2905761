//! quadsplit-region - Quadtree region processing for quadsplit
//!
//! This crate provides the quadtree analysis of an RGB buffer:
//!
//! - **Region statistics** - Average color and channel variance over any
//!   rectangle, backed by integral images
//! - **Quadtree decomposition** - Recursive split of the buffer down to
//!   single-pixel granularity
//! - **Compression** - Merge low-detail regions into flat average-color blocks
//! - **Edge masks** - Mark uniform blocks white on a black mask
//!
//! # Examples
//!
//! ## Region statistics
//!
//! ```
//! use quadsplit_core::{PixelBuffer, Rect};
//! use quadsplit_region::RegionStats;
//!
//! let buf = PixelBuffer::from_fn(4, 4, |x, _| if x < 2 { [0, 0, 0] } else { [255, 255, 255] });
//! let stats = RegionStats::new(&buf);
//! assert_eq!(stats.average_color(Rect::new(0, 0, 2, 4)).unwrap(), [0, 0, 0]);
//! assert_eq!(stats.average_color(buf.bounds()).unwrap(), [127, 127, 127]);
//! ```
//!
//! ## Compression and edge masks
//!
//! ```
//! use quadsplit_core::PixelBuffer;
//! use quadsplit_core::color::WHITE;
//! use quadsplit_region::QuadTree;
//!
//! let input = PixelBuffer::filled(16, 16, [40, 80, 120]);
//! let mut tree = QuadTree::new(&input).unwrap();
//!
//! assert_eq!(tree.compress(10.0).unwrap(), &input);
//! assert_eq!(tree.edge_detect(8.0, 7.0).unwrap().count_color(WHITE), 256);
//! ```

pub mod error;
pub mod options;
pub mod quadtree;
pub mod raster;
pub mod stats;

// Re-export core types
pub use quadsplit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export option types
pub use options::{CompressOptions, EdgeDetectOptions, validate_tolerance};

// Re-export statistics types and functions
pub use stats::{
    IntegralImage, RegionStats, SquaredIntegralImage, average_color, channel_variance,
    mean_variance,
};

// Re-export quadtree types and functions
pub use quadtree::{
    COMPRESS_VARIANCE_THRESHOLD, MergeSummary, QuadTree, Quadrant, Region,
    merge_decision_for_compress, merge_decision_for_edges, subdivide,
};

// Re-export rasterization helpers
pub use raster::{RegionFill, covered_pixels, outline_fills, paint_fills};
