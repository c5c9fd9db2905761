//! quadsplit - Quadtree image compression and block edge masks
//!
//! A quadtree splits an RGB image into quadrants down to single pixels, then
//! merges back every region whose children are close enough in color or
//! whose pixels vary little. The merged regions give:
//!
//! - a compressed image, each merged region flattened to its average color
//! - an edge mask, merged regions white on black, so that detailed areas
//!   stand out in black
//!
//! # Example
//!
//! ```
//! use quadsplit::PixelBuffer;
//! use quadsplit::region::QuadTree;
//!
//! let input = PixelBuffer::filled(32, 32, [12, 34, 56]);
//! let mut tree = QuadTree::new(&input).unwrap();
//! assert_eq!(tree.compress(10.0).unwrap(), &input);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadsplit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use quadsplit_io as io;
pub use quadsplit_region as region;

pub mod pipeline;
