//! quadsplit core - Basic data structures for quadtree image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the quadsplit workspace:
//!
//! - [`PixelBuffer`] - The RGB image container (3 x `u8` per cell)
//! - [`Rect`] - Half-open rectangle regions and the quadrant split
//! - [`color`] - Color helpers shared by the region and I/O crates

pub mod buffer;
pub mod error;
pub mod rect;

pub use buffer::{CHANNELS, PixelBuffer};
pub use color::Rgb;
pub use error::{Error, Result};
pub use rect::Rect;

/// Color type and helper functions for 3-channel pixels.
pub mod color {
    /// A color: one `u8` per channel.
    pub type Rgb = [u8; 3];

    /// All channels at zero.
    pub const BLACK: Rgb = [0, 0, 0];

    /// All channels at their maximum value.
    pub const WHITE: Rgb = [255, 255, 255];

    /// Euclidean (L2) distance between two colors, channel values taken raw.
    #[inline]
    pub fn distance(a: Rgb, b: Rgb) -> f64 {
        distance_to_mean(a, b.map(f64::from))
    }

    /// Euclidean (L2) distance between a color and an unrounded mean color.
    #[inline]
    pub fn distance_to_mean(a: Rgb, mean: [f64; 3]) -> f64 {
        a.iter()
            .zip(mean.iter())
            .map(|(&p, &q)| {
                let d = p as f64 - q;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Convert a gray value to a color with three equal channels.
    #[inline]
    pub fn gray(v: u8) -> Rgb {
        [v, v, v]
    }

}
