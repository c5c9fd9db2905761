//! PixelBuffer - The RGB image container
//!
//! A `PixelBuffer` is a `height x width` grid of cells with three 8-bit
//! channels each. Samples are stored row-major and interleaved
//! (`r, g, b, r, g, b, ...`), so row `y` starts at byte `y * width * 3`.
//!
//! Zero-sized buffers are representable: decoders can legitimately produce
//! them, and consumers that need pixels reject them at their own boundary.

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::rect::Rect;

/// Number of channels per cell
pub const CHANNELS: usize = 3;

/// RGB pixel buffer
///
/// # Examples
///
/// ```
/// use quadsplit_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(4, 3);
/// buf.set_rgb(1, 2, [10, 20, 30]).unwrap();
/// assert_eq!(buf.get_rgb(1, 2), Some([10, 20, 30]));
/// assert_eq!(buf.get_rgb(0, 0), Some([0, 0, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new all-black buffer.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Create a buffer with every cell set to `rgb`.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `usize`.
    pub fn filled(width: u32, height: u32, rgb: Rgb) -> Self {
        let len = Self::byte_len(width, height).unwrap_or_else(|| {
            panic!("pixel buffer too large: {}x{}", width, height);
        });
        let data = rgb.iter().copied().cycle().take(len).collect();
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw interleaved RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the byte size overflows and
    /// [`Error::DataLength`] if `data` does not hold exactly
    /// `width * height * 3` samples.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected =
            Self::byte_len(width, height).ok_or(Error::InvalidDimension { width, height })?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut buf = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let idx = buf.offset(x, y);
                buf.data[idx..idx + CHANNELS].copy_from_slice(&f(x, y));
            }
        }
        buf
    }

    fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Get the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Check whether the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The rect covering the whole buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize * CHANNELS]
    }

    /// Get the color at `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        if !self.bounds().contains_point(x, y) {
            return None;
        }
        let idx = self.offset(x, y);
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Set the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] outside the buffer.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: Rgb) -> Result<()> {
        if !self.bounds().contains_point(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.offset(x, y);
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgb);
        Ok(())
    }

    /// Paint every cell of `rect` with `rgb`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RectOutOfBounds`] unless `rect` lies inside the buffer.
    pub fn fill_rect(&mut self, rect: Rect, rgb: Rgb) -> Result<()> {
        if !self.bounds().contains_rect(&rect) {
            return Err(Error::RectOutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            });
        }
        for y in rect.y..rect.bottom() {
            let start = self.offset(rect.x, y);
            let end = start + rect.w as usize * CHANNELS;
            for cell in self.data[start..end].chunks_exact_mut(CHANNELS) {
                cell.copy_from_slice(&rgb);
            }
        }
        Ok(())
    }

    /// Overwrite this buffer with the contents of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn copy_from(&mut self, src: &PixelBuffer) -> Result<()> {
        if !self.sizes_equal(src) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: src.dimensions(),
            });
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Count cells whose color differs between two same-sized buffers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_diff_pixels(&self, other: &PixelBuffer) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        let count = self
            .data
            .chunks_exact(CHANNELS)
            .zip(other.data.chunks_exact(CHANNELS))
            .filter(|(a, b)| a != b)
            .count();
        Ok(count as u64)
    }

    /// Count cells equal to `rgb`.
    pub fn count_color(&self, rgb: Rgb) -> u64 {
        self.data
            .chunks_exact(CHANNELS)
            .filter(|cell| *cell == rgb)
            .count() as u64
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.data().len(), 18);
        assert!(buf.data().iter().all(|&v| v == 0));
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_zero_sized() {
        let buf = PixelBuffer::new(0, 5);
        assert!(buf.is_empty());
        assert!(buf.data().is_empty());
        assert_eq!(buf.get_rgb(0, 0), None);
    }

    #[test]
    fn test_from_raw_length_checked() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_ok());
        let err = PixelBuffer::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLength {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_get_set() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_rgb(3, 1, [1, 2, 3]).unwrap();
        assert_eq!(buf.get_rgb(3, 1), Some([1, 2, 3]));
        assert_eq!(&buf.row(1)[9..12], &[1, 2, 3]);
        assert!(buf.set_rgb(4, 0, [0, 0, 0]).is_err());
    }

    #[test]
    fn test_fill_rect() {
        let mut buf = PixelBuffer::new(5, 5);
        buf.fill_rect(Rect::new(1, 2, 3, 2), [255, 255, 255]).unwrap();
        assert_eq!(buf.count_color([255, 255, 255]), 6);
        assert_eq!(buf.get_rgb(1, 2), Some([255, 255, 255]));
        assert_eq!(buf.get_rgb(3, 3), Some([255, 255, 255]));
        assert_eq!(buf.get_rgb(4, 3), Some([0, 0, 0]));
        assert!(buf.fill_rect(Rect::new(4, 4, 2, 1), [1, 1, 1]).is_err());
    }

    #[test]
    fn test_from_fn_and_diff() {
        let a = PixelBuffer::from_fn(3, 3, |x, y| [x as u8, y as u8, 0]);
        let mut b = a.clone();
        assert_eq!(a.count_diff_pixels(&b).unwrap(), 0);
        b.set_rgb(2, 2, [9, 9, 9]).unwrap();
        assert_eq!(a.count_diff_pixels(&b).unwrap(), 1);
        assert!(a.count_diff_pixels(&PixelBuffer::new(2, 3)).is_err());
    }

    #[test]
    fn test_copy_from() {
        let src = PixelBuffer::filled(2, 2, [7, 8, 9]);
        let mut dst = PixelBuffer::new(2, 2);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);
        assert!(PixelBuffer::new(1, 2).copy_from(&src).is_err());
    }
}
