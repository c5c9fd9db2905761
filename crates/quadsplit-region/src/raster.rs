//! Rasterization of merge records
//!
//! The quadtree traversals do not touch pixels; they emit one
//! [`RegionFill`] per merged region. This module paints those records into
//! buffers. Records from a single traversal never overlap, so painting order
//! does not matter.

use crate::error::RegionResult;
use quadsplit_core::{PixelBuffer, Rect, Rgb};

/// A merged region and the color it is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionFill {
    /// Region rectangle
    pub rect: Rect,
    /// Fill color
    pub color: Rgb,
}

impl RegionFill {
    /// Create a new fill record
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}

/// Paint every record into `buffer`.
///
/// # Errors
///
/// Returns a core `RectOutOfBounds` error if a record leaves the buffer;
/// records painted before the failing one stay painted.
pub fn paint_fills(buffer: &mut PixelBuffer, fills: &[RegionFill]) -> RegionResult<()> {
    for fill in fills {
        buffer.fill_rect(fill.rect, fill.color)?;
    }
    Ok(())
}

/// Draw the 1-pixel border of every record's rectangle in `color`.
///
/// This renders the region layout as boundary lines instead of filled
/// blocks, for example on top of a compressed image.
pub fn outline_fills(
    buffer: &mut PixelBuffer,
    fills: &[RegionFill],
    color: Rgb,
) -> RegionResult<()> {
    for fill in fills {
        let r = fill.rect;
        if r.is_empty() {
            continue;
        }
        buffer.fill_rect(Rect::new(r.x, r.y, r.w, 1), color)?;
        buffer.fill_rect(Rect::new(r.x, r.bottom() - 1, r.w, 1), color)?;
        buffer.fill_rect(Rect::new(r.x, r.y, 1, r.h), color)?;
        buffer.fill_rect(Rect::new(r.right() - 1, r.y, 1, r.h), color)?;
    }
    Ok(())
}

/// Total number of pixels covered by the records.
pub fn covered_pixels(fills: &[RegionFill]) -> u64 {
    fills.iter().map(|f| f.rect.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadsplit_core::color::{BLACK, WHITE};

    #[test]
    fn test_paint_fills() {
        let mut buf = PixelBuffer::new(4, 4);
        let fills = [
            RegionFill::new(Rect::new(0, 0, 2, 2), [9, 9, 9]),
            RegionFill::new(Rect::new(2, 2, 2, 2), WHITE),
        ];
        paint_fills(&mut buf, &fills).unwrap();
        assert_eq!(buf.count_color([9, 9, 9]), 4);
        assert_eq!(buf.count_color(WHITE), 4);
        assert_eq!(buf.count_color(BLACK), 8);
        assert_eq!(covered_pixels(&fills), 8);
    }

    #[test]
    fn test_paint_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 2);
        let fills = [RegionFill::new(Rect::new(1, 1, 2, 1), WHITE)];
        assert!(paint_fills(&mut buf, &fills).is_err());
    }

    #[test]
    fn test_outline_fills() {
        let mut buf = PixelBuffer::new(5, 5);
        let fills = [RegionFill::new(Rect::new(0, 0, 4, 3), [1, 1, 1])];
        outline_fills(&mut buf, &fills, WHITE).unwrap();
        // Border of a 4x3 rect: 4 + 4 + 1 + 1 pixels
        assert_eq!(buf.count_color(WHITE), 10);
        assert_eq!(buf.get_rgb(1, 1), Some(BLACK));
        assert_eq!(buf.get_rgb(3, 2), Some(WHITE));
    }

    #[test]
    fn test_outline_single_pixel() {
        let mut buf = PixelBuffer::new(2, 2);
        let fills = [RegionFill::new(Rect::new(1, 0, 1, 1), [0, 0, 0])];
        outline_fills(&mut buf, &fills, WHITE).unwrap();
        assert_eq!(buf.count_color(WHITE), 1);
    }
}
