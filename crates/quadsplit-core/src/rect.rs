//! Rect - Half-open rectangular regions
//!
//! A [`Rect`] covers `[x, x + w) x [y, y + h)` in buffer coordinates, with
//! `y` growing downward. Quadtree regions are described by rects, and the
//! quadrant split used by the quadtree lives here so that the geometry can
//! be tested on its own.

/// A rectangle region
///
/// A simple `Copy` type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rect
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area in pixels
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rect is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if the rect can no longer be split into quadrants
    #[inline]
    pub fn is_atomic(&self) -> bool {
        self.w <= 1 || self.h <= 1
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rect contains another rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this rect overlaps with another
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Split the rect at the integer midpoint of its extents.
    ///
    /// The midpoints are `(x + right) / 2` and `(y + bottom) / 2` with floor
    /// division. Quadrants are returned in the order south-west, south-east,
    /// north-east, north-west (y grows downward, so "south" is the bottom
    /// half). Returns `None` for atomic rects (width or height <= 1), which
    /// keeps every produced quadrant non-empty.
    pub fn split_quadrants(&self) -> Option<[Rect; 4]> {
        if self.is_atomic() {
            return None;
        }
        let xm = (self.x + self.right()) / 2;
        let ym = (self.y + self.bottom()) / 2;
        let (x0, x1, y0, y1) = (self.x, self.right(), self.y, self.bottom());
        Some([
            Rect::new(x0, ym, xm - x0, y1 - ym),
            Rect::new(xm, ym, x1 - xm, y1 - ym),
            Rect::new(xm, y0, x1 - xm, ym - y0),
            Rect::new(x0, y0, xm - x0, ym - y0),
        ])
    }
}
