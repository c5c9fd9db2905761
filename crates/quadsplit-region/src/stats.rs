//! Region statistics - average color and channel variance over rectangles
//!
//! Two renditions of the same statistics are provided:
//!
//! - free functions ([`average_color`], [`channel_variance`],
//!   [`mean_variance`]) that scan the rectangle directly;
//! - [`RegionStats`], built once per buffer from integral images (summed
//!   area tables of sample values and of squared sample values), answering
//!   each query in O(1).
//!
//! Both compute exact integer sums, so they agree bit for bit. Averages are
//! truncated to `u8`; variances are population variances.

use crate::error::{RegionError, RegionResult};
use quadsplit_core::{CHANNELS, PixelBuffer, Rect, Rgb};

fn check_rect(buffer_bounds: Rect, rect: Rect) -> RegionResult<()> {
    if rect.is_empty() {
        return Err(RegionError::EmptyRegion(rect));
    }
    if !buffer_bounds.contains_rect(&rect) {
        return Err(quadsplit_core::Error::RectOutOfBounds {
            rect,
            width: buffer_bounds.w,
            height: buffer_bounds.h,
        }
        .into());
    }
    Ok(())
}

/// Per-channel sums over a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ChannelSums {
    n: u64,
    sum: [u64; CHANNELS],
    sum_sq: [u64; CHANNELS],
}

impl ChannelSums {
    fn average(&self) -> Rgb {
        self.sum.map(|s| (s / self.n) as u8)
    }

    fn mean(&self) -> [f64; CHANNELS] {
        self.sum.map(|s| s as f64 / self.n as f64)
    }

    fn variance(&self) -> [f64; CHANNELS] {
        let n = self.n as u128;
        let denom = (self.n as f64) * (self.n as f64);
        let mut out = [0.0; CHANNELS];
        for (c, v) in out.iter_mut().enumerate() {
            let s = self.sum[c] as u128;
            let numer = n * self.sum_sq[c] as u128 - s * s;
            *v = numer as f64 / denom;
        }
        out
    }
}

fn mean3(v: [f64; CHANNELS]) -> f64 {
    v.iter().sum::<f64>() / CHANNELS as f64
}

fn scan_sums(buffer: &PixelBuffer, rect: Rect) -> ChannelSums {
    let mut acc = ChannelSums {
        n: rect.area(),
        ..Default::default()
    };
    for y in rect.y..rect.bottom() {
        let row = buffer.row(y);
        let start = rect.x as usize * CHANNELS;
        let end = rect.right() as usize * CHANNELS;
        for cell in row[start..end].chunks_exact(CHANNELS) {
            for c in 0..CHANNELS {
                let v = cell[c] as u64;
                acc.sum[c] += v;
                acc.sum_sq[c] += v * v;
            }
        }
    }
    acc
}

/// Average color of `rect`, each channel truncated to `u8`.
///
/// # Errors
///
/// Returns [`RegionError::EmptyRegion`] for a zero-area rect and a core
/// `RectOutOfBounds` error if the rect leaves the buffer.
pub fn average_color(buffer: &PixelBuffer, rect: Rect) -> RegionResult<Rgb> {
    check_rect(buffer.bounds(), rect)?;
    Ok(scan_sums(buffer, rect).average())
}

/// Population variance of each channel over `rect`.
pub fn channel_variance(buffer: &PixelBuffer, rect: Rect) -> RegionResult<[f64; CHANNELS]> {
    check_rect(buffer.bounds(), rect)?;
    Ok(scan_sums(buffer, rect).variance())
}

/// Mean of the three channel variances over `rect`.
pub fn mean_variance(buffer: &PixelBuffer, rect: Rect) -> RegionResult<f64> {
    Ok(mean3(channel_variance(buffer, rect)?))
}

/// Integral image (summed area table) for O(1) rectangle sums
///
/// Entry `(x, y)` holds the per-channel sum over `[0, x) x [0, y)`, so the
/// table is `(width + 1) x (height + 1)`.
#[derive(Debug, Clone)]
pub struct IntegralImage {
    data: Vec<[u64; CHANNELS]>,
    width: u32,
    height: u32,
}

/// Squared integral image for variance computation
#[derive(Debug, Clone)]
pub struct SquaredIntegralImage {
    inner: IntegralImage,
}

impl IntegralImage {
    /// Create an integral image of the sample values
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self::build(buffer, |v| v)
    }

    fn build(buffer: &PixelBuffer, f: impl Fn(u64) -> u64) -> Self {
        let (width, height) = buffer.dimensions();
        let stride = width as usize + 1;
        let mut data = vec![[0u64; CHANNELS]; stride * (height as usize + 1)];
        for y in 0..height as usize {
            let row = buffer.row(y as u32);
            let mut run = [0u64; CHANNELS];
            for (x, cell) in row.chunks_exact(CHANNELS).enumerate() {
                let above = data[y * stride + x + 1];
                let out = &mut data[(y + 1) * stride + x + 1];
                for c in 0..CHANNELS {
                    run[c] += f(cell[c] as u64);
                    out[c] = above[c] + run[c];
                }
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Get the width of the source buffer
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the source buffer
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the integral value at table position `(x, y)`, `x <= width`,
    /// `y <= height`
    pub fn get(&self, x: u32, y: u32) -> Option<[u64; CHANNELS]> {
        if x > self.width || y > self.height {
            return None;
        }
        Some(self.data[y as usize * (self.width as usize + 1) + x as usize])
    }

    /// Per-channel sum over `rect`; the caller guarantees `rect` is inside.
    #[inline]
    fn sum_unchecked(&self, rect: Rect) -> [u64; CHANNELS] {
        let stride = self.width as usize + 1;
        let at = |x: u32, y: u32| self.data[y as usize * stride + x as usize];
        let (a, b) = (at(rect.x, rect.y), at(rect.right(), rect.y));
        let (c, d) = (at(rect.x, rect.bottom()), at(rect.right(), rect.bottom()));
        let mut out = [0u64; CHANNELS];
        for i in 0..CHANNELS {
            out[i] = d[i] + a[i] - b[i] - c[i];
        }
        out
    }

    /// Compute the per-channel sum of pixels in a rectangle
    pub fn sum_rect(&self, rect: Rect) -> RegionResult<[u64; CHANNELS]> {
        check_rect(Rect::new(0, 0, self.width, self.height), rect)?;
        Ok(self.sum_unchecked(rect))
    }
}

impl SquaredIntegralImage {
    /// Create an integral image of the squared sample values
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            inner: IntegralImage::build(buffer, |v| v * v),
        }
    }

    /// Compute the per-channel sum of squared pixels in a rectangle
    pub fn sum_rect(&self, rect: Rect) -> RegionResult<[u64; CHANNELS]> {
        self.inner.sum_rect(rect)
    }
}

/// Region statistics over one input buffer
///
/// Built once per buffer; every query is a handful of table lookups.
#[derive(Debug, Clone)]
pub struct RegionStats {
    sums: IntegralImage,
    squares: SquaredIntegralImage,
}

impl RegionStats {
    /// Build the integral tables for `buffer`.
    pub fn new(buffer: &PixelBuffer) -> Self {
        Self {
            sums: IntegralImage::from_buffer(buffer),
            squares: SquaredIntegralImage::from_buffer(buffer),
        }
    }

    /// The rect covering the whole source buffer.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.sums.width(), self.sums.height())
    }

    #[inline]
    fn sums_unchecked(&self, rect: Rect) -> ChannelSums {
        ChannelSums {
            n: rect.area(),
            sum: self.sums.sum_unchecked(rect),
            sum_sq: self.squares.inner.sum_unchecked(rect),
        }
    }

    /// Average color over a rect known to be non-empty and inside the
    /// buffer. Quadtree regions always are.
    #[inline]
    pub(crate) fn average_color_unchecked(&self, rect: Rect) -> Rgb {
        self.sums_unchecked(rect).average()
    }

    /// Unrounded mean color over a rect known to be non-empty and inside
    /// the buffer.
    #[inline]
    pub(crate) fn mean_color_unchecked(&self, rect: Rect) -> [f64; CHANNELS] {
        self.sums_unchecked(rect).mean()
    }

    /// Mean channel variance over a rect known to be non-empty and inside
    /// the buffer.
    #[inline]
    pub(crate) fn mean_variance_unchecked(&self, rect: Rect) -> f64 {
        mean3(self.sums_unchecked(rect).variance())
    }

    /// Average color of `rect`, each channel truncated to `u8`.
    pub fn average_color(&self, rect: Rect) -> RegionResult<Rgb> {
        check_rect(self.bounds(), rect)?;
        Ok(self.average_color_unchecked(rect))
    }

    /// Unrounded mean of each channel over `rect`.
    pub fn mean_color(&self, rect: Rect) -> RegionResult<[f64; CHANNELS]> {
        check_rect(self.bounds(), rect)?;
        Ok(self.mean_color_unchecked(rect))
    }

    /// Population variance of each channel over `rect`.
    pub fn channel_variance(&self, rect: Rect) -> RegionResult<[f64; CHANNELS]> {
        check_rect(self.bounds(), rect)?;
        Ok(self.sums_unchecked(rect).variance())
    }

    /// Mean of the three channel variances over `rect`.
    pub fn mean_variance(&self, rect: Rect) -> RegionResult<f64> {
        check_rect(self.bounds(), rect)?;
        Ok(self.mean_variance_unchecked(rect))
    }
}
