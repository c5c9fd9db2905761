//! Quadtree - Hierarchical image region decomposition
//!
//! A quadtree recursively divides an image into four quadrants until every
//! region is one pixel wide or one pixel high. Each region carries the
//! average color of the input pixels it covers.
//!
//! # Merge decision
//!
//! After subdivision, a top-down traversal decides for each region whether
//! its children can be discarded:
//!
//! - the *divergence* is the mean Euclidean distance between the four
//!   children's average colors and the region's own average color (the
//!   unrounded mean for the root);
//! - the *region variance* is the mean of the three channel variances.
//!
//! A region merges when `divergence < color_tolerance` or
//! `variance < variance_tolerance`. Merged regions become leaves and are
//! reported as [`RegionFill`] records; the others recurse into their
//! children. Single-pixel regions are never reported on their own.
//!
//! Two traversals share this rule:
//!
//! - **compress** uses a caller tolerance for divergence and the fixed
//!   [`COMPRESS_VARIANCE_THRESHOLD`] for variance, and fills merged regions
//!   with their average color;
//! - **edge detect** takes both tolerances from the caller and fills merged
//!   regions with white on a black mask. Uniform blocks come out white, and
//!   areas that keep splitting down to single pixels stay black.
//!
//! # Examples
//!
//! ```
//! use quadsplit_core::PixelBuffer;
//! use quadsplit_region::QuadTree;
//!
//! let input = PixelBuffer::filled(8, 8, [10, 20, 30]);
//! let mut tree = QuadTree::new(&input).unwrap();
//! let compressed = tree.compress(10.0).unwrap();
//! assert_eq!(compressed, &input);
//! ```

use crate::error::{RegionError, RegionResult};
use crate::options::{CompressOptions, EdgeDetectOptions, validate_tolerance};
use crate::raster::{RegionFill, covered_pixels, paint_fills};
use crate::stats::RegionStats;
use log::debug;
use quadsplit_core::color::{self, BLACK, WHITE};
use quadsplit_core::{PixelBuffer, Rect, Rgb};
use std::fmt;

/// Variance below which compression always merges a region.
pub const COMPRESS_VARIANCE_THRESHOLD: f64 = 5.0;

/// Position of a child region inside its parent
///
/// Children are stored in the order of [`Quadrant::ALL`]. `y` grows
/// downward, so the "south" quadrants are the bottom half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left half of the bottom row
    SouthWest = 0,
    /// Right half of the bottom row
    SouthEast = 1,
    /// Right half of the top row
    NorthEast = 2,
    /// Left half of the top row
    NorthWest = 3,
}

impl Quadrant {
    /// All quadrants in child storage order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::SouthWest,
        Quadrant::SouthEast,
        Quadrant::NorthEast,
        Quadrant::NorthWest,
    ];

    /// Index into a region's children
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A quadtree node
///
/// A region either is a leaf or has exactly four children that partition
/// its rectangle at the integer midpoint of its extents.
///
/// Besides its truncated average `color`, a region keeps the `mean` its
/// divergence is measured against. The two agree except at the root of a
/// [`QuadTree`], whose mean is the unrounded mean of the whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    rect: Rect,
    color: Rgb,
    mean: [f64; 3],
    children: Option<Box<[Region; 4]>>,
}

impl Region {
    /// Create a leaf region whose mean is its color
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self::with_mean(rect, color, color.map(f64::from))
    }

    /// Create a leaf region with a separate unrounded mean
    pub fn with_mean(rect: Rect, color: Rgb, mean: [f64; 3]) -> Self {
        Self {
            rect,
            color,
            mean,
            children: None,
        }
    }

    /// Root region over `rect`: truncated color, unrounded mean
    fn root(rect: Rect, stats: &RegionStats) -> Self {
        Self::with_mean(
            rect,
            stats.average_color_unchecked(rect),
            stats.mean_color_unchecked(rect),
        )
    }

    /// Get the region rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the region's average color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Get the mean color the region's divergence is measured against
    pub fn mean(&self) -> [f64; 3] {
        self.mean
    }

    /// Get the four children, if any
    pub fn children(&self) -> Option<&[Region; 4]> {
        self.children.as_deref()
    }

    /// Get the child in quadrant `q`, if any
    pub fn child(&self, q: Quadrant) -> Option<&Region> {
        self.children().map(|c| &c[q.index()])
    }

    /// Check if the region has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Discard the children, making this region a leaf
    fn prune(&mut self) {
        self.children = None;
    }

    /// Mean Euclidean distance between the children's colors and this
    /// region's mean, or `None` for a leaf.
    pub fn divergence(&self) -> Option<f64> {
        let children = self.children()?;
        let total: f64 = children
            .iter()
            .map(|c| color::distance_to_mean(c.color, self.mean))
            .sum();
        Some(total / children.len() as f64)
    }

    /// Number of regions in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |c| c.iter().map(Region::node_count).sum())
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some(c) => c.iter().map(Region::leaf_count).sum(),
        }
    }

    /// Number of levels below this region (0 for a leaf)
    pub fn depth(&self) -> u32 {
        self.children()
            .map_or(0, |c| 1 + c.iter().map(Region::depth).max().unwrap_or(0))
    }

    /// Collect the leaves of this subtree in depth-first storage order
    pub fn leaves(&self) -> Vec<&Region> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(region) = stack.pop() {
            match region.children() {
                None => out.push(region),
                Some(c) => stack.extend(c.iter().rev()),
            }
        }
        out
    }
}

/// Split `region` recursively down to single-pixel granularity.
///
/// Regions one pixel wide or high are left as leaves. Every child's color
/// is computed from `stats` as soon as it is created. Any existing children
/// are replaced.
pub fn subdivide(region: &mut Region, stats: &RegionStats) {
    let Some(quads) = region.rect.split_quadrants() else {
        return;
    };
    let mut children =
        Box::new(quads.map(|r| Region::new(r, stats.average_color_unchecked(r))));
    for child in children.iter_mut() {
        subdivide(child, stats);
    }
    region.children = Some(children);
}

/// How a merged region is painted
#[derive(Debug, Clone, Copy)]
enum Paint {
    /// Recompute the region's average color and fill with it
    RegionAverage,
    /// Fill with a fixed color
    Flat(Rgb),
}

#[derive(Debug, Clone, Copy)]
struct MergeRule {
    color_tolerance: f64,
    variance_tolerance: f64,
    paint: Paint,
}

fn merge_decision(
    region: &mut Region,
    stats: &RegionStats,
    rule: &MergeRule,
    fills: &mut Vec<RegionFill>,
) {
    let Some(divergence) = region.divergence() else {
        return;
    };
    let variance = stats.mean_variance_unchecked(region.rect);

    if divergence < rule.color_tolerance || variance < rule.variance_tolerance {
        let fill_color = match rule.paint {
            Paint::RegionAverage => {
                region.color = stats.average_color_unchecked(region.rect);
                region.color
            }
            Paint::Flat(c) => c,
        };
        fills.push(RegionFill::new(region.rect, fill_color));
        region.prune();
    } else if let Some(children) = region.children.as_deref_mut() {
        for child in children.iter_mut() {
            merge_decision(child, stats, rule, fills);
        }
    }
}

/// Compression merge traversal over a subdivided region.
///
/// Appends one record per merged region to `fills`, colored with the
/// region's average color.
pub fn merge_decision_for_compress(
    region: &mut Region,
    stats: &RegionStats,
    tolerance: f64,
    fills: &mut Vec<RegionFill>,
) {
    let rule = MergeRule {
        color_tolerance: tolerance,
        variance_tolerance: COMPRESS_VARIANCE_THRESHOLD,
        paint: Paint::RegionAverage,
    };
    merge_decision(region, stats, &rule, fills);
}

/// Edge-mask merge traversal over a subdivided region.
///
/// Appends one white record per merged region to `fills`.
pub fn merge_decision_for_edges(
    region: &mut Region,
    stats: &RegionStats,
    color_tolerance: f64,
    variance_tolerance: f64,
    fills: &mut Vec<RegionFill>,
) {
    let rule = MergeRule {
        color_tolerance,
        variance_tolerance,
        paint: Paint::Flat(WHITE),
    };
    merge_decision(region, stats, &rule, fills);
}

/// Outcome of one merge traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of merged regions (fill records)
    pub merged_regions: usize,
    /// Pixels covered by merged regions
    pub filled_pixels: u64,
    /// Pixels left to single-pixel leaves that never merged
    pub untouched_pixels: u64,
    /// Leaves of the pruned tree
    pub leaves: usize,
    /// Depth of the pruned tree
    pub depth: u32,
}

impl MergeSummary {
    /// Summarize a pruned tree and the records its traversal produced
    pub fn new(root: &Region, fills: &[RegionFill]) -> Self {
        let filled_pixels = covered_pixels(fills);
        Self {
            merged_regions: fills.len(),
            filled_pixels,
            untouched_pixels: root.rect().area() - filled_pixels,
            leaves: root.leaf_count(),
            depth: root.depth(),
        }
    }
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merged={} filled_px={} untouched_px={} leaves={} depth={}",
            self.merged_regions, self.filled_pixels, self.untouched_pixels, self.leaves, self.depth
        )
    }
}

/// Quadtree over an input buffer
///
/// Owns the region hierarchy and the two output buffers. Every
/// [`compress`](Self::compress) and [`edge_detect`](Self::edge_detect) call
/// rebuilds the tree from the untouched input and resets its output buffer,
/// so results depend only on the input and the tolerances.
#[derive(Debug, Clone)]
pub struct QuadTree<'a> {
    input: &'a PixelBuffer,
    stats: RegionStats,
    compressed: PixelBuffer,
    edge_mask: PixelBuffer,
    root: Region,
}

impl<'a> QuadTree<'a> {
    /// Create a quadtree over `input`.
    ///
    /// The root starts as a leaf covering the whole buffer; the compressed
    /// output starts as a copy of the input and the edge mask as black.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if the buffer has zero width
    /// or zero height.
    pub fn new(input: &'a PixelBuffer) -> RegionResult<Self> {
        if input.is_empty() {
            return Err(RegionError::InvalidInput {
                width: input.width(),
                height: input.height(),
            });
        }
        let stats = RegionStats::new(input);
        let bounds = input.bounds();
        let root = Region::root(bounds, &stats);
        Ok(Self {
            input,
            stats,
            compressed: input.clone(),
            edge_mask: PixelBuffer::new(input.width(), input.height()),
            root,
        })
    }

    /// Get the input buffer
    pub fn input(&self) -> &PixelBuffer {
        self.input
    }

    /// Get the region statistics of the input
    pub fn stats(&self) -> &RegionStats {
        &self.stats
    }

    /// Get the root region
    pub fn root(&self) -> &Region {
        &self.root
    }

    /// Get the compressed output of the last [`compress`](Self::compress)
    pub fn compressed(&self) -> &PixelBuffer {
        &self.compressed
    }

    /// Get the mask produced by the last [`edge_detect`](Self::edge_detect)
    pub fn edge_mask(&self) -> &PixelBuffer {
        &self.edge_mask
    }

    /// Rebuild the whole tree from the input, down to single pixels.
    pub fn subdivide(&mut self) {
        let bounds = self.input.bounds();
        self.root = Region::root(bounds, &self.stats);
        subdivide(&mut self.root, &self.stats);
        debug!(
            "QuadTree::subdivide {}x{} -> nodes={} leaves={} depth={}",
            bounds.w,
            bounds.h,
            self.root.node_count(),
            self.root.leaf_count(),
            self.root.depth()
        );
    }

    /// Subdivide and run the compression traversal, returning the merged
    /// regions without painting them.
    pub fn compress_regions(&mut self, tolerance: f64) -> RegionResult<Vec<RegionFill>> {
        validate_tolerance("tolerance", tolerance)?;
        self.subdivide();
        let mut fills = Vec::new();
        merge_decision_for_compress(&mut self.root, &self.stats, tolerance, &mut fills);
        debug!(
            "QuadTree::compress tolerance={} {}",
            tolerance,
            MergeSummary::new(&self.root, &fills)
        );
        Ok(fills)
    }

    /// Compress the input.
    ///
    /// Merged regions are filled with their average color; pixels that
    /// never merged keep their input color.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidArgument`] for a negative or
    /// non-finite tolerance, before any buffer is touched.
    pub fn compress(&mut self, tolerance: f64) -> RegionResult<&PixelBuffer> {
        let fills = self.compress_regions(tolerance)?;
        self.compressed.copy_from(self.input)?;
        paint_fills(&mut self.compressed, &fills)?;
        Ok(&self.compressed)
    }

    /// Compress the input with options
    pub fn compress_with(&mut self, options: &CompressOptions) -> RegionResult<&PixelBuffer> {
        options.validate()?;
        self.compress(options.tolerance)
    }

    /// Subdivide and run the edge traversal, returning the marked regions
    /// without painting them.
    pub fn edge_regions(
        &mut self,
        color_tolerance: f64,
        variance_tolerance: f64,
    ) -> RegionResult<Vec<RegionFill>> {
        validate_tolerance("color_tolerance", color_tolerance)?;
        validate_tolerance("variance_tolerance", variance_tolerance)?;
        self.subdivide();
        let mut fills = Vec::new();
        merge_decision_for_edges(
            &mut self.root,
            &self.stats,
            color_tolerance,
            variance_tolerance,
            &mut fills,
        );
        debug!(
            "QuadTree::edge_detect color_tolerance={} variance_tolerance={} {}",
            color_tolerance,
            variance_tolerance,
            MergeSummary::new(&self.root, &fills)
        );
        Ok(fills)
    }

    /// Build the edge mask: merged regions white, everything else black.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidArgument`] for a negative or
    /// non-finite tolerance, before any buffer is touched.
    pub fn edge_detect(
        &mut self,
        color_tolerance: f64,
        variance_tolerance: f64,
    ) -> RegionResult<&PixelBuffer> {
        let fills = self.edge_regions(color_tolerance, variance_tolerance)?;
        let bounds = self.edge_mask.bounds();
        self.edge_mask.fill_rect(bounds, BLACK)?;
        paint_fills(&mut self.edge_mask, &fills)?;
        Ok(&self.edge_mask)
    }

    /// Build the edge mask with options
    pub fn edge_detect_with(&mut self, options: &EdgeDetectOptions) -> RegionResult<&PixelBuffer> {
        options.validate()?;
        self.edge_detect(options.color_tolerance, options.variance_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE })
    }

    fn check_partition(region: &Region, stats: &RegionStats) {
        assert_eq!(region.color(), stats.average_color(region.rect()).unwrap());
        match region.children() {
            None => assert!(region.rect().is_atomic()),
            Some(children) => {
                let parent = region.rect();
                let total: u64 = children.iter().map(|c| c.rect().area()).sum();
                assert_eq!(total, parent.area());
                for (i, a) in children.iter().enumerate() {
                    assert!(!a.rect().is_empty());
                    assert!(parent.contains_rect(&a.rect()));
                    for b in children.iter().skip(i + 1) {
                        assert!(!a.rect().overlaps(&b.rect()));
                    }
                    check_partition(a, stats);
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        let input = PixelBuffer::new(0, 7);
        assert!(matches!(
            QuadTree::new(&input),
            Err(RegionError::InvalidInput {
                width: 0,
                height: 7
            })
        ));
        let input = PixelBuffer::new(5, 0);
        assert!(QuadTree::new(&input).is_err());
    }

    #[test]
    fn test_subdivide_partitions() {
        let input = PixelBuffer::from_fn(7, 5, |x, y| [(x * 30) as u8, (y * 40) as u8, 9]);
        let mut tree = QuadTree::new(&input).unwrap();
        assert!(tree.root().is_leaf());
        tree.subdivide();
        let stats = RegionStats::new(&input);
        check_partition(tree.root(), &stats);
        // Leaves cover every pixel exactly once
        let area: u64 = tree.root().leaves().iter().map(|l| l.rect().area()).sum();
        assert_eq!(area, 35);
    }

    #[test]
    fn test_subdivide_power_of_two() {
        let input = checker(4, 4);
        let mut tree = QuadTree::new(&input).unwrap();
        tree.subdivide();
        let root = tree.root();
        assert_eq!(root.leaf_count(), 16);
        assert_eq!(root.node_count(), 21);
        assert_eq!(root.depth(), 2);
        assert_eq!(
            root.child(Quadrant::SouthWest).unwrap().rect(),
            Rect::new(0, 2, 2, 2)
        );
        assert_eq!(
            root.child(Quadrant::NorthEast).unwrap().rect(),
            Rect::new(2, 0, 2, 2)
        );
    }

    #[test]
    fn test_divergence() {
        let input = checker(2, 2);
        let mut tree = QuadTree::new(&input).unwrap();
        assert_eq!(tree.root().divergence(), None);
        tree.subdivide();
        // Root mean is 127.5; every child is 127.5 away on each channel
        let expected = 127.5 * 3f64.sqrt();
        let d = tree.root().divergence().unwrap();
        assert!((d - expected).abs() < 1e-9);
    }

    #[test]
    fn test_root_uses_exact_mean() {
        let mut input = PixelBuffer::new(2, 2);
        input.set_rgb(1, 1, [7, 7, 7]).unwrap();
        let mut tree = QuadTree::new(&input).unwrap();
        assert_eq!(tree.root().color(), [1, 1, 1]);
        assert_eq!(tree.root().mean(), [1.75, 1.75, 1.75]);

        tree.subdivide();
        let expected = (3.0 * 1.75 + 5.25) * 3f64.sqrt() / 4.0;
        let d = tree.root().divergence().unwrap();
        assert!((d - expected).abs() < 1e-9);
        assert!(d > 4.0);

        // Divergence against the truncated color would fall under 4 and merge
        let edges = tree.edge_detect(4.0, 0.0).unwrap();
        assert_eq!(edges.count_color(BLACK), 4);
        let compressed = tree.compress(4.0).unwrap().clone();
        assert_eq!(compressed, input);
    }

    #[test]
    fn test_single_pixel_root_is_leaf() {
        let input = PixelBuffer::filled(1, 1, [4, 5, 6]);
        let mut tree = QuadTree::new(&input).unwrap();
        assert_eq!(tree.compress(0.0).unwrap(), &input);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.edge_detect(0.0, 0.0).unwrap().count_color(BLACK), 1);
    }

    #[test]
    fn test_uniform_compress_is_identity() {
        let input = PixelBuffer::filled(9, 6, [200, 13, 77]);
        let mut tree = QuadTree::new(&input).unwrap();
        for tol in [0.0, 1.0, 10.0, 1000.0] {
            assert_eq!(tree.compress(tol).unwrap(), &input);
        }
    }

    #[test]
    fn test_two_by_two_uniform_compress() {
        let input = PixelBuffer::filled(2, 2, [10, 20, 30]);
        let mut tree = QuadTree::new(&input).unwrap();
        let fills = tree.compress_regions(0.0).unwrap();
        assert_eq!(fills, vec![RegionFill::new(input.bounds(), [10, 20, 30])]);
        assert_eq!(tree.compress(0.0).unwrap(), &input);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_checker_compress() {
        let input = checker(2, 2);
        let mut tree = QuadTree::new(&input).unwrap();
        // Neither divergence nor variance is low: leaves keep the input
        assert_eq!(tree.compress(0.0).unwrap(), &input);
        assert_eq!(tree.root().leaf_count(), 4);
        // A huge tolerance merges the root into its average
        let out = tree.compress(1000.0).unwrap();
        assert_eq!(out.count_color([127, 127, 127]), 4);
        assert!(tree.root().is_leaf());
    }

    #[test]
    fn test_checker_edges_stay_black() {
        let input = checker(2, 2);
        let mut tree = QuadTree::new(&input).unwrap();
        let mask = tree.edge_detect(5.0, 3.0).unwrap();
        assert_eq!(mask.count_color(BLACK), 4);
    }

    #[test]
    fn test_quadrant_blocks_edges_white() {
        // Top-left and bottom-right black, the other quadrants white
        let input = PixelBuffer::from_fn(4, 4, |x, y| if (x < 2) == (y < 2) { BLACK } else { WHITE });
        let mut tree = QuadTree::new(&input).unwrap();
        let fills = tree.edge_regions(5.0, 3.0).unwrap();
        assert_eq!(fills.len(), 4);
        for fill in &fills {
            assert_eq!(fill.rect.w, 2);
            assert_eq!(fill.rect.h, 2);
            assert_eq!(fill.color, WHITE);
        }
        assert_eq!(tree.edge_detect(5.0, 3.0).unwrap().count_color(WHITE), 16);
    }

    #[test]
    fn test_edge_mask_resets_between_calls() {
        let input = PixelBuffer::from_fn(4, 4, |x, y| if (x < 2) == (y < 2) { BLACK } else { WHITE });
        let mut tree = QuadTree::new(&input).unwrap();
        assert_eq!(tree.edge_detect(5.0, 3.0).unwrap().count_color(WHITE), 16);
        // Zero tolerances mark nothing, and the previous mask is gone
        assert_eq!(tree.edge_detect(0.0, 0.0).unwrap().count_color(WHITE), 0);
    }

    #[test]
    fn test_compress_idempotent_and_interleaved() {
        let input = PixelBuffer::from_fn(16, 11, |x, y| {
            [(x * 16) as u8, (y * 23) as u8, ((x * y) % 256) as u8]
        });
        let mut tree = QuadTree::new(&input).unwrap();
        let first = tree.compress(12.0).unwrap().clone();
        let second = tree.compress(12.0).unwrap().clone();
        assert_eq!(first, second);
        let mask = tree.edge_detect(8.0, 7.0).unwrap().clone();
        assert_eq!(tree.compress(12.0).unwrap(), &first);
        assert_eq!(tree.edge_detect(8.0, 7.0).unwrap(), &mask);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let input = checker(4, 4);
        let mut tree = QuadTree::new(&input).unwrap();
        assert!(matches!(
            tree.compress(-1.0),
            Err(RegionError::InvalidArgument(_))
        ));
        assert!(tree.edge_detect(1.0, -0.1).is_err());
        assert!(tree.edge_detect(f64::NAN, 1.0).is_err());
        assert_eq!(tree.compressed(), &input);
        assert_eq!(tree.edge_mask().count_color(BLACK), 16);
    }

    #[test]
    fn test_options_entry_points() {
        let input = PixelBuffer::filled(4, 4, [1, 2, 3]);
        let mut tree = QuadTree::new(&input).unwrap();
        assert_eq!(tree.compress_with(&CompressOptions::default()).unwrap(), &input);
        let mask = tree.edge_detect_with(&EdgeDetectOptions::default()).unwrap();
        assert_eq!(mask.count_color(WHITE), 16);
        assert!(
            tree.compress_with(&CompressOptions::new().with_tolerance(-2.0))
                .is_err()
        );
    }

    #[test]
    fn test_merge_summary() {
        let input = checker(2, 2);
        let mut tree = QuadTree::new(&input).unwrap();
        let fills = tree.compress_regions(0.0).unwrap();
        let summary = MergeSummary::new(tree.root(), &fills);
        assert_eq!(summary.merged_regions, 0);
        assert_eq!(summary.filled_pixels, 0);
        assert_eq!(summary.untouched_pixels, 4);
        assert_eq!(summary.leaves, 4);
        assert_eq!(summary.depth, 1);
        assert!(summary.to_string().contains("merged=0"));
    }
}
