//! Compress-and-mask pipeline
//!
//! Runs the stages the `quadsplit` binary offers over one input buffer,
//! sharing a single quadtree (and its region statistics) between them.

use crate::io::ImageFormat;
use crate::region::{
    CompressOptions, EdgeDetectOptions, MergeSummary, QuadTree, RegionResult, outline_fills,
    paint_fills,
};
use log::info;
use quadsplit_core::color::BLACK;
use quadsplit_core::{PixelBuffer, Rgb};
use std::path::{Path, PathBuf};

/// Color of the region borders drawn by the outline stage
pub const OUTLINE_COLOR: Rgb = [255, 0, 255];

/// Which stages to run, and with which tolerances
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    /// Compression stage, skipped when `None`
    pub compress: Option<CompressOptions>,
    /// Edge mask stage, skipped when `None`
    pub edges: Option<EdgeDetectOptions>,
    /// Draw compression region borders over the compressed image
    pub outlines: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            compress: Some(CompressOptions::default()),
            edges: Some(EdgeDetectOptions::default()),
            outlines: false,
        }
    }
}

impl PipelineOptions {
    /// Create new options with both stages enabled at default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression stage
    pub fn with_compress(mut self, compress: Option<CompressOptions>) -> Self {
        self.compress = compress;
        self
    }

    /// Set the edge mask stage
    pub fn with_edges(mut self, edges: Option<EdgeDetectOptions>) -> Self {
        self.edges = edges;
        self
    }

    /// Enable or disable the outline stage
    pub fn with_outlines(mut self, outlines: bool) -> Self {
        self.outlines = outlines;
        self
    }

    /// Validate every enabled stage
    pub fn validate(&self) -> RegionResult<()> {
        if let Some(c) = &self.compress {
            c.validate()?;
        }
        if let Some(e) = &self.edges {
            e.validate()?;
        }
        Ok(())
    }
}

/// One produced image and the merge traversal behind it
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// Output image
    pub buffer: PixelBuffer,
    /// Merge statistics
    pub summary: MergeSummary,
}

/// Everything a pipeline run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    /// Compressed image
    pub compressed: Option<Stage>,
    /// Edge mask
    pub edges: Option<Stage>,
    /// Compressed image with region borders; needs the compression stage
    pub outlines: Option<PixelBuffer>,
}

/// Run the enabled stages over `input`.
///
/// # Errors
///
/// Fails on an empty input or an invalid tolerance, before any stage runs.
pub fn run_pipeline(input: &PixelBuffer, options: &PipelineOptions) -> RegionResult<PipelineOutput> {
    options.validate()?;
    let mut tree = QuadTree::new(input)?;
    let mut output = PipelineOutput::default();

    if let Some(c) = &options.compress {
        let fills = tree.compress_regions(c.tolerance)?;
        let summary = MergeSummary::new(tree.root(), &fills);
        let mut buffer = input.clone();
        paint_fills(&mut buffer, &fills)?;
        info!("compress tolerance={}: {}", c.tolerance, summary);

        if options.outlines {
            let mut outlined = buffer.clone();
            outline_fills(&mut outlined, &fills, OUTLINE_COLOR)?;
            output.outlines = Some(outlined);
        }
        output.compressed = Some(Stage { buffer, summary });
    }

    if let Some(e) = &options.edges {
        let fills = tree.edge_regions(e.color_tolerance, e.variance_tolerance)?;
        let summary = MergeSummary::new(tree.root(), &fills);
        let mut buffer = PixelBuffer::filled(input.width(), input.height(), BLACK);
        paint_fills(&mut buffer, &fills)?;
        info!(
            "edge_detect color_tolerance={} variance_tolerance={}: {}",
            e.color_tolerance, e.variance_tolerance, summary
        );
        output.edges = Some(Stage { buffer, summary });
    }

    Ok(output)
}

/// Output path `<out_dir>/<input stem>_<suffix>.<format extension>`.
pub fn output_path(input: &Path, out_dir: &Path, suffix: &str, format: ImageFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    out_dir.join(format!("{}_{}.{}", stem, suffix, format.extension()))
}
