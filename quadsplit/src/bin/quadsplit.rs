use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use quadsplit::PixelBuffer;
use quadsplit::io::{ImageFormat, read_image, write_image};
use quadsplit::pipeline::{PipelineOptions, output_path, run_pipeline};
use quadsplit::region::{CompressOptions, EdgeDetectOptions};

const TOLERANCE_GUIDE: &str = "\
Tolerance guide:
  --compress-tolerance   5-10 keeps detail, 15-30 gives a blockier image
  --edge-tolerance       5-10 picks up faint edges, 10-20 keeps strong edges only
  --variance-tolerance   3-6 picks up more texture, 7-12 gives a smoother mask";

#[derive(Parser, Debug)]
#[command(name = "quadsplit")]
#[command(about = "Quadtree image compression and block edge masks")]
#[command(after_long_help = TOLERANCE_GUIDE)]
struct Cli {
    /// Input image (PNG, JPEG or PNM)
    input: PathBuf,
    /// Divergence below which compression merges a region
    #[arg(long, default_value_t = 10.0)]
    compress_tolerance: f64,
    /// Divergence below which the edge mask marks a region
    #[arg(long, default_value_t = 8.0)]
    edge_tolerance: f64,
    /// Mean channel variance below which the edge mask marks a region
    #[arg(long, default_value_t = 7.0)]
    variance_tolerance: f64,
    /// Directory for the output images
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// Output image format
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,
    /// Do not write the compressed image
    #[arg(long)]
    skip_compress: bool,
    /// Do not write the edge mask
    #[arg(long)]
    skip_edges: bool,
    /// Also write the compressed image with region borders drawn on it
    #[arg(long)]
    outlines: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Png,
    Jpg,
    Pnm,
}

impl From<OutputFormat> for ImageFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpg => ImageFormat::Jpeg,
            OutputFormat::Pnm => ImageFormat::Pnm,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    if cli.skip_compress && cli.skip_edges {
        bail!("nothing to do: both --skip-compress and --skip-edges given");
    }
    if cli.outlines && cli.skip_compress {
        bail!("--outlines draws over the compressed image and cannot be combined with --skip-compress");
    }

    let options = PipelineOptions::new()
        .with_compress((!cli.skip_compress).then(|| {
            CompressOptions::new().with_tolerance(cli.compress_tolerance)
        }))
        .with_edges((!cli.skip_edges).then(|| {
            EdgeDetectOptions::new()
                .with_color_tolerance(cli.edge_tolerance)
                .with_variance_tolerance(cli.variance_tolerance)
        }))
        .with_outlines(cli.outlines);
    options.validate().context("validating tolerances")?;

    let input = read_image(&cli.input)
        .with_context(|| format!("reading input image {}", cli.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        cli.input.display(),
        input.width(),
        input.height()
    );

    let output = run_pipeline(&input, &options)
        .with_context(|| format!("processing {}", cli.input.display()))?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;
    let format = ImageFormat::from(cli.format);

    if let Some(stage) = &output.compressed {
        let path = save(&stage.buffer, &cli, "compressed", format)?;
        println!("compressed: {} ({})", path.display(), stage.summary);
    }
    if let Some(stage) = &output.edges {
        let path = save(&stage.buffer, &cli, "edges", format)?;
        println!("edges: {} ({})", path.display(), stage.summary);
    }
    if let Some(buffer) = &output.outlines {
        let path = save(buffer, &cli, "outlines", format)?;
        println!("outlines: {}", path.display());
    }
    Ok(())
}

fn save(buffer: &PixelBuffer, cli: &Cli, suffix: &str, format: ImageFormat) -> Result<PathBuf> {
    let path = output_path(Path::new(&cli.input), &cli.out_dir, suffix, format);
    write_image(buffer, &path, format)
        .with_context(|| format!("writing {} image {}", suffix, path.display()))?;
    Ok(path)
}
