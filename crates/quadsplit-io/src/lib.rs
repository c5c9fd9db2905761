//! quadsplit-io - Image I/O for the quadsplit workspace
//!
//! Decodes image files into [`PixelBuffer`]s and encodes buffers back to
//! files. Every decoder folds its input to 3-channel 8-bit RGB.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg` |
//! | PNM    | P2, P3, P5, P6 | P6 | `pnm` |
//!
//! # Examples
//!
//! ```
//! use quadsplit_core::PixelBuffer;
//! use quadsplit_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let buffer = PixelBuffer::filled(3, 2, [1, 2, 3]);
//! let bytes = write_image_mem(&buffer, ImageFormat::Pnm).unwrap();
//! let decoded = read_image_mem(&bytes).unwrap();
//! assert_eq!(decoded, buffer);
//! ```

pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpegio;
#[cfg(feature = "png-format")]
pub mod pngio;
#[cfg(feature = "pnm")]
pub mod pnmio;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use quadsplit_core::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelBuffer> {
    let data = std::fs::read(path.as_ref())?;
    let buffer = read_image_mem(&data)?;
    debug!(
        "read_image {} -> {}x{}",
        path.as_ref().display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Read an image from an in-memory encoded byte slice.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelBuffer> {
    let format = detect_format_from_bytes(data)?;
    debug!("read_image_mem detected {:?} ({} bytes)", format, data.len());
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => pngio::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpegio::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnmio::read_pnm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "no decoder enabled for {:?}",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
///
/// [`ImageFormat::Unknown`] falls back to the format implied by the file
/// extension, and to PNG when the extension is not recognized either.
pub fn write_image<P: AsRef<Path>>(
    buffer: &PixelBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = resolve_format(format, path);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(buffer, &mut writer, format)?;
    writer.flush()?;
    debug!(
        "write_image {} ({:?}, {}x{})",
        path.display(),
        format,
        buffer.width(),
        buffer.height()
    );
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(buffer: &PixelBuffer, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_image_to(buffer, &mut bytes, format)?;
    Ok(bytes)
}

fn resolve_format(format: ImageFormat, path: &Path) -> ImageFormat {
    match format {
        ImageFormat::Unknown => match ImageFormat::from_path(path) {
            ImageFormat::Unknown => ImageFormat::Png,
            guessed => guessed,
        },
        explicit => explicit,
    }
}

fn write_image_to<W: Write>(buffer: &PixelBuffer, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => pngio::write_png(buffer, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpegio::write_jpeg(buffer, writer, jpegio::DEFAULT_JPEG_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnmio::write_pnm(buffer, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "no encoder enabled for {:?}",
            other
        ))),
    }
}
