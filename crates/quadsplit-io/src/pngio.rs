//! PNG image format support
//!
//! Decoding expands palettes and sub-byte grayscale to 8-bit samples, then
//! folds every color type into an RGB [`PixelBuffer`]: gray is replicated to
//! three channels, alpha is dropped, and 16-bit samples keep their high byte.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use quadsplit_core::color::gray;
use quadsplit_core::{CHANNELS, PixelBuffer};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG bit depth after expansion: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let stride = samples * bytes_per_sample;
    let data = &buf[..output_info.buffer_size()];

    let mut rgb = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * stride];
        for px in row.chunks_exact(stride) {
            // For 16-bit samples the first byte of each sample is the high byte.
            let sample = |i: usize| px[i * bytes_per_sample];
            match samples {
                1 | 2 => {
                    rgb.extend_from_slice(&gray(sample(0)));
                }
                _ => rgb.extend_from_slice(&[sample(0), sample(1), sample(2)]),
            }
        }
    }

    Ok(PixelBuffer::from_raw(width, height, rgb)?)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(buffer.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
