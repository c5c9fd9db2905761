//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale is replicated to three channels, 16-bit
//! luminance keeps its high byte, and CMYK is converted with
//! `r = (255 - c) * (255 - k) / 255` per channel.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use log::debug;
use quadsplit_core::color::gray;
use quadsplit_core::{CHANNELS, PixelBuffer};
use std::io::{Read, Write};

/// Default JPEG quality used by [`crate::write_image`]
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let npix = width as usize * height as usize;
    debug!(
        "read_jpeg {}x{} pixel_format={:?}",
        width, height, info.pixel_format
    );

    let rgb: Vec<u8> = match info.pixel_format {
        PixelFormat::L8 => pixels.iter().flat_map(|&g| gray(g)).collect(),
        PixelFormat::L16 => pixels
            .chunks_exact(2)
            .flat_map(|s| gray(s[0]))
            .collect(),
        PixelFormat::RGB24 => pixels,
        PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|s| {
                let k = 255 - s[3] as u32;
                let ch = |c: u8| ((255 - c as u32) * k / 255) as u8;
                [ch(s[0]), ch(s[1]), ch(s[2])]
            })
            .collect(),
        #[allow(unreachable_patterns)]
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    if rgb.len() != npix * CHANNELS {
        return Err(IoError::InvalidData(format!(
            "JPEG decoded {} bytes for {}x{} image",
            rgb.len(),
            width,
            height
        )));
    }

    Ok(PixelBuffer::from_raw(width, height, rgb)?)
}

/// Write a JPEG image with the given quality (1..=100).
pub fn write_jpeg<W: Write>(buffer: &PixelBuffer, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::EncodeError(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let width = u16::try_from(buffer.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width too large: {}", buffer.width())))?;
    let height = u16::try_from(buffer.height()).map_err(|_| {
        IoError::EncodeError(format!("JPEG height too large: {}", buffer.height()))
    })?;

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(buffer.data(), width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
