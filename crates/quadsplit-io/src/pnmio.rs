//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII, P5 binary) and PPM (P3 ASCII, P6 binary) images
//! with any maxval up to 65535, rescaling samples to 0..=255. Writes binary
//! PPM (P6) with maxval 255. PBM bitmaps (P1/P4) and PAM (P7) are not
//! supported.

use crate::{IoError, IoResult};
use quadsplit_core::PixelBuffer;
use quadsplit_core::color::gray;
use std::io::{Read, Write};

/// Parsed PNM header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PnmHeader {
    /// Magic number digit (2, 3, 5 or 6)
    kind: u8,
    width: u32,
    height: u32,
    maxval: u32,
}

impl PnmHeader {
    fn samples_per_pixel(&self) -> usize {
        match self.kind {
            2 | 5 => 1,
            _ => 3,
        }
    }

    fn is_ascii(&self) -> bool {
        matches!(self.kind, 2 | 3)
    }
}

/// Cursor over PNM bytes that understands whitespace and `#` comments.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_space_and_comments(&mut self) {
        while self.pos < self.data.len() {
            match self.data[self.pos] {
                b'#' => {
                    while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                c if c.is_ascii_whitespace() => self.pos += 1,
                _ => break,
            }
        }
    }

    fn next_uint(&mut self, what: &str) -> IoResult<u32> {
        self.skip_space_and_comments();
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData(format!("PNM: expected {}", what)));
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| IoError::InvalidData(format!("PNM: {} out of range", what)))
    }
}

fn read_header(tokens: &mut Tokens<'_>) -> IoResult<PnmHeader> {
    let data = tokens.data;
    if data.len() < 2 || data[0] != b'P' {
        return Err(IoError::InvalidData("PNM: missing magic number".to_string()));
    }
    let kind = match data[1] {
        b'2' => 2,
        b'3' => 3,
        b'5' => 5,
        b'6' => 6,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM: unsupported variant P{}",
                other as char
            )));
        }
    };
    tokens.pos = 2;
    let width = tokens.next_uint("width")?;
    let height = tokens.next_uint("height")?;
    let maxval = tokens.next_uint("maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!(
            "PNM: maxval {} not in 1..=65535",
            maxval
        )));
    }
    Ok(PnmHeader {
        kind,
        width,
        height,
        maxval,
    })
}

#[inline]
fn rescale(v: u32, maxval: u32) -> u8 {
    if maxval == 255 {
        v.min(255) as u8
    } else {
        ((v.min(maxval) * 255 + maxval / 2) / maxval) as u8
    }
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// Grayscale variants expand to three equal channels.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut tokens = Tokens::new(&data);
    let header = read_header(&mut tokens)?;
    let spp = header.samples_per_pixel();
    let nsamples = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|n| n.checked_mul(spp))
        .ok_or_else(|| IoError::InvalidData("PNM: image too large".to_string()))?;

    // Every sample takes at least one byte, so the data length bounds the
    // reservation whatever the header claims.
    let mut samples = Vec::with_capacity(nsamples.min(data.len()));
    if header.is_ascii() {
        for _ in 0..nsamples {
            samples.push(rescale(tokens.next_uint("sample")?, header.maxval));
        }
    } else {
        // Exactly one whitespace byte separates maxval from the raster.
        let start = tokens.pos + 1;
        let bytes_per_sample = if header.maxval > 255 { 2 } else { 1 };
        let end = nsamples
            .checked_mul(bytes_per_sample)
            .and_then(|n| n.checked_add(start))
            .ok_or_else(|| IoError::InvalidData("PNM: image too large".to_string()))?;
        if end > data.len() {
            return Err(IoError::InvalidData(format!(
                "PNM: raster truncated, need {} bytes, have {}",
                end - start,
                data.len().saturating_sub(start)
            )));
        }
        let raster = &data[start..end];
        if bytes_per_sample == 1 {
            samples.extend(raster.iter().map(|&v| rescale(v as u32, header.maxval)));
        } else {
            samples.extend(
                raster
                    .chunks_exact(2)
                    .map(|s| rescale(((s[0] as u32) << 8) | s[1] as u32, header.maxval)),
            );
        }
    }

    let rgb: Vec<u8> = if spp == 1 {
        samples.iter().flat_map(|&g| gray(g)).collect()
    } else {
        samples
    };
    Ok(PixelBuffer::from_raw(header.width, header.height, rgb)?)
}

/// Write a buffer as binary PPM (P6, maxval 255).
pub fn write_pnm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    writer.write_all(buffer.data())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pnm_roundtrip() {
        let buffer = PixelBuffer::from_fn(5, 3, |x, y| [x as u8, y as u8, (x + y) as u8]);
        let mut bytes = Vec::new();
        write_pnm(&buffer, &mut bytes).unwrap();
        assert!(bytes.starts_with(b"P6\n5 3\n255\n"));

        let decoded = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_read_ascii_ppm_with_comments() {
        let text = b"P3\n# a comment\n2 1\n255\n255 0 0  0 0 255\n";
        let decoded = read_pnm(Cursor::new(text.to_vec())).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some([255, 0, 0]));
        assert_eq!(decoded.get_rgb(1, 0), Some([0, 0, 255]));
    }

    #[test]
    fn test_read_pgm_expands_gray() {
        let mut bytes = b"P5 2 1 255\n".to_vec();
        bytes.extend_from_slice(&[7, 250]);
        let decoded = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some([7, 7, 7]));
        assert_eq!(decoded.get_rgb(1, 0), Some([250, 250, 250]));
    }

    #[test]
    fn test_read_rescales_maxval() {
        let text = b"P2\n2 1\n15\n0 15\n";
        let decoded = read_pnm(Cursor::new(text.to_vec())).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some([0, 0, 0]));
        assert_eq!(decoded.get_rgb(1, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_read_16bit() {
        let mut bytes = b"P5\n1 1\n65535\n".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFF]);
        let decoded = read_pnm(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn test_truncated_raster() {
        let mut bytes = b"P6\n2 2\n255\n".to_vec();
        bytes.extend_from_slice(&[0; 5]);
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_oversized_header_short_data() {
        // 60000 x 60000 claimed, two pixels present
        let text = b"P3\n60000 60000\n255\n1 2 3 4 5 6\n";
        assert!(matches!(
            read_pnm(Cursor::new(text.to_vec())),
            Err(IoError::InvalidData(_))
        ));
        let mut bytes = b"P6\n60000 60000\n255\n".to_vec();
        bytes.extend_from_slice(&[0; 6]);
        assert!(matches!(
            read_pnm(Cursor::new(bytes)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_pbm_unsupported() {
        assert!(matches!(
            read_pnm(Cursor::new(b"P1\n1 1\n1\n".to_vec())),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
