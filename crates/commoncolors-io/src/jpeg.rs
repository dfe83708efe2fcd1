//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale, RGB and
//! CMYK images are all returned as opaque RGBA pixels.

use crate::{IoError, IoResult, PixelImage};
use commoncolors_core::Color;
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;
use tracing::debug;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<PixelImage> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    debug!(width, height, pixel_format = ?info.pixel_format, "decoded JPEG");

    let pixels: Vec<Color> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| Color::rgb(g, g, g)).collect(),
        // Big-endian samples; keep the high byte
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|px| Color::rgb(px[0], px[0], px[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|px| Color::rgb(px[0], px[1], px[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|px| cmyk_to_color(px[0], px[1], px[2], px[3]))
            .collect(),
    };

    PixelImage::new(width, height, pixels)
}

/// Convert a CMYK sample to an opaque color
fn cmyk_to_color(c: u8, m: u8, y: u8, k: u8) -> Color {
    let ink = |v: u8| ((255 - v as u32) * (255 - k as u32) / 255) as u8;
    Color::rgb(ink(c), ink(m), ink(y))
}
