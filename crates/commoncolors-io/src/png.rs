//! PNG image format support
//!
//! Every PNG variant is normalized to 8-bit samples on decode: palettes
//! and low bit depths are expanded, 16-bit samples are stripped to their
//! high byte.

use crate::{IoError, IoResult, PixelImage};
use commoncolors_core::Color;
use png::{BitDepth, ColorType, Decoder, Transformations};
use std::io::{BufRead, Seek};
use tracing::debug;

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, output_info.bit_depth
        )));
    }

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
    debug!(width, height, ?color_type, "decoded PNG");

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        for px in row[..width as usize * samples].chunks_exact(samples) {
            let color = match *px {
                [g] => Color::rgb(g, g, g),
                [g, a] => Color::rgba(g, g, g, a),
                [r, g, b] => Color::rgb(r, g, b),
                [r, g, b, a] => Color::rgba(r, g, b, a),
                _ => {
                    return Err(IoError::InvalidData(format!(
                        "unexpected PNG sample count: {}",
                        px.len()
                    )));
                }
            };
            pixels.push(color);
        }
    }

    PixelImage::new(width, height, pixels)
}
