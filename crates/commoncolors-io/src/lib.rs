//! Commoncolors IO - Image decoding for palette extraction
//!
//! Decodes PNG and JPEG payloads into a [`PixelImage`], optionally
//! shrinks it by sampling, and flattens it into the [`Color`] sequence
//! the calculator consumes.
//!
//! # Example
//!
//! ```ignore
//! use commoncolors_io::read_pixels;
//!
//! let image = read_pixels(&std::fs::read("photo.png")?)?;
//! let pixels = image.sample_to_fit(64, 64).into_colors();
//! ```

pub mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format_from_bytes};

use commoncolors_core::Color;
use tracing::debug;

/// A decoded image as straight (non-premultiplied) RGBA pixels
///
/// Pixels are stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelImage {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelImage {
    /// Create an image from row-major pixels
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] if the pixel count does not match
    /// the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> IoResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(IoError::InvalidData(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get image width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get image height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Shrink by nearest-neighbor sampling to fit `max_width x max_height`
    ///
    /// The aspect ratio is kept and neither side drops below one pixel.
    /// Empty images, images that already fit, and zero bounds return an
    /// unchanged copy.
    pub fn sample_to_fit(&self, max_width: u32, max_height: u32) -> PixelImage {
        if self.width == 0
            || self.height == 0
            || max_width == 0
            || max_height == 0
            || (self.width <= max_width && self.height <= max_height)
        {
            return self.clone();
        }

        let factor = (max_width as f64 / self.width as f64)
            .min(max_height as f64 / self.height as f64);
        let new_w = ((self.width as f64 * factor) as u32).clamp(1, max_width);
        let new_h = ((self.height as f64 * factor) as u32).clamp(1, max_height);

        let mut pixels = Vec::with_capacity(new_w as usize * new_h as usize);
        for y in 0..new_h {
            let src_y = ((y as f64 / factor) as u32).min(self.height - 1);
            for x in 0..new_w {
                let src_x = ((x as f64 / factor) as u32).min(self.width - 1);
                pixels.push(self.pixels[src_y as usize * self.width as usize + src_x as usize]);
            }
        }

        debug!(
            from_width = self.width,
            from_height = self.height,
            to_width = new_w,
            to_height = new_h,
            "sampled image"
        );

        PixelImage {
            width: new_w,
            height: new_h,
            pixels,
        }
    }

    /// Flatten into weight-1 colors, column by column
    ///
    /// Colors are alpha-premultiplied the way a 16-bit RGBA model
    /// reports them, so a half transparent white becomes mid gray with
    /// alpha 128.
    pub fn into_colors(self) -> Vec<Color> {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut colors = Vec::with_capacity(w * h);
        for x in 0..w {
            for y in 0..h {
                colors.push(premultiply(self.pixels[y * w + x]));
            }
        }
        colors
    }
}

fn premultiply(c: Color) -> Color {
    if c.a == 255 {
        return c;
    }
    let a = c.a as u32 * 0x101;
    let scale = |v: u8| ((v as u32 * 0x101 * a / 0xffff) >> 8) as u8;
    Color::rgba(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// Decode an image, detecting its format from the magic number
pub fn read_pixels(data: &[u8]) -> IoResult<PixelImage> {
    let format = detect_format_from_bytes(data)?;
    read_pixels_with_format(data, format)
}

/// Decode an image whose format was reported by the caller
///
/// A payload declared as JPEG that fails to decode is retried as PNG.
/// Without PNG support the JPEG error is returned as is.
pub fn read_pixels_with_format(data: &[u8], format: ImageFormat) -> IoResult<PixelImage> {
    match format {
        ImageFormat::Png => decode_png(data),
        ImageFormat::Jpeg => match decode_jpeg(data) {
            Ok(image) => Ok(image),
            Err(err) if cfg!(feature = "png-format") => {
                debug!(error = %err, "JPEG decode failed, retrying as PNG");
                decode_png(data)
            }
            Err(err) => Err(err),
        },
    }
}

#[cfg(feature = "png-format")]
fn decode_png(data: &[u8]) -> IoResult<PixelImage> {
    png::read_png(std::io::Cursor::new(data))
}

#[cfg(not(feature = "png-format"))]
fn decode_png(_data: &[u8]) -> IoResult<PixelImage> {
    Err(IoError::UnsupportedFormat(
        "PNG support not enabled".to_string(),
    ))
}

#[cfg(feature = "jpeg")]
fn decode_jpeg(data: &[u8]) -> IoResult<PixelImage> {
    jpeg::read_jpeg(data)
}

#[cfg(not(feature = "jpeg"))]
fn decode_jpeg(_data: &[u8]) -> IoResult<PixelImage> {
    Err(IoError::UnsupportedFormat(
        "JPEG support not enabled".to_string(),
    ))
}
