//! PNG I/O regression test
//!
//! Tests decoding of in-memory PNG images of every color type, the
//! JPEG-declared PNG fallback, sampling and column-major flattening.

use commoncolors_core::Color;
use commoncolors_io::{ImageFormat, IoError, read_pixels, read_pixels_with_format};
use commoncolors_test::RegParams;
use png::{BitDepth, ColorType, Encoder};

fn encode(width: u32, height: u32, color_type: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

/// 4x2 RGB image: left half red, right half blue
fn split_rgb() -> Vec<u8> {
    let mut data = Vec::new();
    for _y in 0..2 {
        for x in 0..4 {
            if x < 2 {
                data.extend([255, 0, 0]);
            } else {
                data.extend([0, 0, 255]);
            }
        }
    }
    encode(4, 2, ColorType::Rgb, BitDepth::Eight, &data)
}

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    // --- RGB ---
    let img = read_pixels(&split_rgb()).unwrap();
    rp.compare_values(4.0, img.width() as f64, 0.0);
    rp.compare_values(2.0, img.height() as f64, 0.0);
    rp.compare_colors(&Color::rgb(255, 0, 0), &img.get(1, 1).unwrap());
    rp.compare_colors(&Color::rgb(0, 0, 255), &img.get(2, 0).unwrap());

    // --- Column-major flattening: both red columns come first ---
    let colors = img.into_colors();
    rp.compare_values(8.0, colors.len() as f64, 0.0);
    rp.check(colors[..4].iter().all(|c| c.r == 255), "red columns first");
    rp.check(colors[4..].iter().all(|c| c.b == 255), "blue columns last");

    // --- RGBA keeps alpha, flattening premultiplies ---
    let data = [255, 255, 255, 128, 10, 20, 30, 255];
    let img = read_pixels(&encode(2, 1, ColorType::Rgba, BitDepth::Eight, &data)).unwrap();
    rp.compare_colors(&Color::rgba(255, 255, 255, 128), &img.get(0, 0).unwrap());
    let colors = img.into_colors();
    rp.compare_colors(&Color::rgba(128, 128, 128, 128), &colors[0]);
    rp.compare_colors(&Color::rgba(10, 20, 30, 255), &colors[1]);

    // --- 16-bit grayscale is stripped to 8 bits ---
    let data = [0x12, 0x34, 0xAB, 0xCD];
    let img = read_pixels(&encode(2, 1, ColorType::Grayscale, BitDepth::Sixteen, &data)).unwrap();
    rp.compare_colors(&Color::rgb(0x12, 0x12, 0x12), &img.get(0, 0).unwrap());
    rp.compare_colors(&Color::rgb(0xAB, 0xAB, 0xAB), &img.get(1, 0).unwrap());

    // --- Gray + alpha ---
    let data = [90, 0, 180, 255];
    let img = read_pixels(&encode(2, 1, ColorType::GrayscaleAlpha, BitDepth::Eight, &data)).unwrap();
    rp.compare_colors(&Color::rgba(90, 90, 90, 0), &img.get(0, 0).unwrap());
    rp.compare_colors(&Color::rgba(180, 180, 180, 255), &img.get(1, 0).unwrap());

    // --- PNG declared as JPEG decodes via fallback ---
    let format = ImageFormat::from_mime("image/jpeg").unwrap();
    let img = read_pixels_with_format(&split_rgb(), format).unwrap();
    rp.compare_values(8.0, img.pixels().len() as f64, 0.0);

    // --- Garbage fails in both decoders ---
    let result = read_pixels_with_format(b"\xFF\xD8\xFFgarbage", ImageFormat::Jpeg);
    rp.check(matches!(result, Err(IoError::DecodeError(_))), "garbage rejected");

    // --- Unsupported formats ---
    rp.check(
        matches!(read_pixels(b"GIF89a\x01\x00\x01\x00"), Err(IoError::UnsupportedFormat(_))),
        "gif unsupported",
    );
    rp.check(ImageFormat::from_extension(".bmp").is_err(), "bmp unsupported");

    // --- Sampling a large image ---
    let width = 120u32;
    let height = 60u32;
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _y in 0..height {
        for x in 0..width {
            data.extend([(x * 2) as u8, 100, 50]);
        }
    }
    let img = read_pixels(&encode(width, height, ColorType::Rgb, BitDepth::Eight, &data)).unwrap();
    let small = img.sample_to_fit(32, 32);
    rp.compare_values(32.0, small.width() as f64, 0.0);
    rp.compare_values(16.0, small.height() as f64, 0.0);
    let colors = small.into_colors();
    rp.compare_values(32.0 * 16.0, colors.len() as f64, 0.0);
    rp.check(colors.iter().all(|c| c.g == 100 && c.b == 50), "sampled values come from source");

    assert!(rp.cleanup(), "pngio regression test failed");
}
