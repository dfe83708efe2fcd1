//! Color space conversion and distance metrics
//!
//! Provides conversion between RGB and:
//! - HSL (Hue, Saturation, Lightness), all components in [0.0, 1.0]
//! - YIQ (NTSC luma and chrominance), unnormalized on the 0-255 scale
//!
//! and the two metrics used to decide whether colors are similar enough
//! to merge: plain Euclidean distance in the RGB cube and a weighted
//! distance in YIQ space.

use crate::Color;

/// Length of the RGB cube diagonal, the largest possible Euclidean distance
pub const MAX_RGB_DISTANCE: f64 = 441.672_955_930_063_7;

/// Luma weights (ITU-R BT.601)
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// YIQ weights for the perceptual distance
const YIQ_WEIGHT_Y: f64 = 0.5053;
const YIQ_WEIGHT_I: f64 = 0.299;
const YIQ_WEIGHT_Q: f64 = 0.1957;

/// HSL color representation
///
/// - `h`: Hue in range [0.0, 1.0) (where 1.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `l`: Lightness in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// YIQ color representation
///
/// - `y`: Luma, 0-255
/// - `i`: In-phase chrominance (orange-blue axis)
/// - `q`: Quadrature chrominance (purple-green axis)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yiq {
    pub y: f64,
    pub i: f64,
    pub q: f64,
}

impl Yiq {
    /// Create a new YIQ color
    pub fn new(y: f64, i: f64, q: f64) -> Self {
        Self { y, i, q }
    }
}

/// Perceived brightness on a scale of 0-1
///
/// Formula: (0.299*R + 0.587*G + 0.114*B) / 255
#[inline]
pub fn luminance(c: &Color) -> f64 {
    (c.r as f64 * LUMA_R + c.g as f64 * LUMA_G + c.b as f64 * LUMA_B) / 255.0
}

/// HSL saturation on a scale of 0-1. Achromatic colors have saturation 0.
pub fn saturation(c: &Color) -> f64 {
    rgb_to_hsl(c.r, c.g, c.b).s
}

/// HSL hue on a scale of 0-1. Achromatic colors have hue 0.
pub fn hue(c: &Color) -> f64 {
    rgb_to_hsl(c.r, c.g, c.b).h
}

/// Convert RGB values to HSL
///
/// Returns HSL with all components in range [0.0, 1.0].
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let max_f = max as f64 / 255.0;
    let min_f = min as f64 / 255.0;
    let l = (max_f + min_f) / 2.0;

    // Achromatic
    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let delta = max_f - min_f;
    let s = if l > 0.5 {
        delta / (2.0 - max_f - min_f)
    } else {
        delta / (max_f + min_f)
    };

    let rf = r as f64 / 255.0;
    let gf = g as f64 / 255.0;
    let bf = b as f64 / 255.0;

    // Red wins ties with green, green wins ties with blue
    let h = if r == max {
        let h = (gf - bf) / delta;
        if g < b { h + 6.0 } else { h }
    } else if g == max {
        (bf - rf) / delta + 2.0
    } else {
        (rf - gf) / delta + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL values to RGB
///
/// Hue wraps around; saturation and lightness are clamped to [0.0, 1.0].
pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let h = hsl.h.rem_euclid(1.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// Convert HSL to an opaque color of weight 1
pub fn hsl_to_color(hsl: Hsl) -> Color {
    let (r, g, b) = hsl_to_rgb(hsl);
    Color::rgb(r, g, b)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert RGB to YIQ
///
/// Channels are taken on the 0-255 scale and not normalized, so `y` is
/// also in 0-255.
pub fn rgb_to_yiq(r: u8, g: u8, b: u8) -> Yiq {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    Yiq::new(
        0.29889531 * r + 0.58662247 * g + 0.11448223 * b,
        0.59597799 * r - 0.27417610 * g - 0.32180189 * b,
        0.21147017 * r - 0.52261711 * g + 0.31114694 * b,
    )
}

/// Euclidean distance in the RGB cube, in [0, [`MAX_RGB_DISTANCE`]]
///
/// Alpha is ignored.
pub fn euclidean_distance(c1: &Color, c2: &Color) -> f64 {
    let dr = c1.r as f64 - c2.r as f64;
    let dg = c1.g as f64 - c2.g as f64;
    let db = c1.b as f64 - c2.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Perceptually weighted distance in YIQ space
///
/// Formula: sqrt(0.5053*dY^2 + 0.299*dI^2 + 0.1957*dQ^2). Alpha is ignored.
pub fn yiq_distance(c1: &Color, c2: &Color) -> f64 {
    let a = c1.to_yiq();
    let b = c2.to_yiq();
    let dy = a.y - b.y;
    let di = a.i - b.i;
    let dq = a.q - b.q;
    (dy * dy * YIQ_WEIGHT_Y + di * di * YIQ_WEIGHT_I + dq * dq * YIQ_WEIGHT_Q).sqrt()
}
