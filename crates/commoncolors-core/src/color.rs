//! Weighted RGBA color value
//!
//! A [`Color`] is either a single sampled pixel (weight 1) or the weighted
//! average of several colors, in which case its weight is the number of
//! source pixels it stands for. Colors are plain `Copy` values: merging
//! always builds a new color and leaves the inputs untouched.

use crate::colorspace::{self, Hsl, Yiq};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color carrying a pixel-count weight
///
/// The weight is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    weight: u32,
}

impl Color {
    /// Create an opaque color with weight 1.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color with weight 1.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a,
            weight: 1,
        }
    }

    /// Return a copy of this color carrying `weight`.
    ///
    /// A weight of 0 is raised to 1.
    #[inline]
    pub const fn with_weight(self, weight: u32) -> Self {
        Self {
            weight: if weight == 0 { 1 } else { weight },
            ..self
        }
    }

    /// Number of source pixels this color represents.
    #[inline]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Weighted average of two colors.
    pub fn merge(&self, other: &Color) -> Result<Color> {
        average(&[*self, *other])
    }

    /// Lowercase `#rrggbb` representation. Alpha is not included.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness in [0, 1].
    #[inline]
    pub fn luminance(&self) -> f64 {
        colorspace::luminance(self)
    }

    /// HSL saturation in [0, 1].
    #[inline]
    pub fn saturation(&self) -> f64 {
        colorspace::saturation(self)
    }

    /// HSL hue in [0, 1).
    #[inline]
    pub fn hue(&self) -> f64 {
        colorspace::hue(self)
    }

    /// Convert to HSL.
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        colorspace::rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Convert to unnormalized YIQ.
    #[inline]
    pub fn to_yiq(&self) -> Yiq {
        colorspace::rgb_to_yiq(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse `#rrggbb` or `rrggbb` into an opaque color of weight 1.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidHex(s.to_string()))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Weighted per-channel mean of `colors`
///
/// Each channel (alpha included) is `sum(channel * weight) / total_weight`,
/// truncated toward zero. The result's weight is the sum of the input
/// weights.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice and
/// [`Error::WeightOverflow`] if the total weight does not fit in `u32`.
pub fn average(colors: &[Color]) -> Result<Color> {
    if colors.is_empty() {
        return Err(Error::EmptyInput("average of zero colors"));
    }

    let mut sum_r = 0u64;
    let mut sum_g = 0u64;
    let mut sum_b = 0u64;
    let mut sum_a = 0u64;
    let mut sum_weight = 0u64;

    for c in colors {
        let w = c.weight as u64;
        sum_r += c.r as u64 * w;
        sum_g += c.g as u64 * w;
        sum_b += c.b as u64 * w;
        sum_a += c.a as u64 * w;
        sum_weight += w;
    }

    let weight = u32::try_from(sum_weight).map_err(|_| Error::WeightOverflow(colors.len()))?;

    // Each mean is bounded by the largest input channel, so it fits in u8.
    Ok(Color {
        r: (sum_r / sum_weight) as u8,
        g: (sum_g / sum_weight) as u8,
        b: (sum_b / sum_weight) as u8,
        a: (sum_a / sum_weight) as u8,
        weight,
    })
}

/// Sort colors by weight, heaviest first.
pub fn sort_by_weight(colors: &mut [Color]) {
    colors.sort_by(|a, b| b.weight.cmp(&a.weight));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_color_has_unit_weight() {
        assert_eq!(Color::rgb(1, 2, 3).weight(), 1);
        assert_eq!(Color::rgba(1, 2, 3, 4).a, 4);
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn test_zero_weight_is_raised() {
        assert_eq!(Color::rgb(0, 0, 0).with_weight(0).weight(), 1);
        assert_eq!(Color::rgb(0, 0, 0).with_weight(7).weight(), 7);
    }

    #[test]
    fn test_average_truncates() {
        let c1 = Color::rgba(200, 100, 20, 100).with_weight(3);
        let c2 = Color::rgba(100, 25, 80, 255).with_weight(2);

        let avg = c1.merge(&c2).unwrap();
        assert_eq!(avg, Color::rgba(160, 70, 44, 162).with_weight(5));

        // Inputs are untouched
        assert_eq!(c1.weight(), 3);
        assert_eq!(c2.weight(), 2);
    }

    #[test]
    fn test_average_single_color() {
        let c = Color::rgba(10, 20, 30, 40).with_weight(9);
        assert_eq!(average(&[c]).unwrap(), c);
    }

    #[test]
    fn test_average_empty() {
        let err = average(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        assert_eq!(err.to_string(), "empty input: average of zero colors");
    }

    #[test]
    fn test_average_weight_overflow() {
        let heavy = Color::rgb(1, 1, 1).with_weight(u32::MAX);
        assert_eq!(average(&[heavy, heavy]), Err(Error::WeightOverflow(2)));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(255, 0, 255).to_hex(), "#ff00ff");
        assert_eq!(Color::rgba(1, 2, 3, 0).to_hex(), "#010203");
        assert_eq!(Color::rgb(0xab, 0xcd, 0xef).to_string(), "#abcdef");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff00ff".parse::<Color>().unwrap(), Color::rgb(255, 0, 255));
        assert_eq!("0a0B0c".parse::<Color>().unwrap(), Color::rgb(10, 11, 12));
        assert!("#ff00f".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#ff00ffaa".parse::<Color>().is_err());
    }

    #[test]
    fn test_sort_by_weight() {
        let mut colors = vec![
            Color::rgb(1, 0, 0).with_weight(2),
            Color::rgb(2, 0, 0).with_weight(9),
            Color::rgb(3, 0, 0).with_weight(5),
        ];
        sort_by_weight(&mut colors);
        let weights: Vec<u32> = colors.iter().map(Color::weight).collect();
        assert_eq!(weights, vec![9, 5, 2]);
    }
}
