//! Two-color gradient selection
//!
//! Picks a dominant color and a secondary color to pair it with. The
//! secondary is preferably a real palette entry with a similar hue and a
//! comparable weight; if none qualifies, an analogous color is derived
//! from the dominant one.

use crate::{ColorError, ColorResult};
use commoncolors_core::{Color, Hsl, hsl_to_color};

/// A candidate is no longer credible once the dominant color outweighs it
/// by more than this factor
pub const MAX_WEIGHT_RATIO: f64 = 2.5;

/// Largest hue difference (on the 0-1 wheel, i.e. 45 degrees) for a
/// palette entry to count as a matching secondary
pub const MAX_HUE_DISTANCE: f64 = 0.125;

/// Hue rotation of a synthesized secondary (9 degrees)
pub const ANALOGOUS_HUE_SHIFT: f64 = 0.025;

/// Saturation removed from a synthesized secondary
pub const ANALOGOUS_SATURATION_DROP: f64 = 0.2;

/// Where the secondary gradient color came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum SecondarySource {
    /// An entry of the palette
    Palette,
    /// Derived from the dominant color
    Synthesized,
}

/// A two-stop gradient as lowercase `#rrggbb` strings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    pub dominant: String,
    pub secondary: String,
    pub source: SecondarySource,
}

impl Gradient {
    /// The two stops, dominant first
    pub fn stops(&self) -> [&str; 2] {
        [&self.dominant, &self.secondary]
    }
}

/// Absolute hue difference on the 0-1 wheel (not wrapped)
#[inline]
pub fn hue_distance(a: &Color, b: &Color) -> f64 {
    (a.hue() - b.hue()).abs()
}

/// Select a gradient for a weight-sorted palette
///
/// `palette[0]` is the dominant color. The remaining entries are scanned
/// in order: scanning stops as soon as the dominant weight exceeds
/// [`MAX_WEIGHT_RATIO`] times the candidate weight, and the first
/// candidate within [`MAX_HUE_DISTANCE`] of the dominant hue is taken as
/// the secondary. Otherwise the secondary comes from
/// [`analogous_color`].
///
/// # Errors
///
/// Returns [`ColorError::EmptyPalette`] if `palette` is empty.
pub fn select_gradient(palette: &[Color], min_saturation: f64) -> ColorResult<Gradient> {
    let (dominant, rest) = palette.split_first().ok_or(ColorError::EmptyPalette)?;
    let dominant_weight = dominant.weight() as f64;

    for candidate in rest {
        if dominant_weight / candidate.weight() as f64 > MAX_WEIGHT_RATIO {
            break;
        }

        if hue_distance(dominant, candidate) < MAX_HUE_DISTANCE {
            return Ok(Gradient {
                dominant: dominant.to_hex(),
                secondary: candidate.to_hex(),
                source: SecondarySource::Palette,
            });
        }
    }

    Ok(Gradient {
        dominant: dominant.to_hex(),
        secondary: analogous_color(dominant, min_saturation).to_hex(),
        source: SecondarySource::Synthesized,
    })
}

/// Derive an analogous color from `color`
///
/// Hue is rotated by [`ANALOGOUS_HUE_SHIFT`], saturation is reduced by
/// [`ANALOGOUS_SATURATION_DROP`] but kept at or above `min_saturation`,
/// and lightness is unchanged.
pub fn analogous_color(color: &Color, min_saturation: f64) -> Color {
    let hsl = color.to_hsl();
    let s = (hsl.s - ANALOGOUS_SATURATION_DROP)
        .max(min_saturation)
        .min(1.0);
    hsl_to_color(Hsl::new(
        (hsl.h + ANALOGOUS_HUE_SHIFT).rem_euclid(1.0),
        s,
        hsl.l,
    ))
}
