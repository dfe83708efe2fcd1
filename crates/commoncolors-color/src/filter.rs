//! Pixel pre-filter
//!
//! Drops colors that make poor palette entries before clustering:
//! transparent pixels, pixels outside the configured luminance band,
//! and washed-out pixels below the minimum saturation.

use crate::config::CalculatorConfig;
use commoncolors_core::Color;

/// Check whether a single color survives the filter
///
/// A color is kept iff `alpha > transparency_threshold`,
/// `min_luminance <= luminance <= max_luminance` and
/// `saturation >= min_saturation`.
pub fn is_valid_color(color: &Color, config: &CalculatorConfig) -> bool {
    if color.a <= config.transparency_threshold() {
        return false;
    }

    let l = color.luminance();
    if l < config.min_luminance() || l > config.max_luminance() {
        return false;
    }

    color.saturation() >= config.min_saturation()
}

/// Keep the colors accepted by [`is_valid_color`], preserving order
///
/// The result may be empty.
pub fn filter_colors(colors: &[Color], config: &CalculatorConfig) -> Vec<Color> {
    colors
        .iter()
        .filter(|c| is_valid_color(c, config))
        .copied()
        .collect()
}
