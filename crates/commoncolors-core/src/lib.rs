//! Commoncolors Core - Color values and color-space math
//!
//! This crate provides the leaf building blocks used by the palette
//! extractor:
//!
//! - [`Color`] - An 8-bit RGBA color with a pixel-count weight
//! - [`average`] - Weighted merge of several colors
//! - [`colorspace`] - RGB <-> HSL, RGB -> YIQ, luminance, saturation, hue
//! - Distance metrics: [`euclidean_distance`] and [`yiq_distance`]
//!
//! Everything here is pure and allocation-free apart from hex formatting.

pub mod color;
pub mod colorspace;
pub mod error;

pub use color::{Color, average, sort_by_weight};
pub use colorspace::{
    // Types
    Hsl,
    MAX_RGB_DISTANCE,
    Yiq,
    // Functions
    euclidean_distance,
    hsl_to_color,
    hsl_to_rgb,
    hue,
    luminance,
    rgb_to_hsl,
    rgb_to_yiq,
    saturation,
    yiq_distance,
};
pub use error::{Error, Result};
