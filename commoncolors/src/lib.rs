//! Commoncolors - Dominant color extraction for Rust
//!
//! Finds the handful of colors that dominate an image and pairs the
//! strongest one with a second color for a two-stop gradient.
//!
//! # Overview
//!
//! - Image decoding and sampling (PNG, JPEG)
//! - Pixel filtering by transparency, luminance and saturation
//! - Multi-pass greedy clustering under RGB or YIQ distance
//! - Gradient selection with analogous-color fallback
//!
//! # Example
//!
//! ```
//! use commoncolors::Color;
//! use commoncolors::color::Calculator;
//!
//! let mut pixels = vec![Color::rgb(30, 120, 200); 50];
//! pixels.extend(vec![Color::rgb(255, 255, 255); 50]);
//!
//! let result = Calculator::default().process(&pixels, false).unwrap();
//! assert_eq!(result.colors[0].value, "#1e78c8");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use commoncolors_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use commoncolors_color as color;
pub use commoncolors_io as io;
