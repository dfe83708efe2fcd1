//! Commoncolors Color - Dominant color extraction
//!
//! This crate turns a bag of pixel colors into a short weighted palette
//! and a two-color gradient:
//!
//! - **Configuration** ([`config`]): Lenient option normalization
//! - **Filtering** ([`filter`]): Transparency, luminance and saturation gates
//! - **Clustering** ([`cluster`]): Multi-pass greedy threshold agglomeration
//! - **Gradient selection** ([`gradient`]): Dominant/secondary pairing
//! - **Calculator** ([`calculator`]): The whole pipeline behind one call
//!
//! # Example
//!
//! ```
//! use commoncolors_color::{Calculator, CalculatorConfig};
//! use commoncolors_color::commoncolors_core::Color;
//!
//! let mut pixels = vec![Color::rgb(220, 30, 30); 12];
//! pixels.extend(vec![Color::rgb(230, 60, 20); 8]);
//!
//! let calc = Calculator::new(CalculatorConfig::default());
//! let result = calc.process(&pixels, false).unwrap();
//! assert_eq!(result.colors.len(), 1);
//! assert_eq!(result.colors[0].weight, 20);
//! ```

pub mod calculator;
pub mod cluster;
pub mod config;
pub mod error;
pub mod filter;
pub mod gradient;

// Re-export core types
pub use commoncolors_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export configuration
pub use config::{
    // Types
    Algorithm,
    CalculatorConfig,
    CalculatorOptions,
    // Defaults
    DEFAULT_DISTANCE_THRESHOLD,
    DEFAULT_ITERATION_COUNT,
    DEFAULT_MAX_LUMINANCE,
    DEFAULT_MIN_LUMINANCE,
    DEFAULT_MIN_SATURATION,
    DEFAULT_TRANSPARENCY_THRESHOLD,
};

// Re-export pipeline stages
pub use cluster::{cluster, cluster_with_observer, group_by_threshold, pass_threshold};
pub use filter::{filter_colors, is_valid_color};

// Re-export gradient selection
pub use gradient::{Gradient, SecondarySource, analogous_color, hue_distance, select_gradient};

// Re-export calculator
pub use calculator::{Calculator, CommonColors, PaletteEntry};
