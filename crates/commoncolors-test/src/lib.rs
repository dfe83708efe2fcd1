//! commoncolors-test - Regression test harness for commoncolors
//!
//! Each `*_reg.rs` integration test creates a [`RegParams`], records a
//! numbered series of comparisons, and asserts on [`RegParams::cleanup`].
//! Failures do not stop the test early; they are collected and reported
//! together so one run shows every mismatch.
//!
//! # Usage
//!
//! ```ignore
//! use commoncolors_test::RegParams;
//!
//! let mut rp = RegParams::new("cluster");
//! rp.compare_values(5.0, palette.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod params;

pub use params::{RegParams, RegTestMode};

use commoncolors_core::Color;

/// Build `count` copies of `color`, each with weight 1
///
/// Mimics the pixel stream of a uniformly colored image region.
pub fn solid(color: Color, count: usize) -> Vec<Color> {
    vec![color.with_weight(1); count]
}

/// Build a horizontal hue sweep of `count` fully saturated colors
///
/// Hues are spaced evenly over [0, 1) at the given lightness.
pub fn hue_sweep(count: usize, lightness: f64) -> Vec<Color> {
    (0..count)
        .map(|i| {
            let h = i as f64 / count.max(1) as f64;
            commoncolors_core::hsl_to_color(commoncolors_core::Hsl::new(h, 1.0, lightness))
        })
        .collect()
}
