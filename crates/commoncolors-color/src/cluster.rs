//! Threshold clustering
//!
//! Reduces a list of colors to a small weighted palette by repeated
//! greedy agglomeration.
//!
//! The algorithm runs `iteration_count` passes. Pass `i` merges colors
//! closer than
//!
//! ```text
//! t_i = distance_threshold * i / (iteration_count - 1) + 10
//! ```
//!
//! so the merge radius grows linearly from 10 to `distance_threshold + 10`
//! and each pass merges more coarsely than the last. A single-pass run uses
//! the final radius directly.
//!
//! Within a pass the working list is consumed front to back: the first
//! remaining color is the pivot, every other remaining color closer than
//! the threshold joins it, and the group is replaced by its weighted
//! average. The result therefore depends on input order; it is a
//! single-linkage pass with a fixed "first remaining" pivot rule, not an
//! order-independent clustering such as k-means.

use crate::ColorResult;
use crate::config::{Algorithm, CalculatorConfig};
use commoncolors_core::{Color, average, sort_by_weight};
use tracing::{debug, trace};

/// Merge radius of the first pass
pub const PASS_THRESHOLD_OFFSET: f64 = 10.0;

/// Merge radius used by pass `pass` (0-indexed)
pub fn pass_threshold(config: &CalculatorConfig, pass: u32) -> f64 {
    let count = config.iteration_count();
    if count <= 1 {
        return config.distance_threshold() + PASS_THRESHOLD_OFFSET;
    }
    config.distance_threshold() * pass as f64 / (count - 1) as f64 + PASS_THRESHOLD_OFFSET
}

/// Run one clustering pass
///
/// Colors whose distance to the current pivot is strictly below
/// `threshold` are merged into it. The output is never longer than the
/// input, and the total weight is unchanged.
///
/// # Arguments
///
/// * `colors` - Working list, consumed in order
/// * `threshold` - Merge radius for this pass
/// * `algorithm` - Distance metric
pub fn group_by_threshold(
    colors: Vec<Color>,
    threshold: f64,
    algorithm: Algorithm,
) -> ColorResult<Vec<Color>> {
    if colors.len() < 2 {
        return Ok(colors);
    }

    let mut result = Vec::new();
    let mut working = colors;

    while working.len() >= 2 {
        let pivot = working[0];
        let mut group = vec![pivot];
        let mut remaining = Vec::with_capacity(working.len() - 1);

        for color in &working[1..] {
            if algorithm.distance(&pivot, color) < threshold {
                group.push(*color);
            } else {
                remaining.push(*color);
            }
        }

        let merged = average(&group)?;
        trace!(
            pivot = %pivot,
            merged = %merged,
            members = group.len(),
            weight = merged.weight(),
            "merged group"
        );
        result.push(merged);
        working = remaining;
    }

    // At most one color is left over
    result.extend(working);

    Ok(result)
}

/// Cluster colors into a weighted palette, heaviest first
///
/// An empty input yields an empty palette.
pub fn cluster(colors: Vec<Color>, config: &CalculatorConfig) -> ColorResult<Vec<Color>> {
    cluster_with_observer(colors, config, |_, _| {})
}

/// Cluster colors, calling `observe` with the output of every pass
///
/// `observe` receives the pass index and that pass's output, before the
/// final sort.
pub fn cluster_with_observer<F>(
    colors: Vec<Color>,
    config: &CalculatorConfig,
    mut observe: F,
) -> ColorResult<Vec<Color>>
where
    F: FnMut(u32, &[Color]),
{
    let mut colors = colors;

    for pass in 0..config.iteration_count() {
        let threshold = pass_threshold(config, pass);
        let before = colors.len();
        colors = group_by_threshold(colors, threshold, config.algorithm())?;
        debug!(pass, threshold, before, after = colors.len(), "cluster pass");
        observe(pass, &colors);
    }

    sort_by_weight(&mut colors);
    Ok(colors)
}
