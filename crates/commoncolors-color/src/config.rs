//! Calculator configuration
//!
//! Configuration arrives as loosely typed [`CalculatorOptions`] (typically
//! decoded from a request) and is normalized exactly once into a
//! [`CalculatorConfig`]. Normalization is lenient: any numeric option that
//! is zero, negative, NaN or out of range is replaced by its default. The
//! one thing that is never defaulted is an unrecognized `algorithm` name,
//! which is reported as [`ColorError::UnsupportedAlgorithm`].

use crate::{ColorError, ColorResult};
use commoncolors_core::{Color, MAX_RGB_DISTANCE, euclidean_distance, yiq_distance};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// =============================================================================
// Defaults
// =============================================================================

/// Alpha at or below this value marks a pixel as transparent
pub const DEFAULT_TRANSPARENCY_THRESHOLD: u8 = 10;

/// Number of clustering passes
pub const DEFAULT_ITERATION_COUNT: u32 = 8;

/// Largest accepted number of clustering passes
pub const MAX_ITERATION_COUNT: u32 = 127;

/// Lower luminance bound
pub const DEFAULT_MIN_LUMINANCE: f64 = 0.0;

/// Upper luminance bound
pub const DEFAULT_MAX_LUMINANCE: f64 = 1.0;

/// Colors less saturated than this are discarded
pub const DEFAULT_MIN_SATURATION: f64 = 0.3;

/// Base merge radius, scaled up across passes
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 50.0;

/// Smallest accepted merge radius
pub const MIN_DISTANCE_THRESHOLD: f64 = 1.0;

// =============================================================================
// Algorithm
// =============================================================================

/// Distance metric used to decide whether two colors merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Euclidean distance in the RGB cube
    #[default]
    Simple,
    /// Weighted distance in YIQ space
    Yiq,
}

impl Algorithm {
    /// Distance between two colors under this metric
    #[inline]
    pub fn distance(self, a: &Color, b: &Color) -> f64 {
        match self {
            Self::Simple => euclidean_distance(a, b),
            Self::Yiq => yiq_distance(a, b),
        }
    }

    /// Name as accepted by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Yiq => "yiq",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ColorError;

    /// Parse an algorithm name. The empty string selects the default.
    fn from_str(s: &str) -> ColorResult<Self> {
        match s {
            "" | "simple" => Ok(Self::Simple),
            "yiq" => Ok(Self::Yiq),
            other => Err(ColorError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

// =============================================================================
// Raw options
// =============================================================================

/// Unvalidated calculator options as supplied by a caller
///
/// Zero values mean "use the default", mirroring an omitted field in a
/// JSON request. Call [`CalculatorOptions::validate`] to obtain a
/// [`CalculatorConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CalculatorOptions {
    /// Alpha threshold, 0-255
    #[cfg_attr(feature = "serde", serde(alias = "transparencyTreshold"))]
    pub transparency_threshold: i64,
    /// Number of clustering passes
    pub iteration_count: i64,
    /// Lower luminance bound, 0-1
    pub min_luminance: f64,
    /// Upper luminance bound, 0-1
    pub max_luminance: f64,
    /// Minimum saturation, 0-1
    pub min_saturation: f64,
    /// Base merge radius, 1-441.67
    pub distance_threshold: f64,
    /// "simple", "yiq", or empty for the default
    pub algorithm: String,
}

impl CalculatorOptions {
    /// Normalize into a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedAlgorithm`] if `algorithm` is not
    /// empty, "simple" or "yiq". Numeric fields never fail.
    pub fn validate(&self) -> ColorResult<CalculatorConfig> {
        let algorithm: Algorithm = self.algorithm.parse()?;

        Ok(CalculatorConfig {
            transparency_threshold: normalize_transparency(self.transparency_threshold),
            iteration_count: normalize_iterations(self.iteration_count),
            min_luminance: normalize_unit(
                "min_luminance",
                self.min_luminance,
                DEFAULT_MIN_LUMINANCE,
                true,
            ),
            max_luminance: normalize_unit(
                "max_luminance",
                self.max_luminance,
                DEFAULT_MAX_LUMINANCE,
                false,
            ),
            min_saturation: normalize_unit(
                "min_saturation",
                self.min_saturation,
                DEFAULT_MIN_SATURATION,
                false,
            ),
            distance_threshold: normalize_distance(self.distance_threshold),
            algorithm,
        })
    }
}

// =============================================================================
// Validated configuration
// =============================================================================

/// Validated calculator configuration
///
/// Every field is guaranteed to be within its domain. Values can only be
/// changed through the `with_*` methods, which apply the same
/// normalization as [`CalculatorOptions::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    transparency_threshold: u8,
    iteration_count: u32,
    min_luminance: f64,
    max_luminance: f64,
    min_saturation: f64,
    distance_threshold: f64,
    algorithm: Algorithm,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            transparency_threshold: DEFAULT_TRANSPARENCY_THRESHOLD,
            iteration_count: DEFAULT_ITERATION_COUNT,
            min_luminance: DEFAULT_MIN_LUMINANCE,
            max_luminance: DEFAULT_MAX_LUMINANCE,
            min_saturation: DEFAULT_MIN_SATURATION,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            algorithm: Algorithm::Simple,
        }
    }
}

impl CalculatorConfig {
    pub fn transparency_threshold(&self) -> u8 {
        self.transparency_threshold
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn min_luminance(&self) -> f64 {
        self.min_luminance
    }

    pub fn max_luminance(&self) -> f64 {
        self.max_luminance
    }

    pub fn min_saturation(&self) -> f64 {
        self.min_saturation
    }

    pub fn distance_threshold(&self) -> f64 {
        self.distance_threshold
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn with_transparency_threshold(mut self, threshold: u8) -> Self {
        self.transparency_threshold = normalize_transparency(threshold as i64);
        self
    }

    pub fn with_iteration_count(mut self, count: u32) -> Self {
        self.iteration_count = normalize_iterations(count as i64);
        self
    }

    pub fn with_luminance_range(mut self, min: f64, max: f64) -> Self {
        self.min_luminance = normalize_unit("min_luminance", min, DEFAULT_MIN_LUMINANCE, true);
        self.max_luminance = normalize_unit("max_luminance", max, DEFAULT_MAX_LUMINANCE, false);
        self
    }

    pub fn with_min_saturation(mut self, saturation: f64) -> Self {
        self.min_saturation =
            normalize_unit("min_saturation", saturation, DEFAULT_MIN_SATURATION, false);
        self
    }

    pub fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = normalize_distance(threshold);
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

// =============================================================================
// Normalization
// =============================================================================

fn normalize_transparency(value: i64) -> u8 {
    match u8::try_from(value) {
        Ok(v) if v > 0 => v,
        _ => {
            debug!(value, "transparency_threshold out of range, using default");
            DEFAULT_TRANSPARENCY_THRESHOLD
        }
    }
}

fn normalize_iterations(value: i64) -> u32 {
    match u32::try_from(value) {
        Ok(v) if (1..=MAX_ITERATION_COUNT).contains(&v) => v,
        _ => {
            debug!(value, "iteration_count out of range, using default");
            DEFAULT_ITERATION_COUNT
        }
    }
}

/// Accept `value` if it lies in (0, 1], or [0, 1] when `allow_zero` is set
fn normalize_unit(name: &str, value: f64, default: f64, allow_zero: bool) -> f64 {
    let lower_ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if lower_ok && value <= 1.0 {
        value
    } else {
        debug!(option = name, value, default, "out of range, using default");
        default
    }
}

fn normalize_distance(value: f64) -> f64 {
    if (MIN_DISTANCE_THRESHOLD..=MAX_RGB_DISTANCE).contains(&value) {
        value
    } else {
        debug!(value, "distance_threshold out of range, using default");
        DEFAULT_DISTANCE_THRESHOLD
    }
}
