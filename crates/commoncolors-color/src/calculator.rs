//! Palette calculator
//!
//! Runs the full pipeline for one image's pixels:
//!
//! 1. **Filter**: drop transparent, out-of-band and unsaturated pixels
//! 2. **Cluster**: merge the survivors over `iteration_count` passes
//! 3. **Sort**: order the palette by weight, heaviest first
//! 4. **Gradient**: pick a dominant/secondary pair from the palette
//!
//! A [`Calculator`] holds only its validated configuration, so one
//! instance can be shared freely between threads and invocations.

use crate::ColorResult;
use crate::cluster::cluster_with_observer;
use crate::config::{CalculatorConfig, CalculatorOptions};
use crate::filter::filter_colors;
use crate::gradient::{Gradient, hue_distance, select_gradient};
use commoncolors_core::Color;
use tracing::debug;

/// One palette entry as reported to a caller
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "camelCase"))]
pub struct PaletteEntry {
    /// Lowercase `#rrggbb`
    pub value: String,
    /// Number of source pixels merged into this entry
    pub weight: u32,
    /// Absolute hue difference from the dominant color, 0-1
    pub hue_distance: f64,
}

/// Result of one calculator run
///
/// Serializes as `{colors, gradient, gradientSource, steps?}` where
/// `gradient` is the two hex stops, or `null` for an empty palette.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonColors {
    /// Palette entries, heaviest first
    pub colors: Vec<PaletteEntry>,
    /// `None` when no pixel survived filtering
    pub gradient: Option<Gradient>,
    /// Output of every clustering pass, when requested
    pub steps: Option<Vec<Vec<Color>>>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for CommonColors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let fields = if self.steps.is_some() { 4 } else { 3 };
        let mut state = serializer.serialize_struct("CommonColors", fields)?;
        state.serialize_field("colors", &self.colors)?;
        state.serialize_field("gradient", &self.gradient.as_ref().map(Gradient::stops))?;
        state.serialize_field("gradientSource", &self.gradient.as_ref().map(|g| g.source))?;
        match &self.steps {
            Some(steps) => state.serialize_field("steps", steps)?,
            None => state.skip_field("steps")?,
        }
        state.end()
    }
}

impl CommonColors {
    /// Check if the palette is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Dominant color calculator
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Create a calculator from a validated configuration
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Create a calculator from raw options
    ///
    /// # Errors
    ///
    /// Fails only for an unsupported `algorithm` name.
    pub fn from_options(options: &CalculatorOptions) -> ColorResult<Self> {
        Ok(Self::new(options.validate()?))
    }

    /// The configuration in use
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Filter and cluster `pixels` into a weight-sorted palette
    ///
    /// Returns an empty palette if no pixel passes the filter.
    pub fn common_colors(&self, pixels: &[Color]) -> ColorResult<Vec<Color>> {
        self.run(pixels, None)
    }

    /// Run the full pipeline and build a caller-facing result
    ///
    /// # Arguments
    ///
    /// * `pixels` - Pixel colors in any consistent traversal order
    /// * `with_steps` - Also record the palette after every pass
    pub fn process(&self, pixels: &[Color], with_steps: bool) -> ColorResult<CommonColors> {
        let mut steps = with_steps.then(Vec::new);
        let palette = self.run(pixels, steps.as_mut())?;

        let gradient = if palette.is_empty() {
            None
        } else {
            Some(select_gradient(&palette, self.config.min_saturation())?)
        };

        let colors = match palette.first() {
            Some(dominant) => palette
                .iter()
                .map(|c| PaletteEntry {
                    value: c.to_hex(),
                    weight: c.weight(),
                    hue_distance: hue_distance(dominant, c),
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(CommonColors {
            colors,
            gradient,
            steps,
        })
    }

    fn run(&self, pixels: &[Color], steps: Option<&mut Vec<Vec<Color>>>) -> ColorResult<Vec<Color>> {
        debug!(
            pixels = pixels.len(),
            algorithm = %self.config.algorithm(),
            iterations = self.config.iteration_count(),
            "computing common colors"
        );

        let colors = filter_colors(pixels, &self.config);
        debug!(kept = colors.len(), "filtered pixels");

        let palette = match steps {
            Some(steps) => cluster_with_observer(colors, &self.config, |_, snapshot| {
                steps.push(snapshot.to_vec())
            })?,
            None => cluster_with_observer(colors, &self.config, |_, _| {})?,
        };

        debug!(palette = palette.len(), "palette ready");
        Ok(palette)
    }
}
