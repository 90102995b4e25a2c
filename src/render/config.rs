use serde::{Deserialize, Serialize};

use crate::core::SeriesSpec;

/// Configuration shape consumed by chart backends.
///
/// This is the translated form of the construction-time series list: one
/// dataset entry per series, plus the fixed set of recognized render
/// options. Serializable so hosts can persist or diff chart setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub datasets: Vec<DatasetConfig>,
    #[serde(default)]
    pub options: RenderOptions,
}

/// Backend-facing definition of one plotted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub label: String,
    pub stroke_color: String,
}

/// The recognized render options.
///
/// Everything defaults to off: no animated updates, no area fill under the
/// line, no per-point markers, no curve smoothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub animate: bool,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub point_markers: bool,
    #[serde(default)]
    pub curve_smoothing: bool,
}

impl ChartConfig {
    /// Translates a series list into the backend configuration with default
    /// (all-off) render options.
    #[must_use]
    pub fn for_line_series(series: &[SeriesSpec]) -> Self {
        Self {
            datasets: series
                .iter()
                .map(|spec| DatasetConfig {
                    label: spec.label.clone(),
                    stroke_color: spec.color.clone(),
                })
                .collect(),
            options: RenderOptions::default(),
        }
    }

    /// Overrides the render options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}
