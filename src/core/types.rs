use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One plotted line: display label plus stroke color.
///
/// The color is passed through to the chart backend uninterpreted, so any
/// notation the backend understands is legal here. The set of series is
/// fixed for the widget's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub color: String,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Pixel dimensions of the widget's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// One data sample: an x-axis label plus named y-values keyed by series label.
///
/// `IndexMap` preserves insertion order so samples serialize and replay
/// deterministically. The widget forwards the sample to the backend
/// unchanged; whether a value may be missing for a dataset is the backend's
/// call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x_label: String,
    pub values: IndexMap<String, f64>,
}

impl SamplePoint {
    #[must_use]
    pub fn new(x_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            values: IndexMap::new(),
        }
    }

    /// Adds one named y-value to the sample.
    #[must_use]
    pub fn with_value(mut self, series_label: impl Into<String>, value: f64) -> Self {
        self.values.insert(series_label.into(), value);
        self
    }
}
