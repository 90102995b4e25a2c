use serde::{Deserialize, Serialize};

use crate::core::SeriesSpec;
use crate::error::{WidgetError, WidgetResult};

/// Construction input for one chart widget.
///
/// Serializable so host applications can persist/load widget setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    pub width: u32,
    pub height: u32,
    /// Display caption. May be empty; whatever stands here is what the host
    /// page shows.
    #[serde(default)]
    pub title: String,
}

impl WidgetDescriptor {
    /// Creates a descriptor with no series and an empty title.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            series: Vec::new(),
            width,
            height,
            title: String::new(),
        }
    }

    /// Appends one series definition.
    #[must_use]
    pub fn with_series(mut self, spec: SeriesSpec) -> Self {
        self.series.push(spec);
        self
    }

    /// Sets the display caption.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Serializes the descriptor to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> WidgetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WidgetError::InvalidDescriptor(format!("failed to serialize: {e}")))
    }

    /// Deserializes a descriptor from JSON.
    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| WidgetError::InvalidDescriptor(format!("failed to parse: {e}")))
    }
}
