mod config;
mod recording;

pub use config::{ChartConfig, DatasetConfig, RenderOptions};
pub use recording::{RecordedDataset, RecordingChart, RecordingRenderer};

use crate::core::SamplePoint;
use crate::error::WidgetResult;

/// Contract implemented by an external line-chart rendering library.
///
/// A renderer is a factory for chart instances: it binds a [`ChartConfig`]
/// to a drawing surface produced by the host page. The widget calls it once
/// at construction and once per reset.
pub trait ChartRenderer<S> {
    type Chart: ChartInstance;

    fn create_chart(&mut self, surface: &S, config: &ChartConfig) -> WidgetResult<Self::Chart>;
}

/// One live chart bound to a drawing surface.
///
/// `destroy` must release the instance's resources before the widget
/// constructs a replacement on the same surface; appending to a destroyed
/// instance is a backend fault.
pub trait ChartInstance {
    fn append(&mut self, sample: &SamplePoint) -> WidgetResult<()>;

    fn destroy(&mut self) -> WidgetResult<()>;
}
