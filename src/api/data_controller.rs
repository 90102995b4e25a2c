use tracing::{debug, trace};

use crate::core::SamplePoint;
use crate::error::WidgetResult;
use crate::render::{ChartInstance, ChartRenderer};

use super::ChartWidget;

impl<S, R: ChartRenderer<S>> ChartWidget<S, R> {
    /// Appends one sample to the live chart.
    ///
    /// The sample is forwarded to the chart instance unchanged; only after
    /// the backend accepts it is it mirrored into the widget state, so a
    /// rejected sample leaves observable state untouched. Only the datasets
    /// fixed at construction receive values.
    pub fn append_sample(&mut self, sample: &SamplePoint) -> WidgetResult<()> {
        self.chart.append(sample)?;
        self.state.push_sample(sample);
        trace!(
            x_label = %sample.x_label,
            samples = self.state.sample_count(),
            "append sample"
        );
        Ok(())
    }

    /// Clears all accumulated data, preserving the series definitions and
    /// the widget's placement.
    ///
    /// The current chart instance is destroyed first, then a fresh one is
    /// constructed on the same surface from the same configuration.
    pub fn reset(&mut self) -> WidgetResult<()> {
        self.chart.destroy()?;
        self.state.clear();
        self.chart = self.renderer.create_chart(&self.surface, &self.config)?;
        debug!(
            container_id = %self.container_id,
            datasets = self.config.datasets.len(),
            "reset chart widget"
        );
        Ok(())
    }
}
