use crate::core::SamplePoint;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{ChartConfig, ChartInstance, ChartRenderer};

/// In-memory chart backend used by tests and headless hosts.
///
/// It enforces the append/destroy contract a real backend would and keeps
/// everything it received inspectable.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub charts_created: usize,
}

impl<S> ChartRenderer<S> for RecordingRenderer {
    type Chart = RecordingChart;

    fn create_chart(&mut self, _surface: &S, config: &ChartConfig) -> WidgetResult<RecordingChart> {
        self.charts_created += 1;
        Ok(RecordingChart {
            labels: Vec::new(),
            datasets: config
                .datasets
                .iter()
                .map(|dataset| RecordedDataset {
                    label: dataset.label.clone(),
                    stroke_color: dataset.stroke_color.clone(),
                    values: Vec::new(),
                })
                .collect(),
            destroyed: false,
        })
    }
}

/// Chart instance recorded by [`RecordingRenderer`].
#[derive(Debug)]
pub struct RecordingChart {
    pub labels: Vec<String>,
    pub datasets: Vec<RecordedDataset>,
    pub destroyed: bool,
}

/// One dataset as seen by the recording backend.
#[derive(Debug)]
pub struct RecordedDataset {
    pub label: String,
    pub stroke_color: String,
    pub values: Vec<f64>,
}

impl ChartInstance for RecordingChart {
    /// Appends one sample.
    ///
    /// The whole sample is validated before any state changes: every dataset
    /// must have a value, extra keys are ignored (the wrapped libraries this
    /// backend stands in for do the same).
    fn append(&mut self, sample: &SamplePoint) -> WidgetResult<()> {
        if self.destroyed {
            return Err(WidgetError::Backend(
                "append on a destroyed chart instance".to_owned(),
            ));
        }

        let mut incoming = Vec::with_capacity(self.datasets.len());
        for dataset in &self.datasets {
            let value = sample.values.get(&dataset.label).copied().ok_or_else(|| {
                WidgetError::Backend(format!(
                    "sample is missing a value for dataset `{}`",
                    dataset.label
                ))
            })?;
            incoming.push(value);
        }

        self.labels.push(sample.x_label.clone());
        for (dataset, value) in self.datasets.iter_mut().zip(incoming) {
            dataset.values.push(value);
        }
        Ok(())
    }

    fn destroy(&mut self) -> WidgetResult<()> {
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.values.clear();
        }
        self.destroyed = true;
        Ok(())
    }
}
