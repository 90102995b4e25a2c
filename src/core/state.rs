use crate::core::{SamplePoint, SeriesSpec};

/// Mirror of the data handed to the live chart instance.
///
/// The widget owns exactly one `ChartState` per chart instance generation.
/// Structural invariants: the dataset count equals the series count supplied
/// at construction, and the label sequence length equals every dataset's
/// value sequence length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartState {
    labels: Vec<String>,
    datasets: Vec<DatasetState>,
}

/// Mirrored value sequence of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetState {
    spec: SeriesSpec,
    values: Vec<f64>,
}

impl DatasetState {
    #[must_use]
    pub fn spec(&self) -> &SeriesSpec {
        &self.spec
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl ChartState {
    /// Creates an empty mirror with one dataset per series spec.
    #[must_use]
    pub fn for_series(series: &[SeriesSpec]) -> Self {
        Self {
            labels: Vec::new(),
            datasets: series
                .iter()
                .map(|spec| DatasetState {
                    spec: spec.clone(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Records one accepted sample.
    ///
    /// A value missing for a dataset is mirrored as NaN so the
    /// label/value-length invariant holds even behind a lenient backend.
    pub fn push_sample(&mut self, sample: &SamplePoint) {
        self.labels.push(sample.x_label.clone());
        for dataset in &mut self.datasets {
            let value = sample
                .values
                .get(&dataset.spec.label)
                .copied()
                .unwrap_or(f64::NAN);
            dataset.values.push(value);
        }
    }

    /// Drops all labels and values, keeping the dataset definitions.
    pub fn clear(&mut self) {
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.values.clear();
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn datasets(&self) -> &[DatasetState] {
        &self.datasets
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.labels.len()
    }
}
