mod state;
mod types;

pub use state::{ChartState, DatasetState};
pub use types::{SamplePoint, SeriesSpec, Viewport};
