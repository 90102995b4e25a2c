use crate::core::{ChartState, Viewport};
use crate::render::{ChartConfig, ChartRenderer};

/// Live chart widget bound to one mounted container.
///
/// `ChartWidget` owns the drawing surface, the translated backend
/// configuration, the mirrored chart state, and the chart instance. It is
/// built by [`super::ChartWidgetFactory`] and exposes two data operations,
/// [`append_sample`](Self::append_sample) and [`reset`](Self::reset).
#[derive(Debug)]
pub struct ChartWidget<S, R: ChartRenderer<S>> {
    pub(super) container_id: String,
    pub(super) title: String,
    pub(super) viewport: Viewport,
    pub(super) surface: S,
    pub(super) config: ChartConfig,
    pub(super) state: ChartState,
    pub(super) renderer: R,
    pub(super) chart: R::Chart,
}

impl<S, R: ChartRenderer<S>> ChartWidget<S, R> {
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The widget-owned mirror of labels and per-dataset values.
    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// The configuration every chart instance of this widget is built from.
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The live chart instance of the current generation.
    #[must_use]
    pub fn chart(&self) -> &R::Chart {
        &self.chart
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
