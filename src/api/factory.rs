use tracing::debug;

use crate::core::{ChartState, Viewport};
use crate::error::WidgetResult;
use crate::host::{ContainerRequest, HostPage};
use crate::render::{ChartConfig, ChartRenderer};

use super::{ChartWidget, WidgetDescriptor};

/// Builds chart widgets on one host page.
///
/// The factory owns the page collaborator and the container-id counter, so
/// every widget it builds gets a locally unique, monotonic identifier.
pub struct ChartWidgetFactory<P: HostPage> {
    page: P,
    next_container_id: u64,
}

impl<P: HostPage> ChartWidgetFactory<P> {
    #[must_use]
    pub fn new(page: P) -> Self {
        Self {
            page,
            next_container_id: 0,
        }
    }

    /// Mounts a container and constructs a widget on it.
    ///
    /// The descriptor is forwarded as given: dimensions and series labels
    /// are not validated here, and collaborator faults propagate to the
    /// caller. After this returns, `append_sample` and `reset` are
    /// immediately usable.
    pub fn build<R: ChartRenderer<P::Surface>>(
        &mut self,
        mut renderer: R,
        descriptor: WidgetDescriptor,
    ) -> WidgetResult<ChartWidget<P::Surface, R>> {
        let container_id = self.allocate_container_id();
        let viewport = Viewport::new(descriptor.width, descriptor.height);

        let surface = self.page.mount(&ContainerRequest {
            container_id: &container_id,
            viewport,
            caption: &descriptor.title,
        })?;

        let config = ChartConfig::for_line_series(&descriptor.series);
        let chart = renderer.create_chart(&surface, &config)?;

        debug!(
            container_id = %container_id,
            width = viewport.width,
            height = viewport.height,
            datasets = config.datasets.len(),
            "mounted chart widget"
        );

        Ok(ChartWidget {
            container_id,
            title: descriptor.title,
            viewport,
            surface,
            config,
            state: ChartState::for_series(&descriptor.series),
            renderer,
            chart,
        })
    }

    fn allocate_container_id(&mut self) -> String {
        let id = self.next_container_id;
        self.next_container_id += 1;
        format!("chart-container-{id}")
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn into_page(self) -> P {
        self.page
    }
}
