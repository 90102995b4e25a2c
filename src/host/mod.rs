mod headless_page;

pub use headless_page::{HeadlessPage, HeadlessSurface, MountRecord};

use crate::core::Viewport;
use crate::error::WidgetResult;

/// Contract implemented by the page/framework layer that places widgets.
///
/// A host page turns a mount request into an attached, captioned container
/// and yields the drawing surface chart backends bind to. The surface type
/// is opaque to the widget.
pub trait HostPage {
    type Surface;

    fn mount(&mut self, request: &ContainerRequest<'_>) -> WidgetResult<Self::Surface>;
}

/// Everything a host page needs to place one widget container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRequest<'a> {
    /// Factory-allocated identifier, unique within the factory's lifetime.
    pub container_id: &'a str,
    pub viewport: Viewport,
    /// Display caption attached next to the drawing surface.
    pub caption: &'a str,
}
