use crate::core::Viewport;
use crate::error::WidgetResult;
use crate::host::{ContainerRequest, HostPage};

/// Page double used by tests and windowless hosts.
///
/// Mounting never fails; every request is recorded so tests can assert
/// container ids, dimensions, and captions.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    pub mounts: Vec<MountRecord>,
}

/// One observed mount request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountRecord {
    pub container_id: String,
    pub viewport: Viewport,
    pub caption: String,
}

/// Surface handle produced by [`HeadlessPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessSurface {
    pub container_id: String,
}

impl HostPage for HeadlessPage {
    type Surface = HeadlessSurface;

    fn mount(&mut self, request: &ContainerRequest<'_>) -> WidgetResult<HeadlessSurface> {
        self.mounts.push(MountRecord {
            container_id: request.container_id.to_owned(),
            viewport: request.viewport,
            caption: request.caption.to_owned(),
        });
        Ok(HeadlessSurface {
            container_id: request.container_id.to_owned(),
        })
    }
}
