use thiserror::Error;

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Faults surfaced through the widget's call surface.
///
/// The widget performs no input validation of its own: `HostPage` and
/// `Backend` are the vocabulary its collaborators report failures with, and
/// the widget propagates them unchanged. `InvalidDescriptor` comes from the
/// descriptor JSON helpers.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("host page fault: {0}")]
    HostPage(String),

    #[error("chart backend fault: {0}")]
    Backend(String),

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}
