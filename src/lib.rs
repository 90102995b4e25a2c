//! chart-widget: a labeled line-chart widget as a thin forwarding layer.
//!
//! The crate owns no drawing code. A [`ChartWidgetFactory`] mounts a
//! captioned container on an injected host page, translates a fixed list of
//! named series into a backend configuration, and the resulting
//! [`ChartWidget`] forwards append/reset calls to the live chart instance
//! while mirroring the accepted data for inspection.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

#[cfg(feature = "egui-adapter")]
pub mod platform_egui;

pub use api::{ChartWidget, ChartWidgetFactory, WidgetDescriptor};
pub use error::{WidgetError, WidgetResult};
