mod data_controller;
mod factory;
mod widget;
mod widget_config;

pub use factory::ChartWidgetFactory;
pub use widget::ChartWidget;
pub use widget_config::WidgetDescriptor;
