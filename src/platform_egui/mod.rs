//! egui/egui_plot bindings for the widget contract.
//!
//! The host page hands out plot surfaces keyed by container id; the chart
//! instance accumulates samples and draws them on demand from the host's
//! frame callback via [`EguiChart::show`].

use egui::Color32;
use egui_plot::{Legend, Line, Plot, Points};

use crate::core::{SamplePoint, Viewport};
use crate::error::{WidgetError, WidgetResult};
use crate::host::{ContainerRequest, HostPage};
use crate::render::{ChartConfig, ChartInstance, ChartRenderer, RenderOptions};

/// Page adapter for immediate-mode egui hosts.
///
/// There is no retained document to attach to, so a mount simply freezes
/// the request into a surface; the caption is drawn next to the plot each
/// frame.
#[derive(Debug, Default)]
pub struct EguiHostPage;

/// Surface handle produced by [`EguiHostPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EguiPlotSurface {
    pub plot_id: String,
    pub viewport: Viewport,
    pub caption: String,
}

impl HostPage for EguiHostPage {
    type Surface = EguiPlotSurface;

    fn mount(&mut self, request: &ContainerRequest<'_>) -> WidgetResult<EguiPlotSurface> {
        Ok(EguiPlotSurface {
            plot_id: request.container_id.to_owned(),
            viewport: request.viewport,
            caption: request.caption.to_owned(),
        })
    }
}

/// Chart backend drawing through `egui_plot`.
#[derive(Debug, Default)]
pub struct EguiChartRenderer;

impl ChartRenderer<EguiPlotSurface> for EguiChartRenderer {
    type Chart = EguiChart;

    fn create_chart(
        &mut self,
        surface: &EguiPlotSurface,
        config: &ChartConfig,
    ) -> WidgetResult<EguiChart> {
        let datasets = config
            .datasets
            .iter()
            .map(|dataset| {
                Ok(EguiDataset {
                    label: dataset.label.clone(),
                    color: parse_stroke_color(&dataset.stroke_color)?,
                    points: Vec::new(),
                })
            })
            .collect::<WidgetResult<Vec<_>>>()?;

        Ok(EguiChart {
            surface: surface.clone(),
            options: config.options,
            labels: Vec::new(),
            datasets,
            destroyed: false,
        })
    }
}

/// One live plot. Samples land at consecutive integer x positions in
/// append order.
#[derive(Debug)]
pub struct EguiChart {
    surface: EguiPlotSurface,
    options: RenderOptions,
    labels: Vec<String>,
    datasets: Vec<EguiDataset>,
    destroyed: bool,
}

#[derive(Debug)]
struct EguiDataset {
    label: String,
    color: Color32,
    points: Vec<[f64; 2]>,
}

impl ChartInstance for EguiChart {
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

        let x = self.labels.len() as f64;
        self.labels.push(sample.x_label.clone());
        for (dataset, value) in self.datasets.iter_mut().zip(incoming) {
            dataset.points.push([x, value]);
        }
        Ok(())
    }

    fn destroy(&mut self) -> WidgetResult<()> {
        self.labels.clear();
        for dataset in &mut self.datasets {
            dataset.points.clear();
        }
        self.destroyed = true;
        Ok(())
    }
}

impl EguiChart {
    /// Draws the plot and its caption. Call once per host frame.
    ///
    /// egui redraws every frame and draws straight segments, so the
    /// `animate` and `curve_smoothing` options have no effect here; `fill`
    /// and `point_markers` are honored.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            Plot::new(self.surface.plot_id.clone())
                .width(self.surface.viewport.width as f32)
                .height(self.surface.viewport.height as f32)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for dataset in &self.datasets {
                        let mut line = Line::new(dataset.points.clone())
                            .color(dataset.color)
                            .width(1.5)
                            .name(&dataset.label);
                        if self.options.fill {
                            line = line.fill(0.0);
                        }
                        plot_ui.line(line);
                        if self.options.point_markers {
                            plot_ui.points(
                                Points::new(dataset.points.clone())
                                    .radius(2.0)
                                    .color(dataset.color)
                                    .name(&dataset.label),
                            );
                        }
                    }
                });
            if !self.surface.caption.is_empty() {
                ui.label(&self.surface.caption);
            }
        });
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn dataset_len(&self, index: usize) -> Option<usize> {
        self.datasets.get(index).map(|dataset| dataset.points.len())
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

/// Parses a `#rgb` or `#rrggbb` stroke color.
pub fn parse_stroke_color(input: &str) -> WidgetResult<Color32> {
    let invalid =
        || WidgetError::Backend(format!("unsupported stroke color `{input}`"));

    let hex = input.strip_prefix('#').ok_or_else(invalid)?;
    let nibble = |at: usize| {
        hex.get(at..=at)
            .and_then(|digit| u8::from_str_radix(digit, 16).ok())
            .ok_or_else(invalid)
    };
    let pair = |at: usize| {
        hex.get(at..at + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(invalid)
    };

    match hex.len() {
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Ok(Color32::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => Ok(Color32::from_rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => Err(invalid()),
    }
}
