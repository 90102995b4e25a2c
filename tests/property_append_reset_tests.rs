use chart_widget::api::{ChartWidget, ChartWidgetFactory, WidgetDescriptor};
use chart_widget::core::{SamplePoint, SeriesSpec};
use chart_widget::host::{HeadlessPage, HeadlessSurface};
use chart_widget::render::RecordingRenderer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(f64),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1.0e6f64..1.0e6).prop_map(Op::Append),
        1 => Just(Op::Reset),
    ]
}

fn widget() -> ChartWidget<HeadlessSurface, RecordingRenderer> {
    let mut factory = ChartWidgetFactory::new(HeadlessPage::default());
    let descriptor = WidgetDescriptor::new(1024, 512)
        .with_series(SeriesSpec::new("alpha", "#ff0000"))
        .with_series(SeriesSpec::new("beta", "#0000ff"));
    factory
        .build(RecordingRenderer::default(), descriptor)
        .expect("widget init")
}

proptest! {
    #[test]
    fn interleaved_appends_and_resets_preserve_invariants(
        ops in prop::collection::vec(op_strategy(), 0..64)
    ) {
        let mut widget = widget();
        let mut expected_labels: Vec<String> = Vec::new();
        let mut expected_alpha: Vec<f64> = Vec::new();

        for (step, op) in ops.iter().enumerate() {
            match op {
                Op::Append(value) => {
                    let label = format!("t{step}");
                    let sample = SamplePoint::new(label.clone())
                        .with_value("alpha", *value)
                        .with_value("beta", value * 0.5);
                    widget.append_sample(&sample).expect("append should succeed");
                    expected_labels.push(label);
                    expected_alpha.push(*value);
                }
                Op::Reset => {
                    widget.reset().expect("reset should succeed");
                    expected_labels.clear();
                    expected_alpha.clear();
                }
            }

            // Structural invariants hold after every operation.
            prop_assert_eq!(widget.state().datasets().len(), 2);
            prop_assert_eq!(widget.state().labels(), expected_labels.as_slice());
            for dataset in widget.state().datasets() {
                prop_assert_eq!(dataset.values().len(), expected_labels.len());
            }
            prop_assert_eq!(widget.state().datasets()[0].values(), expected_alpha.as_slice());

            // The mirror never diverges from what the backend accepted.
            prop_assert_eq!(widget.chart().labels.as_slice(), widget.state().labels());
        }

        // Series definitions are immutable across the whole run.
        prop_assert_eq!(
            widget.state().datasets()[0].spec(),
            &SeriesSpec::new("alpha", "#ff0000")
        );
        prop_assert_eq!(
            widget.state().datasets()[1].spec(),
            &SeriesSpec::new("beta", "#0000ff")
        );
    }
}
