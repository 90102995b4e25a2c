use chart_widget::api::{ChartWidget, ChartWidgetFactory, WidgetDescriptor};
use chart_widget::core::{SamplePoint, SeriesSpec};
use chart_widget::error::WidgetError;
use chart_widget::host::{HeadlessPage, HeadlessSurface};
use chart_widget::render::RecordingRenderer;

fn widget() -> ChartWidget<HeadlessSurface, RecordingRenderer> {
    let mut factory = ChartWidgetFactory::new(HeadlessPage::default());
    let descriptor = WidgetDescriptor::new(800, 400)
        .with_series(SeriesSpec::new("alpha", "#ff0000"))
        .with_series(SeriesSpec::new("beta", "#0000ff"));
    factory
        .build(RecordingRenderer::default(), descriptor)
        .expect("widget init")
}

#[test]
fn appended_values_arrive_in_call_order() {
    let mut widget = widget();

    for step in 0..5 {
        let sample = SamplePoint::new(format!("t{step}"))
            .with_value("alpha", step as f64)
            .with_value("beta", step as f64 * 10.0);
        widget.append_sample(&sample).expect("append should succeed");
    }

    assert_eq!(widget.state().labels(), ["t0", "t1", "t2", "t3", "t4"]);
    assert_eq!(
        widget.state().datasets()[0].values(),
        [0.0, 1.0, 2.0, 3.0, 4.0]
    );
    assert_eq!(
        widget.state().datasets()[1].values(),
        [0.0, 10.0, 20.0, 30.0, 40.0]
    );
    assert_eq!(widget.chart().datasets[0].values, [0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn label_and_value_sequences_stay_equal_length() {
    let mut widget = widget();

    for step in 0..12 {
        let sample = SamplePoint::new(format!("t{step}"))
            .with_value("alpha", 1.0)
            .with_value("beta", 2.0);
        widget.append_sample(&sample).expect("append should succeed");

        assert_eq!(widget.state().sample_count(), step + 1);
        for dataset in widget.state().datasets() {
            assert_eq!(dataset.values().len(), step + 1);
        }
    }
}

#[test]
fn extra_sample_keys_are_ignored() {
    let mut widget = widget();

    let sample = SamplePoint::new("t0")
        .with_value("alpha", 1.0)
        .with_value("beta", 2.0)
        .with_value("gamma", 99.0);
    widget.append_sample(&sample).expect("append should succeed");

    assert_eq!(widget.state().datasets().len(), 2);
    assert_eq!(widget.chart().datasets.len(), 2);
    assert_eq!(widget.state().datasets()[0].values(), [1.0]);
    assert_eq!(widget.state().datasets()[1].values(), [2.0]);
}

#[test]
fn missing_value_is_rejected_and_state_untouched() {
    let mut widget = widget();

    widget
        .append_sample(
            &SamplePoint::new("t0")
                .with_value("alpha", 1.0)
                .with_value("beta", 2.0),
        )
        .expect("append should succeed");

    let err = widget
        .append_sample(&SamplePoint::new("t1").with_value("alpha", 3.0))
        .expect_err("append must fail");
    assert!(matches!(err, WidgetError::Backend(_)));

    // The rejected sample left neither the mirror nor the backend changed.
    assert_eq!(widget.state().labels(), ["t0"]);
    assert_eq!(widget.state().datasets()[0].values(), [1.0]);
    assert_eq!(widget.state().datasets()[1].values(), [2.0]);
    assert_eq!(widget.chart().labels, ["t0"]);
    assert_eq!(widget.chart().datasets[1].values, [2.0]);
}

#[test]
fn zero_dataset_widget_records_only_labels() {
    let mut factory = ChartWidgetFactory::new(HeadlessPage::default());
    let mut widget = factory
        .build(RecordingRenderer::default(), WidgetDescriptor::new(100, 100))
        .expect("widget init");

    widget
        .append_sample(&SamplePoint::new("t0").with_value("anything", 1.0))
        .expect("append should succeed");

    assert!(widget.state().datasets().is_empty());
    assert!(widget.chart().datasets.is_empty());
    assert_eq!(widget.state().labels(), ["t0"]);
    assert_eq!(widget.chart().labels, ["t0"]);
}

#[test]
fn values_pass_through_verbatim() {
    let mut widget = widget();

    let sample = SamplePoint::new("t0")
        .with_value("alpha", -0.0)
        .with_value("beta", 1.0e-12);
    widget.append_sample(&sample).expect("append should succeed");

    assert_eq!(widget.chart().datasets[0].values[0].to_bits(), (-0.0f64).to_bits());
    assert_eq!(widget.chart().datasets[1].values[0], 1.0e-12);
}
