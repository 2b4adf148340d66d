// File: crates/trace-core/tests/chart.rs
// Purpose: Chart facade: load lifecycle, pointer gating, frame contents and configuration checks.

use chrono::{TimeZone, Utc};
use trace_core::{
    Chart, ChartConfig, ChartError, CursorPhase, Dataset, DomainPadding, Insets, LabelFormat, LoadState, Sample,
    TickSpec, WidthPolicy,
};

fn config() -> ChartConfig {
    ChartConfig::default()
        .with_margins(Insets::new(0, 0, 0, 0))
        .with_width(WidthPolicy::Fixed(200))
        .with_height(100, None)
}

fn three() -> Dataset {
    Dataset::new(vec![Sample::new(0.0, 1.0), Sample::new(10.0, 5.0), Sample::new(20.0, 3.0)])
}

#[test]
fn nearest_sample_scenario() {
    let mut chart = Chart::with_dataset(config(), three()).unwrap();
    let x = chart.scales().x.linear().forward(7.0) as f32;
    chart.on_pointer_move(x, 10.0);
    assert_eq!(chart.cursor().state().active_sample, Some(Sample::new(10.0, 5.0)));
    chart.on_pointer_leave();
    assert_eq!(chart.phase(), CursorPhase::Idle);
    assert!(chart.overlay().is_hidden());
}

#[test]
fn pending_chart_ignores_pointer() {
    let mut chart = Chart::new(config()).unwrap();
    assert_eq!(chart.load_state(), LoadState::Pending);
    chart.on_pointer_move(50.0, 50.0);
    assert!(chart.overlay().is_hidden());
    let frame = chart.frame();
    assert!(frame.line.is_empty());
    assert!(frame.grid.is_empty());
    assert!(frame.x_labels.is_empty());
}

#[test]
fn empty_dataset_never_tracks() {
    let mut chart = Chart::with_dataset(config(), Dataset::empty()).unwrap();
    assert!(chart.is_ready());
    chart.on_pointer_enter(10.0, 10.0);
    chart.on_pointer_move(100.0, 10.0);
    assert!(chart.overlay().is_hidden());
    assert_eq!(chart.frame().grid.len(), 0);
}

#[test]
fn reload_clears_overlay() {
    let mut chart = Chart::with_dataset(config(), three()).unwrap();
    chart.on_pointer_move(100.0, 0.0);
    assert_eq!(chart.phase(), CursorPhase::Tracking);

    chart.begin_load();
    assert!(!chart.is_ready());
    assert!(chart.overlay().is_hidden());
    assert!(chart.dataset().is_empty());
    chart.on_pointer_move(100.0, 0.0);
    assert!(chart.overlay().is_hidden());

    let next = Dataset::new(vec![Sample::new(100.0, 2.0), Sample::new(200.0, 4.0)]);
    chart.finish_load(next.clone());
    assert!(chart.is_ready());
    assert!(chart.overlay().is_hidden());
    assert_eq!(chart.dataset(), &next);
    chart.on_pointer_move(199.0, 0.0);
    assert_eq!(chart.cursor().state().active_sample.map(|s| s.time), Some(200.0));
}

#[test]
fn latest_completed_load_wins() {
    let mut chart = Chart::new(config()).unwrap();
    chart.begin_load();
    chart.begin_load();
    chart.finish_load(three());
    let newer = Dataset::new(vec![Sample::new(5.0, 1.0)]);
    chart.finish_load(newer.clone());
    assert_eq!(chart.dataset(), &newer);
}

#[test]
fn frame_splits_line_at_absent_values() {
    let data = Dataset::new(vec![
        Sample::new(0.0, 1.0),
        Sample::new(10.0, 2.0),
        Sample::absent(20.0),
        Sample::new(30.0, 3.0),
        Sample::new(40.0, 1.0),
    ]);
    let chart = Chart::with_dataset(config(), data).unwrap();
    let frame = chart.frame();
    assert_eq!(frame.line.len(), 2);
    assert_eq!(frame.line[0].len(), 2);
    assert_eq!(frame.line[1].len(), 2);
    assert_eq!(frame.line[1][0].x, 150.0);
    assert!(frame.overlay.is_hidden());
}

#[test]
fn frame_labels_follow_format() {
    let day = 86_400_000.0;
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let data = Dataset::new(
        (0..4).map(|i| Sample::at(start + chrono::Duration::days(i), i as f64 * 2.5)).collect(),
    );
    let cfg = config().with_ticks(TickSpec::Every(day), TickSpec::Count(5));
    let chart = Chart::with_dataset(cfg, data).unwrap();
    let frame = chart.frame();
    let xs: Vec<&str> = frame.x_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(xs, vec!["2024-03-01", "2024-03-02", "2024-03-03", "2024-03-04"]);
    let ys: Vec<&str> = frame.y_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(ys.first().copied(), Some("0.00"));
    assert_eq!(ys.last().copied(), Some("6.00"));
}

#[test]
fn per_sample_width_and_padding_flow_through() {
    let cfg = ChartConfig::default()
        .with_margins(Insets::new(60, 20, 20, 30))
        .with_width(WidthPolicy::PerSample { per_sample_px: 10, minimum_count: 200 })
        .with_padding(DomainPadding::Symmetric);
    let data = Dataset::new(
        [-2.0, 10.0, 4.0, 0.5, 3.0].iter().enumerate().map(|(i, &v)| Sample::new(i as f64, v)).collect(),
    );
    let chart = Chart::with_dataset(cfg, data).unwrap();
    assert_eq!(chart.size().width, 1920);
    assert_eq!(chart.outer_size().0, 2000);
    assert_eq!(chart.scales().y.linear().domain().min, -10.0);
}

#[test]
fn invalid_config_is_rejected() {
    let zero_px = ChartConfig::default().with_width(WidthPolicy::PerSample { per_sample_px: 0, minimum_count: 1 });
    assert!(matches!(Chart::new(zero_px), Err(ChartError::InvalidConfig(_))));

    let bad_ticks = ChartConfig::default().with_ticks(TickSpec::Every(0.0), TickSpec::Count(5));
    assert!(matches!(bad_ticks.validate(), Err(ChartError::InvalidConfig(_))));

    let bad_format = ChartConfig::default().with_format(LabelFormat::new("%Q", 2));
    assert!(bad_format.validate().is_err());

    assert!(ChartConfig::default().validate().is_ok());
}

#[test]
fn try_new_reports_first_unordered_sample() {
    let err = Dataset::try_new(vec![Sample::new(0.0, 1.0), Sample::new(5.0, 1.0), Sample::new(3.0, 1.0)])
        .unwrap_err();
    assert_eq!(err, ChartError::Unordered { index: 2 });
    assert_eq!(err.to_string(), "sample 2 is out of time order");
    assert!(Dataset::try_new(vec![Sample::new(1.0, 0.0), Sample::new(1.0, 2.0)]).is_ok());
}
