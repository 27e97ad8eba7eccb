use std::time::Duration;

use table_chart::ChartError;
use table_chart::api::{
    LifecycleConfig, LifecycleState, TABLE_ACCESSIBILITY, TableChart, TooltipFormat,
    initialize_charts,
};
use table_chart::core::{ChartKind, TableElement, TableRow};
use table_chart::error::ErrorClass;
use table_chart::interaction::{InMemoryDocument, SurfaceEvent};
use table_chart::render::{RecordingBackend, SurfaceId};

fn sales_table(id: &str, kind: &str) -> TableElement {
    TableElement::new(id)
        .with_attribute("data-chart-type", kind)
        .with_head(TableRow::headers(&["Year", "North", "South"]))
        .with_body_row(TableRow::labeled("2023", &["1", "3"]))
        .with_body_row(TableRow::labeled("2024", &["2", "4"]))
}

fn share_table(id: &str) -> TableElement {
    TableElement::new(id)
        .with_attribute("data-chart-type", "pie")
        .with_attribute("data-tooltip-format", "percentages")
        .with_head(TableRow::headers(&["Segment", "Share"]))
        .with_body_row(TableRow::labeled("Retail", &["55"]))
        .with_body_row(TableRow::labeled("Online", &["45"]))
}

fn assert_untouched(document: &InMemoryDocument, table_id: &str) {
    let surface = SurfaceId::for_table(table_id);
    assert!(document.surface_anchor(&surface).is_none());
    assert!(document.accessibility(table_id).is_none());
    assert!(document.active_subscriptions().is_empty());
}

#[test]
fn initialization_inserts_surface_and_hides_the_table() {
    let mut document = InMemoryDocument::new().with_table(sales_table("sales", "stacked"));
    let mut chart = TableChart::initialize(
        &mut document,
        "sales",
        RecordingBackend::new(),
        LifecycleConfig::default(),
    )
    .expect("chart");

    let surface = SurfaceId::new("sales-chart");
    assert_eq!(document.surface_anchor(&surface), Some("sales"));
    assert_eq!(document.accessibility("sales"), Some(&TABLE_ACCESSIBILITY));
    assert_eq!(TABLE_ACCESSIBILITY.role, "table");
    assert_eq!(TABLE_ACCESSIBILITY.label, "Chart data");
    assert!(TABLE_ACCESSIBILITY.hidden_from_layout);

    assert_eq!(chart.table_id(), "sales");
    assert_eq!(chart.settings().kind, ChartKind::Stacked);
    assert_eq!(chart.controller().state(), LifecycleState::Uninitialized);
    assert!(document.active_subscriptions().is_empty());
}

#[test]
fn visibility_is_observed_only_after_layout() {
    let mut document = InMemoryDocument::new().with_table(sales_table("sales", "bar"));
    let backend = RecordingBackend::new();
    let log = backend.clone();
    let mut chart =
        TableChart::initialize(&mut document, "sales", backend, LifecycleConfig::default())
            .expect("chart");
    let surface = SurfaceId::for_table("sales");

    assert!(!chart.handle_event(
        &mut document,
        SurfaceEvent::VisibilityChanged { ratio: 1.0 },
        Duration::ZERO,
    ));
    assert_eq!(log.log().renders, 0);
    assert_eq!(chart.controller().state(), LifecycleState::Uninitialized);

    assert!(!chart.handle_event(&mut document, SurfaceEvent::LaidOut, Duration::ZERO));
    assert_eq!(chart.controller().state(), LifecycleState::AwaitingVisibility);
    assert!(document.has_subscription(&surface, false));

    assert!(chart.handle_event(
        &mut document,
        SurfaceEvent::VisibilityChanged { ratio: 1.0 },
        Duration::ZERO,
    ));
    assert_eq!(log.log().renders, 1);
    assert_eq!(chart.controller().state(), LifecycleState::Rendered);
    assert!(!document.has_subscription(&surface, false));
}

#[test]
fn table_attributes_become_build_options() {
    let table = sales_table("sales", " Line ")
        .with_attribute("data-tooltip-format", "dollars-millions")
        .with_attribute("data-fill", "true");
    let mut document = InMemoryDocument::new().with_table(table);
    let backend = RecordingBackend::new();
    let recorder = backend.clone();
    let mut chart =
        TableChart::initialize(&mut document, "sales", backend, LifecycleConfig::default())
            .expect("chart");

    assert_eq!(chart.settings().kind, ChartKind::Line);
    assert_eq!(chart.settings().tooltip_format, TooltipFormat::DollarsMillions);
    assert!(chart.settings().fill);

    chart.handle_event(&mut document, SurfaceEvent::LaidOut, Duration::ZERO);
    assert!(chart.handle_event(
        &mut document,
        SurfaceEvent::VisibilityChanged { ratio: 0.9 },
        Duration::ZERO,
    ));
    let config = recorder.log().last_config.expect("config");
    assert_eq!(config.format_tooltip(1.0), "$1,000,000");
    assert!(config.data.datasets.iter().all(|d| d.fill == Some(true)));
}

#[test]
fn fill_flag_requires_the_exact_true_value() {
    for value in ["yes", "1", "TRUE", ""] {
        let table = sales_table("sales", "line").with_attribute("data-fill", value);
        let mut document = InMemoryDocument::new().with_table(table);
        let chart = TableChart::initialize(
            &mut document,
            "sales",
            RecordingBackend::new(),
            LifecycleConfig::default(),
        )
        .expect("chart");
        assert!(!chart.settings().fill, "value {value:?}");
    }
}

#[test]
fn missing_table_is_a_configuration_error() {
    let mut document = InMemoryDocument::new();
    let err = TableChart::initialize(
        &mut document,
        "absent",
        RecordingBackend::new(),
        LifecycleConfig::default(),
    )
    .err()
    .expect("must fail");

    assert!(matches!(err, ChartError::MissingSource { ref table_id } if table_id == "absent"));
    assert_eq!(err.class(), ErrorClass::Configuration);
    assert_untouched(&document, "absent");
}

#[test]
fn missing_chart_kind_leaves_the_table_untouched() {
    for table in [
        sales_table("sales", ""),
        TableElement::new("sales")
            .with_head(TableRow::headers(&["Year", "North"]))
            .with_body_row(TableRow::labeled("2023", &["1"])),
    ] {
        let mut document = InMemoryDocument::new().with_table(table);
        let err = TableChart::initialize(
            &mut document,
            "sales",
            RecordingBackend::new(),
            LifecycleConfig::default(),
        )
        .err()
        .expect("must fail");

        assert!(matches!(err, ChartError::MissingChartKind { .. }));
        assert_untouched(&document, "sales");
    }
}

#[test]
fn unsupported_chart_kind_is_rejected() {
    let mut document = InMemoryDocument::new().with_table(sales_table("sales", "radar"));
    let err = TableChart::initialize(
        &mut document,
        "sales",
        RecordingBackend::new(),
        LifecycleConfig::default(),
    )
    .err()
    .expect("must fail");

    assert!(matches!(err, ChartError::UnsupportedChartKind(ref kind) if kind == "radar"));
    assert_eq!(err.class(), ErrorClass::Configuration);
    assert_untouched(&document, "sales");
}

#[test]
fn tables_without_sections_are_structure_errors() {
    let table = TableElement::new("sales")
        .with_attribute("data-chart-type", "bar")
        .with_head(TableRow::headers(&["Year", "North"]));
    let mut document = InMemoryDocument::new().with_table(table);
    let err = TableChart::initialize(
        &mut document,
        "sales",
        RecordingBackend::new(),
        LifecycleConfig::default(),
    )
    .err()
    .expect("must fail");

    assert_eq!(err.class(), ErrorClass::Structure);
    assert_untouched(&document, "sales");
}

#[test]
fn invalid_lifecycle_config_fails_before_touching_the_document() {
    let mut document = InMemoryDocument::new().with_table(sales_table("sales", "bar"));
    let config = LifecycleConfig::default().with_visibility_threshold(-0.5);
    let result = TableChart::initialize(&mut document, "sales", RecordingBackend::new(), config);

    assert!(result.is_err());
    assert_untouched(&document, "sales");
}

#[test]
fn one_failing_table_does_not_stop_the_others() {
    let mut document = InMemoryDocument::new()
        .with_table(sales_table("revenue", "grouped"))
        .with_table(sales_table("broken", "sparkline"))
        .with_table(share_table("share"));

    let report = initialize_charts(
        &mut document,
        &["revenue", "broken", "missing", "share"],
        LifecycleConfig::default(),
        RecordingBackend::new,
    );

    let ids: Vec<_> = report.charts.iter().map(|c| c.table_id()).collect();
    assert_eq!(ids, ["revenue", "share"]);
    let failed: Vec<_> = report.failures.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(failed, ["broken", "missing"]);

    assert!(
        document
            .surface_anchor(&SurfaceId::for_table("share"))
            .is_some()
    );
    assert!(document.accessibility("broken").is_none());
    assert_eq!(
        report.charts[1].settings().tooltip_format,
        TooltipFormat::Percentages
    );
}

#[test]
fn teardown_releases_observers_of_that_chart_only() {
    let mut document = InMemoryDocument::new()
        .with_table(sales_table("a", "bar"))
        .with_table(sales_table("b", "line"));
    let mut report = initialize_charts(
        &mut document,
        &["a", "b"],
        LifecycleConfig::default(),
        RecordingBackend::new,
    );
    assert!(document.active_subscriptions().is_empty());
    for chart in &mut report.charts {
        chart.handle_event(&mut document, SurfaceEvent::LaidOut, Duration::ZERO);
    }
    assert_eq!(document.active_subscriptions().len(), 2);

    let b = report.charts.pop().expect("chart b");
    b.teardown(&mut document);
    assert_eq!(document.active_subscriptions().len(), 1);
    assert!(document.has_subscription(&SurfaceId::for_table("a"), false));
}
