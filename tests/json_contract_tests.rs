use serde_json::Value;
use table_chart::ChartConfiguration;
use table_chart::api::{
    BuildOptions, CHART_CONFIGURATION_JSON_SCHEMA_V1, ChartConfigBuilder, TooltipFormat,
};
use table_chart::core::{CategorySeries, ChartKind, ParsedSeriesData};

fn parse_json(payload: &str) -> Value {
    serde_json::from_str(payload).expect("valid json")
}

fn stacked_config() -> ChartConfiguration {
    let parsed = ParsedSeriesData::MultiSeries {
        labels: vec!["2023".into(), "2024".into()],
        series: vec![
            CategorySeries::new("North", vec![1.0, 2.0]),
            CategorySeries::new("South", vec![3.0, 4.0]),
        ],
    };
    ChartConfigBuilder::default()
        .build(
            &parsed,
            ChartKind::Stacked,
            &BuildOptions::default().with_tooltip_format(TooltipFormat::Percentages),
        )
        .expect("build")
}

#[test]
fn configuration_json_uses_the_chart_engine_shape() {
    let json = parse_json(&stacked_config().to_json_pretty().expect("json"));

    assert_eq!(json["type"], "bar");
    assert_eq!(json["kind"], "stacked");
    assert_eq!(json["data"]["labels"][1], "2024");

    let dataset = &json["data"]["datasets"][0];
    assert_eq!(dataset["label"], "North");
    assert_eq!(dataset["stack"], "stack1");
    assert_eq!(dataset["borderColor"], "#154734");
    assert_eq!(dataset["backgroundColor"]["geometry"], "linear-vertical");
    assert_eq!(dataset["backgroundColor"]["stops"][0]["color"], "#ffb81c");

    let options = &json["options"];
    assert_eq!(options["maintainAspectRatio"], true);
    assert_eq!(options["animation"]["duration"], 1000);
    assert_eq!(options["plugins"]["legend"]["position"], "bottom");
    assert_eq!(options["plugins"]["tooltip"]["format"], "percentages");
    assert_eq!(options["scales"]["y"]["beginAtZero"], true);
    assert_eq!(options["scales"]["x"]["stacked"], true);
}

#[test]
fn optional_fields_are_omitted_for_slices() {
    let parsed = ParsedSeriesData::SingleValue {
        labels: vec!["A".into(), "B".into()],
        values: vec![1.0, 2.0],
    };
    let config = ChartConfigBuilder::default()
        .build(&parsed, ChartKind::Doughnut, &BuildOptions::default())
        .expect("build");
    let json = parse_json(&config.to_json_pretty().expect("json"));

    assert_eq!(json["type"], "doughnut");
    let dataset = json["data"]["datasets"][0].as_object().expect("dataset");
    assert!(!dataset.contains_key("stack"));
    assert!(!dataset.contains_key("fill"));
    assert!(!dataset.contains_key("label"));
    assert_eq!(
        dataset["backgroundColor"].as_array().expect("per-slice").len(),
        2
    );
    assert!(json["options"].get("scales").is_none());
}

#[test]
fn contract_v1_wraps_configuration_with_schema_version() {
    let config = stacked_config();
    let json = parse_json(&config.to_json_contract_v1_pretty().expect("contract"));

    assert_eq!(
        json["schema_version"],
        u64::from(CHART_CONFIGURATION_JSON_SCHEMA_V1)
    );
    assert_eq!(
        json["configuration"],
        parse_json(&config.to_json_pretty().expect("json"))
    );
}
