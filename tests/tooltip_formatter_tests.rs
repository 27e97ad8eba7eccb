use table_chart::api::{TooltipFormat, formatter_for};

#[test]
fn dollars_millions_scales_and_groups() {
    let format = formatter_for("dollars-millions");
    assert_eq!(format(2.0), "$2,000,000");
    assert_eq!(format(0.0), "$0");
    assert_eq!(format(12.3456789), "$12,345,679");
    assert_eq!(format(1_500.0), "$1,500,000,000");
}

#[test]
fn dollars_millions_stay_grouped_beyond_the_i64_range() {
    let format = formatter_for("dollars-millions");
    assert_eq!(format(1e13), "$10,000,000,000,000,000,000");
    assert_eq!(format(-1e13), "-$10,000,000,000,000,000,000");

    let huge = format(1e40);
    let digits = huge.strip_prefix('$').expect("dollar sign");
    let groups: Vec<&str> = digits.split(',').collect();
    assert_eq!(groups.len(), 16);
    assert_eq!(groups[0], "9");
    assert!(groups[1..].iter().all(|group| group.len() == 3));
    assert!(format(-1e40).starts_with("-$9,999,999,999,999,999,9"));
}

#[test]
fn dollars_millions_pass_non_finite_values_through() {
    let format = formatter_for("dollars-millions");
    assert_eq!(format(f64::NAN), "NaN");
    assert_eq!(format(f64::INFINITY), "inf");
    assert_eq!(format(f64::NEG_INFINITY), "-inf");
}

#[test]
fn percentages_append_suffix_to_raw_value() {
    let format = formatter_for("percentages");
    assert_eq!(format(42.0), "42%");
    assert_eq!(format(12.5), "12.5%");
    assert_eq!(format(-3.0), "-3%");
}

#[test]
fn default_renders_raw_value() {
    assert_eq!(formatter_for("unknown-mode")(7.0), "7");
    assert_eq!(TooltipFormat::Raw.format(3.25), "3.25");
    assert_eq!(TooltipFormat::default(), TooltipFormat::Raw);
}

#[test]
fn modes_are_read_from_attribute_text() {
    assert_eq!(
        TooltipFormat::from_mode(" dollars-millions "),
        TooltipFormat::DollarsMillions
    );
    assert_eq!(
        TooltipFormat::from_mode("percentages"),
        TooltipFormat::Percentages
    );
    assert_eq!(TooltipFormat::from_mode("Percentages"), TooltipFormat::Raw);
}

#[test]
fn tooltip_format_round_trips_through_serde_and_tolerates_unknown_modes() {
    let json = serde_json::to_string(&TooltipFormat::DollarsMillions).expect("serialize");
    assert_eq!(json, "\"dollars-millions\"");

    let known: TooltipFormat = serde_json::from_str("\"percentages\"").expect("deserialize");
    assert_eq!(known, TooltipFormat::Percentages);
    let unknown: TooltipFormat = serde_json::from_str("\"euros\"").expect("deserialize");
    assert_eq!(unknown, TooltipFormat::Raw);
}
