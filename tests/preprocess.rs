use brain_insights::FormatError;
use brain_insights::chart::ChartPoint;
use brain_insights::preprocess::{PreprocessOptions, build_visualizations, preprocess_files};
use brain_insights::table::parse_csv_str;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn two_rows_share_one_y_axis_scale() {
    let rows = parse_csv_str("index,Label,t0,t1\n0,A,1,2\n1,B,5,9\n").unwrap();
    let out = build_visualizations(&rows, &PreprocessOptions::default()).unwrap();

    let json = serde_json::to_value(&out).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let charts = entry.as_array().unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0]["type"], "highcharts");
        assert_eq!(charts[0]["data"]["chart"]["type"], "line");
        assert_eq!(charts[0]["data"]["yAxis"]["max"], 19.0);
    }
}

#[test]
fn files_merge_in_argument_order() {
    let out = preprocess_files(
        &[data("line.csv"), data("range.csv")],
        &PreprocessOptions::default(),
    )
    .unwrap();

    assert_eq!(out.len(), 3);
    let line = &out[0].as_ref().unwrap()[0];
    assert_eq!(line.data.title.text, "Line chart for region Left hippocampus");

    let range = &out[2].as_ref().unwrap()[0];
    assert_eq!(
        range.data.series[1].data,
        vec![ChartPoint::Band(0, 1.0, 20.0), ChartPoint::Band(1, 2.0, 12.0)]
    );

    // Global max comes from the range file (20), applied to every chart.
    for chart in out.iter().flatten().flatten() {
        assert_eq!(chart.data.y_axis.max, Some(30.0));
    }
}

#[test]
fn gaps_serialize_as_null() {
    let out = preprocess_files(&[data("range.csv")], &PreprocessOptions::default()).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json[0], serde_json::Value::Null);
    assert_eq!(json[1], serde_json::Value::Null);
    assert_eq!(json[2].as_array().map(Vec::len), Some(1));
}

#[test]
fn header_only_files_have_no_parsable_rows() {
    let err = preprocess_files(&[data("empty.csv")], &PreprocessOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FormatError>(),
        Some(FormatError::NoParsableRows)
    ));
}

#[test]
fn one_missing_file_fails_the_batch() {
    let err = preprocess_files(
        &[data("line.csv"), data("does-not-exist.csv")],
        &PreprocessOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.csv"));
}
