//! Chart file loading tests.

use std::io::Write;
use std::path::Path;

use orgmv::config::{load_chart, ChartError};
use orgmv::domain::{OrgApp, Outcome};
use orgmv::util::testing;
use tempfile::NamedTempFile;

const VALID_CHART: &str = r#"
id = 1
name = "Avery Root"

[[subordinates]]
id = 2
name = "Blake Branch"

[[subordinates.subordinates]]
id = 4
name = "Drew Leaf"

[[subordinates]]
id = 3
name = "Casey Branch"
"#;

fn write_chart(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write chart");
    file
}

#[test]
fn given_valid_toml_when_loading_then_nested_chart_returned() {
    testing::init_test_setup();
    let file = write_chart(VALID_CHART);

    let chart = load_chart(file.path()).unwrap();
    assert_eq!(chart.id, 1);
    assert_eq!(chart.name, "Avery Root");
    assert_eq!(chart.subordinates.len(), 2);
    assert_eq!(chart.subordinates[0].subordinates[0].id, 4);
    assert!(chart.subordinates[1].subordinates.is_empty());
}

#[test]
fn given_loaded_chart_when_moving_then_engine_accepts_it() {
    let file = write_chart(VALID_CHART);
    let chart = load_chart(file.path()).unwrap();

    let mut app = OrgApp::new(&chart).unwrap();
    assert_eq!(app.move_employee(4, 3), Outcome::Applied);

    let result = app.chart();
    assert!(result.subordinates[1].subordinates.iter().any(|e| e.id == 4));
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let result = load_chart(Path::new("does/not/exist.toml"));
    assert!(matches!(result, Err(ChartError::Io { .. })));
}

#[test]
fn given_malformed_toml_when_loading_then_parse_error() {
    let file = write_chart("id = \"not a number\"\nname = 3\n");

    let result = load_chart(file.path());
    assert!(matches!(result, Err(ChartError::Parse { .. })));
}

#[test]
fn given_chart_missing_name_when_loading_then_parse_error() {
    let file = write_chart("id = 1\n");

    let result = load_chart(file.path());
    assert!(matches!(result, Err(ChartError::Parse { .. })));
}
