// tests/integration/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use termplan::config::{load_and_validate, CatalogFile};
use termplan::errors::PlannerError;
use termplan_test_utils::builders::{CatalogFileBuilder, CourseConfigBuilder};

fn load(contents: &str) -> Result<CatalogFile, PlannerError> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    load_and_validate(file.path())
}

#[test]
fn test_unknown_prerequisite_returns_config_error() {
    let result = load(
        r#"
[[course]]
name = "A"
units = 3
after = ["NonExistent"]
"#,
    );

    match result {
        Err(PlannerError::ConfigError(msg)) => {
            assert!(msg.contains("unknown prerequisite"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_duplicate_course_returns_duplicate_name() {
    let result = load(
        r#"
[[course]]
name = "A"
units = 3

[[course]]
name = "A"
units = 4
"#,
    );

    match result {
        Err(PlannerError::DuplicateName(name)) => assert_eq!(name, "A"),
        Err(e) => panic!("Expected DuplicateName, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_zero_units_and_zero_limit_are_rejected() {
    let zero_units = load(
        r#"
[[course]]
name = "FREE"
units = 0
"#,
    );
    assert!(matches!(
        zero_units,
        Err(PlannerError::InvalidUnits { ref course, units: 0 }) if course == "FREE"
    ));

    let zero_limit = load(
        r#"
[plan]
unit_limit = 0

[[course]]
name = "A"
units = 1
"#,
    );
    assert!(matches!(zero_limit, Err(PlannerError::InvalidUnitLimit(0))));
}

#[test]
fn test_self_prerequisite_is_rejected() {
    let raw = CatalogFileBuilder::new()
        .with_course(CourseConfigBuilder::new("A", 3).after("A").build())
        .build_raw();
    match CatalogFile::try_from(raw) {
        Err(PlannerError::ConfigError(msg)) => assert!(msg.contains("its own prerequisite")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_malformed_toml_returns_toml_error() {
    let result = load("[[course]]\nname = \"A\"\nunits = \"three\"\n");
    assert!(matches!(result, Err(PlannerError::TomlError(_))));
}

#[test]
fn test_missing_file_returns_io_error() {
    let result = load_and_validate("/definitely/not/here/Termplan.toml");
    assert!(matches!(result, Err(PlannerError::IoError(_))));
}

#[test]
fn test_no_progress_message_names_unplaced_courses() {
    let err = PlannerError::NoProgress {
        term: 3,
        remaining: vec!["THESIS".to_string(), "CAPSTONE".to_string()],
    };
    let msg = err.to_string();
    assert!(msg.contains("term 3"));
    assert!(msg.contains("THESIS, CAPSTONE"));
}
