// tests/integration/output.rs

use termplan::{write_catalog, write_schedule};
use termplan_test_utils::builders::{CatalogFileBuilder, CourseConfigBuilder};

fn two_course_catalog() -> termplan::dag::Scheduler {
    CatalogFileBuilder::new()
        .with_unit_limit(4)
        .with_course(CourseConfigBuilder::new("CS101", 3).build())
        .with_course(CourseConfigBuilder::new("CS102", 3).after("CS101").build())
        .build_scheduler()
}

#[test]
fn test_schedule_prints_one_line_per_term() {
    let scheduler = two_course_catalog();
    let terms = scheduler.schedule().unwrap();

    let mut out = Vec::new();
    write_schedule(&terms, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Term 1 (3/4 units): CS101\nTerm 2 (3/4 units): CS102\n"
    );
}

#[test]
fn test_dry_run_lists_courses_and_prerequisites() {
    let scheduler = two_course_catalog();

    let mut out = Vec::new();
    write_catalog(&scheduler, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("unit_limit = 4"));
    assert!(text.contains("courses (2):"));
    assert!(text.contains("  - CS102\n      units: 3\n      after: [\"CS101\"]"));
}
