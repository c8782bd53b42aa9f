pub mod builders;

use std::sync::Once;

use termplan::catalog::Term;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .init();
    });
}

/// 0-based index of the term containing `course`, if any.
pub fn term_index_of(terms: &[Term], course: &str) -> Option<usize> {
    terms.iter().position(|t| t.contains_course(course))
}

/// Course names per term, for compact assertions.
pub fn term_names(terms: &[Term]) -> Vec<Vec<String>> {
    terms
        .iter()
        .map(|t| t.course_names().into_iter().map(str::to_string).collect())
        .collect()
}
