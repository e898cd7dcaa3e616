//! Delta report generation
//!
//! The report compares a freshly fetched [`RepoMetrics`] with a previous snapshot.
//! [`MetricsDelta`] holds the signed differences and the console generator renders
//! them in a fixed, line-oriented layout. Rendering is pure and performs no I/O.

mod console;
mod metrics_delta;

pub use console::generate as generate_console;
pub use metrics_delta::MetricsDelta;

use crate::facts::RepoMetrics;

/// Render the delta report into a new string.
#[must_use]
pub fn format_report(current: &RepoMetrics, previous: &RepoMetrics) -> String {
    let mut output = String::new();

    // Writing into a String cannot fail
    _ = generate_console(current, previous, &mut output);

    output
}
