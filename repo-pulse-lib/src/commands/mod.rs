//! Command-line interface and orchestration for repo-pulse
//!
//! This module parses the command line and runs the single operation the tool
//! offers: fetch a repository's current metrics, compare them with a previous
//! snapshot, print the delta report, and save a new snapshot.
//!
//! ## Execution Flow
//!
//! 1. Parse arguments and initialize logging
//! 2. Load the previous snapshot, falling back to the zero record
//! 3. Fetch the current metrics from the hosting API
//! 4. Render the delta report to the host's output
//! 5. Write the current metrics to a timestamped snapshot file
//!
//! All interaction with the process environment goes through [`Host`], so the
//! whole flow can be exercised in tests without touching stdout or exiting.

mod common;
mod host;
mod report;
mod run;

pub use common::{LogLevel, init_logging};
pub use host::Host;
pub use report::{FETCH_ERROR_PREFIX, ReportArgs, process_report};
pub use run::run;
