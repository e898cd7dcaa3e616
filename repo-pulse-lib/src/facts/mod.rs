//! Data collection from the repository hosting API
//!
//! This module gathers the public statistics of a single repository and assembles
//! them into a [`RepoMetrics`] record.
//!
//! # Implementation Model
//!
//! [`MetricsFetcher`] performs three strictly sequential steps against the
//! repository's base resource URL:
//!
//! - **Repository details**: decoded directly into the record (stars, forks, watchers, ...)
//! - **Releases**: decoded as a [`ReleaseListing`], whose asset download counts are summed.
//!   A single-object body such as an API error payload is treated as no releases.
//! - **Issues**: [`count_issues`] walks the paginated issues listing until an empty page,
//!   counting every item that does not carry the pull request marker.
//!
//! Malformed optional fields inside releases are decoded through [`Lenient`] and
//! contribute nothing rather than failing the fetch.

pub mod hosting;
mod repo_metrics;
mod repo_spec;

pub use hosting::{Client, Lenient, MetricsFetcher, ReleaseListing, count_issues};
pub use repo_metrics::RepoMetrics;
pub use repo_spec::{DEFAULT_API_URL, RepoSpec};
