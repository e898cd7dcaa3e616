mod client;
mod fetcher;
mod issues;
mod releases;

pub use client::Client;
pub use fetcher::MetricsFetcher;
pub use issues::{IssueItem, count_issues};
pub use releases::{Asset, Lenient, Release, ReleaseListing};
