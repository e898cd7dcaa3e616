use crate::facts::RepoMetrics;

/// Signed change of every numeric field between two snapshots.
///
/// Values are exact differences: nothing is clamped, and comparing against
/// [`RepoMetrics::ZERO`] yields the current values unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsDelta {
    pub stars: i128,
    pub forks: i128,
    pub watchers: i128,
    pub open_issues: i128,
    pub total_issues: i128,
    pub total_release_downloads: i128,
}

impl MetricsDelta {
    #[must_use]
    pub fn between(current: &RepoMetrics, previous: &RepoMetrics) -> Self {
        Self {
            stars: diff(current.stars, previous.stars),
            forks: diff(current.forks, previous.forks),
            watchers: diff(current.watchers, previous.watchers),
            open_issues: diff(current.open_issues, previous.open_issues),
            total_issues: diff(current.total_issues, previous.total_issues),
            total_release_downloads: diff(current.total_release_downloads, previous.total_release_downloads),
        }
    }
}

fn diff(current: u64, previous: u64) -> i128 {
    i128::from(current) - i128::from(previous)
}
