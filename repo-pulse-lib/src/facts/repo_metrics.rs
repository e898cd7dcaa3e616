use serde::{Deserialize, Serialize};

/// Point-in-time statistics for a single repository.
///
/// The serialized field names match the GitHub repository resource, so the
/// repository endpoint decodes straight into this type. The two computed
/// counters have no API counterpart and keep their own keys in snapshots.
///
/// Any field missing from the input decodes as zero or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoMetrics {
    #[serde(rename = "full_name")]
    pub repository_name: String,

    #[serde(rename = "stargazers_count")]
    pub stars: u64,

    #[serde(rename = "forks_count")]
    pub forks: u64,

    /// As reported by the platform, which counts open pull requests too.
    #[serde(rename = "open_issues_count")]
    pub open_issues: u64,

    #[serde(rename = "subscribers_count")]
    pub watchers: u64,

    /// Issues across the whole history, pull requests excluded.
    #[serde(rename = "TotalIssues")]
    pub total_issues: u64,

    /// Download count summed across every asset of every release.
    #[serde(rename = "TotalReleaseDownloads")]
    pub total_release_downloads: u64,

    /// Passed through exactly as the API returned it.
    #[serde(rename = "updated_at")]
    pub last_updated: String,
}

impl RepoMetrics {
    /// The record used when there is no previous snapshot to compare against.
    pub const ZERO: Self = Self {
        repository_name: String::new(),
        stars: 0,
        forks: 0,
        open_issues: 0,
        watchers: 0,
        total_issues: 0,
        total_release_downloads: 0,
        last_updated: String::new(),
    };
}

impl Default for RepoMetrics {
    fn default() -> Self {
        Self::ZERO
    }
}
