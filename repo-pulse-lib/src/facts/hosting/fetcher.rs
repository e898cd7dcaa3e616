use super::client::Client;
use super::issues::count_issues;
use super::releases::ReleaseListing;
use crate::Result;
use crate::facts::{RepoMetrics, RepoSpec};
use ohno::{EnrichableExt, IntoAppError};
use url::Url;

const LOG_TARGET: &str = "   fetcher";

/// Gathers the statistics of one repository from the hosting API.
#[derive(Debug, Clone)]
pub struct MetricsFetcher {
    client: Client,
    api_url: Url,
}

impl MetricsFetcher {
    pub fn new(api_url: Url) -> Result<Self> {
        Ok(Self {
            client: Client::new()?,
            api_url,
        })
    }

    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Fetch the current metrics for a repository.
    ///
    /// The repository details, the releases listing and every issues page are
    /// requested one after the other. Any transport failure, and any decode failure
    /// other than the tolerated single-object releases body, aborts the whole fetch.
    pub async fn fetch(&self, repo_spec: &RepoSpec) -> Result<RepoMetrics> {
        let base_url = repo_spec.base_url(&self.api_url);

        log::info!(target: LOG_TARGET, "Querying hosting API for repository '{repo_spec}'");

        let body = self.client.get(&base_url).await?;
        let mut metrics = serde_json::from_slice::<Option<RepoMetrics>>(&body)
            .into_app_err_with(|| format!("could not decode repository details for '{repo_spec}'"))?
            .unwrap_or_default();

        let releases_url = format!("{base_url}/releases");
        let body = self.client.get(&releases_url).await?;
        let releases =
            ReleaseListing::parse(&body).map_err(|e| e.enrich_with(|| format!("could not load releases for '{repo_spec}'")))?;
        metrics.total_release_downloads = releases.total_downloads();

        log::debug!(target: LOG_TARGET,
            "Repository '{repo_spec}' has {} releases with {} downloads",
            releases.len(),
            metrics.total_release_downloads
        );

        metrics.total_issues = count_issues(&self.client, &base_url)
            .await
            .map_err(|e| e.enrich_with(|| format!("could not count issues for '{repo_spec}'")))?;

        log::debug!(target: LOG_TARGET, "Completed API requests for repository '{repo_spec}'");

        Ok(metrics)
    }
}
