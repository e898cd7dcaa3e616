use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;
use url::Url;

/// Default root of the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Identifies one repository on the hosting platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Box<str>,
    repo: Box<str>,
}

impl RepoSpec {
    pub fn new(owner: &str, repo: &str) -> Result<Self> {
        if owner.is_empty() || repo.is_empty() {
            bail!("invalid repository: empty owner or repo name: '{owner}/{repo}'");
        }

        if owner.contains('/') || repo.contains('/') {
            bail!("invalid repository: owner and repo name must not contain '/': '{owner}/{repo}'");
        }

        Ok(Self {
            owner: Box::from(owner),
            repo: Box::from(repo),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// The base resource URL of this repository under the given API root.
    ///
    /// Sub-resources such as `/issues` and `/releases` are appended to this.
    #[must_use]
    pub fn base_url(&self, api_url: &Url) -> String {
        format!("{}/repos/{}/{}", api_url.as_str().trim_end_matches('/'), self.owner, self.repo)
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
