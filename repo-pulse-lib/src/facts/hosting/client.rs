//! GitHub API client
//!
//! Minimal client that fetches raw response bodies from the hosting API.
//! Decoding is left to the caller, since each resource has its own rules
//! for what counts as a usable body.

use crate::Result;
use bytes::Bytes;
use ohno::IntoAppError;

const LOG_TARGET: &str = "    client";
const USER_AGENT: &str = "repo-pulse";

/// Hosting API client
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .into_app_err("could not create HTTP client")?,
        })
    }

    /// Issue a GET request and return the response body.
    ///
    /// A non-success status is logged but is not an error. Only transport
    /// failures and unreadable bodies are reported as errors.
    pub async fn get(&self, url: &str) -> Result<Bytes> {
        log::debug!(target: LOG_TARGET, "GET '{url}'");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .into_app_err_with(|| format!("could not send request to '{url}'"))?;

        let status = resp.status();
        if !status.is_success() {
            log::warn!(target: LOG_TARGET, "'{url}' responded with status {status}");
        }

        let body = resp
            .bytes()
            .await
            .into_app_err_with(|| format!("could not read response body from '{url}'"))?;

        log::debug!(target: LOG_TARGET, "Fetched {} bytes from '{url}'", body.len());

        Ok(body)
    }
}
