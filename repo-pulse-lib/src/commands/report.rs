use super::Host;
use super::common::{LogLevel, init_logging};
use crate::Result;
use crate::facts::{DEFAULT_API_URL, MetricsFetcher, RepoMetrics, RepoSpec};
use crate::reports::format_report;
use crate::snapshot;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use clap::Parser;
use std::io::Write;
use url::Url;

const LOG_TARGET: &str = "    report";

/// Printed ahead of any error that stops the metrics from being fetched
pub const FETCH_ERROR_PREFIX: &str = "Error fetching data from GitHub";

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// The owner of the GitHub repository
    #[arg(long, short = 'o', default_value = "octocat", value_name = "OWNER")]
    pub owner: String,

    /// The name of the GitHub repository
    #[arg(long, short = 'r', default_value = "Hello-World", value_name = "REPO")]
    pub repo: String,

    /// Path to the previous metrics file
    #[arg(long, short = 'p', value_name = "PATH")]
    pub previous: Option<Utf8PathBuf>,

    /// Directory where the new metrics file is written
    #[arg(long, default_value = "metrics", value_name = "PATH")]
    pub metrics_dir: Utf8PathBuf,

    /// Root URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_URL, value_name = "URL", env = "REPO_PULSE_API_URL")]
    pub api_url: Url,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

impl ReportArgs {
    /// The previous snapshot to compare against, if one was named.
    ///
    /// An empty path means no snapshot, as if the option was omitted.
    #[must_use]
    pub fn previous_path(&self) -> Option<&Utf8Path> {
        self.previous.as_deref().filter(|path| !path.as_str().is_empty())
    }
}

/// Fetch the current metrics, print the delta report, and save a new snapshot.
///
/// A fetch failure is printed to the output and exits with status 1 without
/// writing a snapshot. Failing to write the snapshot is only logged.
pub async fn process_report<H: Host>(host: &mut H, args: &ReportArgs) -> Result<()> {
    init_logging(args.log_level);

    let timestamp = Local::now();
    let previous = snapshot::load_previous(args.previous_path().map(Utf8Path::as_std_path));

    let (repo_spec, current) = match fetch_current(args).await {
        Ok(fetched) => fetched,
        Err(e) => {
            let _ = writeln!(host.output(), "{FETCH_ERROR_PREFIX}: {e:#}");
            host.exit(1);
            return Err(e);
        }
    };

    let report = format_report(&current, &previous);
    let _ = writeln!(host.output(), "{report}");

    let path = snapshot::snapshot_path(&args.metrics_dir, repo_spec.repo(), &timestamp);
    if let Err(e) = snapshot::save(&current, &path) {
        log::warn!(target: LOG_TARGET, "Could not save metrics snapshot: {e:#}");
    }

    Ok(())
}

async fn fetch_current(args: &ReportArgs) -> Result<(RepoSpec, RepoMetrics)> {
    let repo_spec = RepoSpec::new(&args.owner, &args.repo)?;
    let fetcher = MetricsFetcher::new(args.api_url.clone())?;
    let current = fetcher.fetch(&repo_spec).await?;
    Ok((repo_spec, current))
}
