//! Reading and writing metric snapshots as JSON documents.

use super::path_utils::sanitize_path_component;
use crate::Result;
use crate::facts::RepoMetrics;
use chrono::{DateTime, TimeZone};
use ohno::IntoAppError;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const LOG_TARGET: &str = "  snapshot";

/// Format of the timestamp embedded in snapshot file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Load a snapshot from a file
pub fn load(path: impl AsRef<Path>) -> Result<RepoMetrics> {
    let path = path.as_ref();

    let file = File::open(path).into_app_err_with(|| format!("unable to open snapshot file '{}'", path.display()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).into_app_err_with(|| format!("unable to parse snapshot file '{}'", path.display()))
}

/// Load the snapshot to compare against.
///
/// Without a path, or when the file cannot be read or parsed, this yields
/// [`RepoMetrics::ZERO`]. Failures are only logged.
#[must_use]
pub fn load_previous(path: Option<&Path>) -> RepoMetrics {
    let Some(path) = path else {
        log::debug!(target: LOG_TARGET, "No previous snapshot given, comparing against zero");
        return RepoMetrics::ZERO;
    };

    match load(path) {
        Ok(metrics) => {
            log::debug!(target: LOG_TARGET, "Loaded previous snapshot from '{}'", path.display());
            metrics
        }
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Ignoring previous snapshot: {e:#}");
            RepoMetrics::ZERO
        }
    }
}

/// The file a snapshot of `repo` taken at `timestamp` is written to.
///
/// The name has the form `{repo}_metrics_{YYYYMMDD_HHMMSS}.json`.
#[must_use]
pub fn snapshot_path<Tz>(dir: impl AsRef<Path>, repo: &str, timestamp: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    let safe_repo = sanitize_path_component(repo);
    let stamp = timestamp.format(TIMESTAMP_FORMAT);
    dir.as_ref().join(format!("{safe_repo}_metrics_{stamp}.json"))
}

/// Save a snapshot to a file, creating its directory if needed
pub fn save(metrics: &RepoMetrics, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).into_app_err_with(|| format!("unable to create directory '{}'", parent.display()))?;
    }

    let file = File::create(path).into_app_err_with(|| format!("unable to create snapshot file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, metrics).into_app_err_with(|| format!("unable to write snapshot file '{}'", path.display()))?;
    writer
        .flush()
        .into_app_err_with(|| format!("unable to flush snapshot file '{}'", path.display()))?;

    log::debug!(target: LOG_TARGET, "Saved snapshot to '{}'", path.display());

    Ok(())
}
