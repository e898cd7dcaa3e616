//! Persistence of metric snapshots
//!
//! A snapshot is a [`RepoMetrics`](crate::facts::RepoMetrics) record serialized as
//! JSON. Each run may load one previous snapshot to compare against, and writes
//! the current record to a new timestamped file for the next run.
//!
//! Loading never fails: a missing or unreadable snapshot simply means there is
//! nothing to compare against, and the zero record is used instead.

mod path_utils;
mod store;

pub use store::{TIMESTAMP_FORMAT, load, load_previous, save, snapshot_path};
