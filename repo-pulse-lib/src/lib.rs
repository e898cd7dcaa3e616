#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for repo-pulse
//!
//! This library holds all functionality for the repo-pulse tool, which fetches a
//! repository's public statistics from the GitHub API, compares them with a
//! previously saved snapshot, and prints a delta report.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`facts`]: Data collection from the hosting API
//! - [`reports`]: Delta computation and report rendering
//! - [`snapshot`]: Loading and saving metric snapshots

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// The error produced when any step of fetching repository metrics fails.
pub type FetchError = ohno::AppError;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod facts;
#[cfg(not(any(debug_assertions, test)))]
mod facts;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod snapshot;
#[cfg(not(any(debug_assertions, test)))]
mod snapshot;

pub use crate::commands::{Host, run};
