//! Logging setup shared by all commands.

use clap::ValueEnum;

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

impl LogLevel {
    /// The `env_logger` filter for this level, or `None` when logging is off.
    #[must_use]
    pub const fn filter(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Error => Some("error"),
            Self::Warn => Some("warn"),
            Self::Info => Some("info"),
            Self::Debug => Some("debug"),
            Self::Trace => Some("trace"),
        }
    }
}

/// Initialize logger based on log level
///
/// `RUST_LOG` takes precedence over the level when it is set, including when the level is `none`.
pub fn init_logging(log_level: LogLevel) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let Some(filter) = resolve_filter(log_level, rust_log.as_deref()) else {
        return;
    };

    // A logger may already be installed when running several commands in one process
    let _ = env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// The filter to install, or `None` when nothing should be logged.
fn resolve_filter(log_level: LogLevel, rust_log: Option<&str>) -> Option<&str> {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => Some(directives),
        _ => log_level.filter(),
    }
}
