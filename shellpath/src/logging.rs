//! Logging infrastructure for shellpath.
//!
//! The library reports its decisions through the `log` facade. This module
//! provides the stderr backend used by the command-line tool: a [`Logger`]
//! with three verbosity levels that implements [`log::Log`], and
//! [`init_logger`] to pick the level from flags or the environment.

use std::env;
use std::fmt;

use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`] when no flag is given.
pub const LOG_MODE_ENV: &str = "SHELLPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use shellpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including the library's debug and trace records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `quiet`, `normal` or
    /// `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shellpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// A stderr logger that backs the `log` facade.
///
/// Messages are prefixed with their upper-case level, e.g.
/// `DEBUG: relative path crosses roots`.
///
/// # Examples
///
/// ```
/// use shellpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("mixed separators in input");
/// logger.debug("not printed below Verbose");
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message unless the level is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Logs a warning message unless the level is Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Logs an informational message at Verbose level.
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Logs a debug message at Verbose level.
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }

    fn emit(&self, level: log::Level, message: &str) {
        if level <= self.level.filter() {
            eprintln!("{}: {message}", level.as_str().to_uppercase());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Selects a log level from CLI flags and the environment.
///
/// Priority: `verbose` flag, `quiet` flag, then [`LOG_MODE_ENV`], then
/// Normal. An unparsable environment value is ignored.
#[must_use]
pub fn select_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|value| LogLevel::parse(&value).ok())
        .unwrap_or(LogLevel::Normal)
}

/// Installs a [`Logger`] as the global `log` backend.
///
/// Returns the selected level. Only the first call installs a logger; the
/// level chosen then sticks, and later calls leave both the installed logger
/// and the max level alone.
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = select_level(verbose, quiet);
    match log::set_boxed_logger(Box::new(Logger::new(level))) {
        Ok(()) => log::set_max_level(level.filter()),
        Err(_) => log::debug!("a logger is already installed; keeping its level ({level} ignored)"),
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_logger_enabled_by_level() {
        let quiet = Logger::new(LogLevel::Quiet);
        let normal = Logger::default();
        let verbose = Logger::new(LogLevel::Verbose);

        let warn = Metadata::builder().level(log::Level::Warn).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();

        assert!(!quiet.enabled(&warn));
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&debug));
        assert!(verbose.enabled(&debug));
        assert_eq!(normal.level(), LogLevel::Normal);
    }

    #[test]
    #[serial]
    fn test_second_init_keeps_first_level() {
        with_log_mode(None, || {
            init_logger(false, true);
            let installed = log::max_level();

            assert_eq!(init_logger(true, false), LogLevel::Verbose);
            assert_eq!(log::max_level(), installed);
        });
    }

    #[test]
    #[serial]
    fn test_select_level_flags_win() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(select_level(true, false), LogLevel::Verbose);
            assert_eq!(select_level(true, true), LogLevel::Verbose);
            assert_eq!(select_level(false, true), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_select_level_from_env() {
        with_log_mode(Some("verbose"), || {
            assert_eq!(select_level(false, false), LogLevel::Verbose);
        });
        with_log_mode(Some("nonsense"), || {
            assert_eq!(select_level(false, false), LogLevel::Normal);
        });
        with_log_mode(None, || {
            assert_eq!(select_level(false, false), LogLevel::Normal);
        });
    }
}
