//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command needs: the global options,
//! configuration loading, and the working and home directories as strings.

use crate::error::CliError;
use shellpath::{Config, ConfigBuilder, PathPolicy, PolicyKind};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path rules chosen on the command line or via `SHELLPATH_POLICY`.
    pub policy: Option<PolicyKind>,

    /// Configuration file to read.
    pub config: Option<PathBuf>,

    /// Directory to resolve relative paths against instead of the process's.
    pub cwd: Option<String>,
}

/// Settings resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Session {
    /// The path policy in effect.
    pub policy: PathPolicy,

    /// The merged configuration.
    pub config: Config,

    cwd: Option<String>,
}

impl Session {
    /// Load configuration and resolve the policy.
    ///
    /// Precedence, highest first: `--policy`, `SHELLPATH_*` variables, the
    /// `--config` file, built-in defaults.
    pub fn load(global: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_configuration(global)?;
        Ok(Self {
            policy: config.path_policy(),
            config,
            cwd: global.cwd.clone(),
        })
    }

    /// The working directory, from `--cwd` or the process.
    pub fn cwd(&self) -> Result<String, CliError> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => current_dir(),
        }
    }

    /// The home directory used for `~` abbreviation.
    pub fn home(&self) -> Option<String> {
        self.config.home.clone().or_else(|| {
            home::home_dir().and_then(|p| p.into_os_string().into_string().ok())
        })
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    if global.policy.is_some() {
        builder = builder.with_config(Config {
            policy: global.policy,
            ..Default::default()
        });
    }

    builder.build().map_err(config_error)
}

/// Every failure while loading configuration is reported as a configuration
/// error, without repeating the library's own "configuration error" label.
fn config_error(e: shellpath::Error) -> CliError {
    match e {
        shellpath::Error::Configuration(inner) => CliError::Config(inner.to_string()),
        other => CliError::Config(other.to_string()),
    }
}

/// The process working directory as a string.
pub fn current_dir() -> Result<String, CliError> {
    env::current_dir()?
        .into_os_string()
        .into_string()
        .map_err(|raw| {
            CliError::InvalidArguments(format!(
                "current directory is not valid UTF-8: {}",
                raw.to_string_lossy()
            ))
        })
}

/// Print one result line unless it is empty.
pub fn print_line(line: &str) {
    if !line.is_empty() {
        println!("{line}");
    }
}
