//! Environment variable handling for configuration overrides.
//!
//! This module provides support for SHELLPATH_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::Result;
use crate::policy::PolicyKind;

/// Selects the path policy: `windows`, `posix` or `host`.
pub const POLICY_ENV: &str = "SHELLPATH_POLICY";

/// Home directory used for `~` abbreviation.
pub const HOME_ENV: &str = "SHELLPATH_HOME";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use shellpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset and blank variables leave the config alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`](crate::Error::InvalidPolicy) if
    /// `SHELLPATH_POLICY` names no known policy.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(policy) = Self::var(POLICY_ENV) {
            config.policy = Some(policy.parse::<PolicyKind>()?);
        }

        if let Some(home) = Self::var(HOME_ENV) {
            config.home = Some(home);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}
