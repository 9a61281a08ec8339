//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] from defaults, an optional file, the environment and
/// programmatic overrides, in increasing order of precedence.
///
/// # Examples
///
/// ```
/// use shellpath::config::{Config, ConfigBuilder};
/// use shellpath::PolicyKind;
///
/// let config = ConfigBuilder::new()
///     .skip_env()
///     .with_config(Config {
///         policy: Some(PolicyKind::Posix),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.policy, Some(PolicyKind::Posix));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with no file and environment lookups enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a YAML file as the lowest-precedence explicit layer.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    /// Ignore SHELLPATH_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Values that win over every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge the layers and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an environment
    /// variable is invalid, or the merged config fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(path) = &self.file {
            config.merge_from(&Config::load(path)?);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge_from(overrides);
        }

        config.validate()?;
        log::debug!("resolved configuration: {config:?}");
        Ok(config)
    }
}
