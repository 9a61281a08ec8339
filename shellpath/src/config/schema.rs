//! Configuration schema definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::{PathPolicy, PolicyKind};

/// Settings read from a YAML file, the environment, or set in code.
///
/// Every field is optional so that layers can be merged; unset fields fall
/// back to built-in behaviour.
///
/// # Examples
///
/// ```
/// use shellpath::config::Config;
/// use shellpath::{PathPolicy, PolicyKind};
///
/// let config = Config::from_yaml_str("policy: windows\nhome: 'C:\\Users\\me'\n").unwrap();
/// assert_eq!(config.policy, Some(PolicyKind::Windows));
/// assert_eq!(config.path_policy(), PathPolicy::WINDOWS);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Which path rules to apply.
    pub policy: Option<PolicyKind>,

    /// Home directory used when abbreviating paths to `~`.
    pub home: Option<String>,
}

impl Config {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for malformed YAML, unknown fields
    /// or an unknown policy name.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Config::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_yaml_str(&contents)
    }

    /// Checks values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `home` is set but blank.
    pub fn validate(&self) -> Result<()> {
        if let Some(home) = &self.home {
            if home.trim().is_empty() {
                return Err(Error::Validation {
                    field: "home".into(),
                    message: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// Overlays every field `other` sets onto `self`.
    pub fn merge_from(&mut self, other: &Config) {
        if other.policy.is_some() {
            self.policy = other.policy;
        }
        if other.home.is_some() {
            self.home.clone_from(&other.home);
        }
    }

    /// The concrete policy, defaulting to the host's.
    #[must_use]
    pub fn path_policy(&self) -> PathPolicy {
        self.policy.unwrap_or_default().policy()
    }
}
