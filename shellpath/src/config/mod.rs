//! Configuration system for shellpath.
//!
//! Only two settings exist: which path policy to apply and which home
//! directory to abbreviate as `~`. They are merged from several layers.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SHELLPATH_POLICY`, `SHELLPATH_HOME`)
//! 3. A YAML file (via `ConfigBuilder::with_file`)
//! 4. Built-in defaults (host policy, no home)
//!
//! # Examples
//!
//! ```no_run
//! use shellpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_file(Path::new("shellpath.yaml"))
//!     .build()
//!     .unwrap();
//!
//! let policy = config.path_policy();
//! ```

pub mod builder;
pub mod environment;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use schema::Config;
