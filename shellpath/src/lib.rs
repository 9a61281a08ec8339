#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shellpath
//!
//! Lexical path manipulation for shell-style paths.
//!
//! Paths are plain strings. Operations understand drive letters, UNC shares,
//! and shell virtual drives such as `env:` or `HKLM:`, and never consult the
//! filesystem. The platform rules are carried by an explicit [`PathPolicy`],
//! so Windows and POSIX behaviour can both be used from any host.
//!
//! ## Core Types
//!
//! - [`PathPolicy`] and [`PolicyKind`]: Separator, case and drive rules
//! - [`path`]: Normalizing, joining, relativizing and matching paths
//! - [`PathBuffer`]: A path built up fragment by fragment
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use shellpath::path::{combine, normalize, relative};
//! use shellpath::PathPolicy;
//!
//! let windows = PathPolicy::WINDOWS;
//! assert_eq!(normalize(&windows, "C:/Users/./me/../you"), r"C:\Users\you");
//! assert_eq!(combine(&windows, r"C:\Users\me", r"\Temp"), r"C:\Temp");
//!
//! let posix = PathPolicy::POSIX;
//! assert_eq!(relative(&posix, "/srv/app/logs", "/srv/data"), "../app/logs");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod policy;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathBuffer, PathRelationship};
pub use policy::{PathPolicy, PolicyKind};
