//! Library interface for the shellpath CLI.
//!
//! Exposes the CLI structure for benchmarks, tests and the man-page build.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
