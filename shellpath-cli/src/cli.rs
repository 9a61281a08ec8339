//! CLI structure and argument parsing.
//!
//! This module defines the top-level CLI structure using clap's derive API.

use crate::commands::{
    CombineCommand, CompletionsCommand, ComponentsCommand, FormatCommand, NormalizeCommand,
    ParentCommand, RelativeCommand, StartsWithCommand, WalkCommand,
};
use clap::{Parser, Subcommand};
use shellpath::PolicyKind;
use std::path::PathBuf;

/// Shell-style path manipulation
#[derive(Parser)]
#[command(name = "shellpath")]
#[command(version, about = "Normalize, join and relativize shell-style paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path rules to apply (windows, posix, host)
    #[arg(long, global = true, env = "SHELLPATH_POLICY", value_name = "POLICY")]
    pub policy: Option<PolicyKind>,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "SHELLPATH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Resolve relative paths against this directory instead of the current one
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Collapse `.` and `..` and canonicalize separators
    Normalize(NormalizeCommand),

    /// Join paths; an absolute operand replaces everything before it
    Combine(CombineCommand),

    /// Express a path relative to a base directory
    Relative(RelativeCommand),

    /// Render a path for display, relative to the working directory
    Format(FormatCommand),

    /// Split a path into its prefix and components
    Components(ComponentsCommand),

    /// Exit 0 if a path starts with a prefix, 1 otherwise
    StartsWith(StartsWithCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Resolve a sequence of `cd`-style steps from a starting path
    Walk(WalkCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_policy_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["shellpath", "--policy", "Windows", "normalize", "a"])
            .unwrap();
        assert_eq!(cli.policy, Some(PolicyKind::Windows));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["shellpath", "--policy", "vms", "normalize", "a"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shellpath", "parent", "/a/b", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Parent(_)));
    }
}
