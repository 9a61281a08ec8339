//! Main entry point for the shellpath CLI.
//!
//! Every subcommand is a thin wrapper over one library operation:
//! - `normalize`, `combine`, `relative`, `parent`: string transformations
//! - `format`: display-oriented rendering with `~` abbreviation
//! - `components`: prefix and component breakdown, as text or JSON
//! - `starts-with`: a predicate reported through the exit code
//! - `walk`: `cd`-style resolution through a path buffer

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = shellpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        policy: cli.policy,
        config: cli.config,
        cwd: cli.cwd,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Combine(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::Components(cmd) => cmd.execute(&global),
        cli::Command::StartsWith(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Walk(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || !matches!(e, error::CliError::SemanticFailure(_)) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
