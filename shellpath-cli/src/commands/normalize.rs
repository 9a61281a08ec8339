//! Command to normalize paths.

use crate::error::CliError;
use crate::utils::{print_line, GlobalOptions, Session};
use clap::Args;
use shellpath::path::normalize;

/// Collapse `.` and `..` segments and canonicalize separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize, one result per line
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;

        for path in &self.paths {
            print_line(&normalize(&session.policy, path));
        }
        Ok(())
    }
}
