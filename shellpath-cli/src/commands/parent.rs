//! Command to print the parent of a path.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use shellpath::path::parent;

/// Print the parent of a path, exiting 1 when it has none.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;

        let parent = parent(&session.policy, &self.path);
        if parent.is_empty() {
            return Err(CliError::SemanticFailure(format!(
                "{} has no parent",
                self.path
            )));
        }

        println!("{parent}");
        Ok(())
    }
}
