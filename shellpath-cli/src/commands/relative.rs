//! Command to compute a relative path.

use crate::error::CliError;
use crate::utils::{print_line, GlobalOptions, Session};
use clap::Args;
use shellpath::path::format::relative_from;

/// Express a path relative to a base directory.
///
/// Both arguments are resolved against the working directory first. Paths on
/// different roots come back in normalized absolute form.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to express
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory to measure from (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub base: Option<String>,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let cwd = session.cwd()?;

        let shown = relative_from(&session.policy, &self.path, &cwd, self.base.as_deref());
        print_line(&shown);
        Ok(())
    }
}
