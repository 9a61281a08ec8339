//! Command to join paths.

use crate::error::CliError;
use crate::utils::{print_line, GlobalOptions, Session};
use clap::Args;
use shellpath::path::{combine, normalize};

/// Join paths left to right.
///
/// An absolute operand replaces what came before it; a separator-rooted one
/// keeps the drive of the accumulated path.
#[derive(Args)]
pub struct CombineCommand {
    /// Starting path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Paths to append
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Normalize the joined result
    #[arg(long)]
    pub normalize: bool,
}

impl CombineCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let policy = &session.policy;

        let joined = self
            .paths
            .iter()
            .fold(self.base.clone(), |acc, next| combine(policy, &acc, next));

        if self.normalize {
            print_line(&normalize(policy, &joined));
        } else {
            print_line(&joined);
        }
        Ok(())
    }
}
