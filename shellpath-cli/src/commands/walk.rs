//! Command to resolve a sequence of `cd`-style steps.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use shellpath::PathBuffer;

/// Start at a path and apply each step as `cd` would.
///
/// A rooted step replaces the location so far. Steps are resolved
/// lexically; nothing is looked up on disk. A walk that cancels out prints
/// `.`, and `--parent` exits 1 when the final location has no parent.
#[derive(Args)]
pub struct WalkCommand {
    /// Starting location
    #[arg(value_name = "START")]
    pub start: String,

    /// Steps to apply in order
    #[arg(value_name = "STEP")]
    pub steps: Vec<String>,

    /// Print the parent of the final location instead
    #[arg(long)]
    pub parent: bool,
}

impl WalkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;

        let mut buf = PathBuffer::join(session.policy, &self.start, self.steps.as_slice())?;
        buf.normalize();

        let location = match buf.to_string() {
            rendered if rendered.is_empty() => ".".to_string(),
            rendered => rendered,
        };

        if self.parent {
            let parent = buf.parent();
            if parent.is_empty() {
                return Err(CliError::SemanticFailure(format!(
                    "{location} has no parent"
                )));
            }
            println!("{parent}");
        } else {
            println!("{location}");
        }
        Ok(())
    }
}
