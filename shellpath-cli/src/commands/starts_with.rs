//! Command to test whether a path lies under a prefix.

use crate::error::CliError;
use crate::utils::{GlobalOptions, Session};
use clap::Args;
use shellpath::path::{starts_with, starts_with_verbatim};

/// Succeed when PATH is PREFIX or lies below it.
///
/// Comparison is component-wise, so `/home/meow` does not start with
/// `/home/me`. Case sensitivity follows the policy.
#[derive(Args)]
pub struct StartsWithCommand {
    /// Path to test
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Leading path to look for
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Compare as written, without resolving `.` and `..`
    #[arg(long)]
    pub verbatim: bool,

    /// Invert the test (fail if PATH starts with PREFIX)
    #[arg(long)]
    pub not: bool,
}

impl StartsWithCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let policy = &session.policy;

        let found = if self.verbatim {
            starts_with_verbatim(policy, &self.path, &self.prefix)
        } else {
            starts_with(policy, &self.path, &self.prefix)
        };

        if found != self.not {
            Ok(())
        } else if self.not {
            Err(CliError::SemanticFailure(format!(
                "{} starts with {}",
                self.path, self.prefix
            )))
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} does not start with {}",
                self.path, self.prefix
            )))
        }
    }
}
