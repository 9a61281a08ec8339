//! Command to render a path for display.

use crate::error::CliError;
use crate::utils::{print_line, GlobalOptions, Session};
use clap::Args;
use log::debug;
use shellpath::path::format::{pretty, relative_from};

/// Render a path the way a prompt or listing would show it.
#[derive(Args)]
pub struct FormatCommand {
    /// Path to render
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory the rendering is relative to (defaults to the working directory)
    #[arg(long, value_name = "DIR")]
    pub relative_to: Option<String>,

    /// Prefer the shorter of relative and absolute forms and abbreviate the home directory as `~`
    #[arg(long)]
    pub pretty: bool,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let cwd = session.cwd()?;
        let base = self.relative_to.as_deref();

        let shown = if self.pretty {
            let home = session.home();
            debug!("formatting {} with home {home:?}", self.path);
            pretty(&session.policy, &self.path, &cwd, base, home.as_deref())
        } else {
            relative_from(&session.policy, &self.path, &cwd, base)
        };

        print_line(&shown);
        Ok(())
    }
}
