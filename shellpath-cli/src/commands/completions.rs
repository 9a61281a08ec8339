//! Shell completion generation command.
//!
//! Writes a completion script for the chosen shell to stdout and a short
//! installation hint to stderr.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "shellpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# {} completions for {BIN_NAME}", self.shell);
                eprintln!("# Install with:");
                eprintln!("#   {hint}");
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(
            "shellpath completions bash > ~/.local/share/bash-completion/completions/shellpath",
        ),
        Shell::Zsh => Some("shellpath completions zsh > ~/.zsh/completions/_shellpath"),
        Shell::Fish => {
            Some("shellpath completions fish > ~/.config/fish/completions/shellpath.fish")
        }
        Shell::PowerShell => {
            Some("shellpath completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
