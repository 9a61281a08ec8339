//! Command to break a path into its prefix and components.

use crate::error::CliError;
use crate::utils::{print_line, GlobalOptions, Session};
use clap::{Args, ValueEnum};
use serde::Serialize;
use shellpath::path::{components, normalize, Prefix, PrefixKind};

/// Output format for the components command.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Prefix on the first line (when present), then one component per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Split a path into its prefix and components.
#[derive(Args)]
pub struct ComponentsCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Normalize before splitting
    #[arg(long)]
    pub normalize: bool,
}

#[derive(Debug, Serialize)]
struct ComponentsReport<'a> {
    prefix: &'a str,
    kind: &'static str,
    components: Vec<&'a str>,
}

impl<'a> ComponentsReport<'a> {
    fn new(prefix: Prefix<'a>, components: Vec<&'a str>) -> Self {
        Self {
            prefix: prefix.as_str(),
            kind: kind_name(prefix.kind()),
            components,
        }
    }
}

fn kind_name(kind: PrefixKind) -> &'static str {
    match kind {
        PrefixKind::None => "none",
        PrefixKind::Root => "root",
        PrefixKind::Drive => "drive",
        PrefixKind::Unc => "unc",
    }
}

impl ComponentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::load(global)?;
        let policy = &session.policy;

        let path = if self.normalize {
            normalize(policy, &self.path)
        } else {
            self.path.clone()
        };
        let (prefix, parts) = components(policy, &path);
        let report = ComponentsReport::new(prefix, parts);

        match self.format {
            OutputFormat::Text => {
                print_line(report.prefix);
                for part in &report.components {
                    println!("{part}");
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }
        Ok(())
    }
}
