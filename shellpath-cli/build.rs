//! Build script for shellpath-cli.
//!
//! Renders the `shellpath.1` man page into `OUT_DIR/man` with clap_mangen.
//! The command tree is declared here by hand because a build script cannot
//! depend on the crate it builds; keep it in step with src/cli.rs.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn path_arg(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).value_name(value_name).help(help).required(true)
}

fn build_cli() -> Command {
    Command::new("shellpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize, join and relativize shell-style paths")
        .long_about(
            "Lexical path algebra for Windows and POSIX style paths, including drive letters, \
             UNC shares and shell virtual drives such as env:",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("policy")
                .long("policy")
                .help("Path rules to apply (windows, posix, host)")
                .value_name("POLICY")
                .global(true)
                .env("SHELLPATH_POLICY"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (YAML)")
                .value_name("PATH")
                .global(true)
                .env("SHELLPATH_CONFIG"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Resolve relative paths against this directory instead of the current one")
                .value_name("DIR")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Collapse . and .. and canonicalize separators")
                .arg(path_arg("path", "PATH", "Paths to normalize").num_args(1..)),
            Command::new("combine")
                .about("Join paths; an absolute operand replaces everything before it")
                .arg(path_arg("base", "BASE", "Starting path"))
                .arg(path_arg("path", "PATH", "Paths to append").num_args(1..))
                .arg(
                    Arg::new("normalize")
                        .long("normalize")
                        .help("Normalize the joined result")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("relative")
                .about("Express a path relative to a base directory")
                .arg(path_arg("path", "PATH", "Path to express"))
                .arg(
                    Arg::new("base")
                        .long("base")
                        .value_name("DIR")
                        .help("Directory to measure from"),
                ),
            Command::new("format")
                .about("Render a path for display, relative to the working directory")
                .arg(path_arg("path", "PATH", "Path to render"))
                .arg(
                    Arg::new("relative-to")
                        .long("relative-to")
                        .value_name("DIR")
                        .help("Directory the rendering is relative to"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .help("Prefer the shorter form and abbreviate the home directory as ~")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("components")
                .about("Split a path into its prefix and components")
                .arg(path_arg("path", "PATH", "Path to split"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("normalize")
                        .long("normalize")
                        .help("Normalize before splitting")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("starts-with")
                .about("Exit 0 if a path starts with a prefix, 1 otherwise")
                .arg(path_arg("path", "PATH", "Path to test"))
                .arg(path_arg("prefix", "PREFIX", "Leading path to look for"))
                .arg(
                    Arg::new("verbatim")
                        .long("verbatim")
                        .help("Compare as written, without resolving . and ..")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("not")
                        .long("not")
                        .help("Invert the test")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("parent")
                .about("Print the parent of a path")
                .arg(path_arg("path", "PATH", "Path whose parent to print")),
            Command::new("walk")
                .about("Resolve a sequence of cd-style steps from a starting path")
                .arg(path_arg("start", "START", "Starting location"))
                .arg(Arg::new("step").value_name("STEP").num_args(0..))
                .arg(
                    Arg::new("parent")
                        .long("parent")
                        .help("Print the parent of the final location instead")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("shellpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
