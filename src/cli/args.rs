// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jclint - Conventional commit linter for Japanese commit messages
///
/// Enforces `type(scope): 件名` headers with Japanese subject and body text.
#[derive(Parser, Debug)]
#[command(name = "jclint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Conventional commit linter for Japanese commit messages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to lint if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Treat warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message (default command)
    Lint(LintArgs),

    /// Lint commits from git history
    Check(CheckArgs),

    /// Print the effective rule table
    Rules,

    /// List the allowed commit types
    Types,

    /// Manage the commit-msg hook
    Hooks(HooksArgs),

    /// Print version information
    Version,

    /// Initialize jclint configuration
    Init(InitArgs),
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Commit message to lint (reads stdin when omitted)
    #[arg(conflicts_with = "edit")]
    pub message: Option<String>,

    /// Read the message from a file (default: .git/COMMIT_EDITMSG)
    #[arg(
        short,
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = ".git/COMMIT_EDITMSG"
    )]
    pub edit: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range (`from..to`) to check
    #[arg(default_value = "HEAD")]
    pub target: String,
}

/// Arguments for the hooks command.
#[derive(Parser, Debug, Clone)]
pub struct HooksArgs {
    /// Hook action to perform
    #[command(subcommand)]
    pub action: HooksAction,
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HooksAction {
    /// Install the commit-msg hook
    Install {
        /// Replace an existing hook (it is backed up)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall the commit-msg hook
    Uninstall,

    /// Show hook status
    Status,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Where to write the configuration
    #[arg(long, default_value = "jclint.toml")]
    pub path: PathBuf,
}

impl Cli {
    /// Get the effective command, defaulting to Lint if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Lint(LintArgs::default()))
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
        }
    }
}
