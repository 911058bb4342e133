// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cmlint - Commit message rule validator
///
/// Checks commit messages against header length and sign-off rules.
#[derive(Parser, Debug)]
#[command(name = "cmlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message rule validator", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Only print failing messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMLINT_CONFIG")]
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
    /// Validate commit messages (default command)
    Check(CheckArgs),

    /// Show the effective rule set
    Rules,

    /// Initialize cmlint configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Message file to check, e.g. .git/COMMIT_EDITMSG ("-" reads stdin)
    #[arg(value_name = "FILE", conflicts_with_all = ["commit", "range"])]
    pub file: Option<PathBuf>,

    /// Check an existing commit
    #[arg(long, value_name = "REV", conflicts_with = "range")]
    pub commit: Option<String>,

    /// Check every commit in a range, e.g. origin/main..HEAD
    #[arg(long, value_name = "RANGE")]
    pub range: Option<String>,

    /// Strict mode: treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration preset
    #[arg(long, value_enum, default_value = "default")]
    pub preset: ConfigPreset,
}

/// Configuration presets for init.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// Header length and sign-off rules
    Default,
    /// Default rules plus conventional commit rules
    Conventional,
}

/// Where the message to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A message file, as written by git for the commit-msg hook.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// An existing commit.
    Commit(String),
    /// A range of existing commits.
    Range(String),
}

impl CheckArgs {
    /// Resolve which input the check command reads.
    pub fn source(&self) -> MessageSource {
        if let Some(ref range) = self.range {
            return MessageSource::Range(range.clone());
        }
        if let Some(ref commit) = self.commit {
            return MessageSource::Commit(commit.clone());
        }
        match self.file {
            Some(ref path) if path.as_os_str() != "-" => MessageSource::File(path.clone()),
            _ => MessageSource::Stdin,
        }
    }
}

impl Cli {
    /// Get the effective command, defaulting to Check if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Check(CheckArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_file() {
        let args = Cli::parse_from(["cmlint", "check", ".git/COMMIT_EDITMSG"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(
                check_args.source(),
                MessageSource::File(PathBuf::from(".git/COMMIT_EDITMSG"))
            );
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_stdin() {
        let args = Cli::parse_from(["cmlint", "check", "-"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(check_args.source(), MessageSource::Stdin);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_check_range() {
        let args = Cli::parse_from(["cmlint", "check", "--range", "HEAD~5..HEAD", "--strict"]);
        if let Some(Commands::Check(check_args)) = args.command {
            assert_eq!(
                check_args.source(),
                MessageSource::Range("HEAD~5..HEAD".to_string())
            );
            assert!(check_args.strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_commit_conflicts_with_file() {
        let result = Cli::try_parse_from(["cmlint", "check", "msg.txt", "--commit", "HEAD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_init_preset() {
        let args = Cli::parse_from(["cmlint", "init", "--preset", "conventional", "--force"]);
        if let Some(Commands::Init(init_args)) = args.command {
            assert_eq!(init_args.preset, ConfigPreset::Conventional);
            assert!(init_args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["cmlint", "--format", "json", "-q", "rules"]);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.quiet);
        assert!(matches!(args.command, Some(Commands::Rules)));
    }

    #[test]
    fn test_default_command() {
        let args = Cli::parse_from(["cmlint"]);
        assert!(args.command.is_none());
        assert!(matches!(args.effective_command(), Commands::Check(_)));
    }
}
