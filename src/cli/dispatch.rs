// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::LintConfig;
use crate::error::{LintError, MessageError, Result, ResultExt};
use crate::rules::{RuleEngine, ViolationReport};
use std::io::Read;
use std::path::Path;

use super::args::{CheckArgs, Cli, Commands, ConfigPreset, InitArgs, MessageSource, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &load_config(&cli)?, args),
        Commands::Rules => run_rules(&cli, &load_config(&cli)?),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Load configuration once, from `--config` or the default locations.
fn load_config(cli: &Cli) -> Result<LintConfig> {
    match &cli.config {
        Some(config_path) => LintConfig::load_from(config_path),
        None => LintConfig::load(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let engine = RuleEngine::new(config.clone());

    let reports = match args.source() {
        MessageSource::File(path) => vec![engine.lint_edit_file(&read_message_file(&path)?)],
        MessageSource::Stdin => vec![engine.lint_str(&read_stdin()?)],
        MessageSource::Commit(reference) => vec![engine.check_commit(&reference)?],
        MessageSource::Range(range) => engine.check_range(&range)?,
    };

    let errors: usize = reports.iter().map(ViolationReport::error_count).sum();
    let warnings: usize = reports.iter().map(ViolationReport::warning_count).sum();

    print_reports(cli, &reports);

    if errors > 0 || (args.strict && warnings > 0) {
        Err(LintError::LintFailed { errors, warnings })
    } else {
        Ok(())
    }
}

fn print_reports(cli: &Cli, reports: &[ViolationReport]) {
    if cli.format == Some(OutputFormat::Json) {
        let json = serde_json::json!({
            "valid": reports.iter().all(ViolationReport::is_valid),
            "reports": reports,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return;
    }

    for report in reports {
        if cli.quiet && report.is_empty() {
            continue;
        }
        report.print();
    }
}

fn read_message_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        LintError::Message(MessageError::ReadFailed {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    String::from_utf8(bytes).map_err(|_| {
        LintError::Message(MessageError::InvalidEncoding {
            source_name: path.display().to_string(),
        })
    })
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content).map_err(|e| {
        LintError::Message(MessageError::ReadFailed {
            source_name: "stdin".to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(content)
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &LintConfig) -> Result<()> {
    if cli.format == Some(OutputFormat::Json) {
        let rules: Vec<_> = config
            .rules
            .iter()
            .map(|(name, rule)| {
                serde_json::json!({
                    "rule": name,
                    "severity": rule.severity,
                    "applicability": rule.applicability,
                    "value": rule.value,
                })
            })
            .collect();
        let json = serde_json::json!({
            "default_ignores": config.default_ignores,
            "ignores": config.ignores.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
            "rules": rules,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
        return Ok(());
    }

    if config.rules.is_empty() {
        println!("No rules configured");
    }
    for (name, rule) in config.rules.iter() {
        let value = rule.value.to_string();
        let line = format!(
            "{:<22} {:<8} {:<7} {}",
            name.as_str(),
            rule.severity.as_str(),
            rule.applicability.as_str(),
            value
        );
        if rule.is_enabled() {
            println!("{}", line.trim_end());
        } else {
            println!("{}", console::style(line.trim_end()).dim());
        }
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("cmlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::{conventional_config, example_config};

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("cmlint.toml");

    if config_path.exists() && !args.force {
        return Err(LintError::WithContext {
            context: "init".to_string(),
            message: "cmlint.toml already exists. Use --force to overwrite.".to_string(),
        });
    }

    let config_content = match args.preset {
        ConfigPreset::Default => example_config(),
        ConfigPreset::Conventional => conventional_config(),
    };

    std::fs::write(config_path, config_content).context("Failed to write cmlint.toml")?;

    println!("✓ Created cmlint.toml");

    Ok(())
}
