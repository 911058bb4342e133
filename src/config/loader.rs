// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and rule parsing.

use crate::error::{ConfigError, LintError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::Value;

use super::schema::{
    Applicability, LintConfig, RuleConfig, RuleName, RuleSet, RuleValue, Severity, ValueKind,
};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// On-disk layout before rule entries are checked.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    default_ignores: Option<bool>,
    ignores: Vec<String>,
    rules: Option<toml::Table>,
}

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("cmlint").join("config.toml");
        if xdg_config.is_file() {
            return Some(xdg_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// A `[rules]` table replaces the default rule set; without one the
/// defaults apply.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let raw: RawConfig = toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    let defaults = LintConfig::default();

    let rules = match raw.rules {
        Some(table) => parse_rules(&table)?,
        None => defaults.rules,
    };

    let ignores = raw
        .ignores
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| {
                LintError::Config(ConfigError::InvalidValue {
                    key: "ignores".to_string(),
                    message: format!("'{}': {}", pattern, e),
                })
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let config = LintConfig {
        rules,
        default_ignores: raw.default_ignores.unwrap_or(defaults.default_ignores),
        ignores,
    };

    tracing::debug!(
        "Loaded {} rule(s), {} ignore pattern(s)",
        config.rules.len(),
        config.ignores.len()
    );

    Ok(config)
}

/// Parse a `[rules]` table, keeping the table's declaration order.
pub fn parse_rules(table: &toml::Table) -> Result<RuleSet> {
    let mut entries = Vec::with_capacity(table.len());

    for (key, value) in table {
        let name = key.parse::<RuleName>().map_err(|_| ConfigError::UnknownRule {
            rule: key.clone(),
        })?;
        let config = parse_rule_entry(name, value)?;
        entries.push((name, config));
    }

    Ok(RuleSet::new(entries))
}

/// Parse one `[severity, applicability, value]` entry.
fn parse_rule_entry(name: RuleName, value: &Value) -> Result<RuleConfig> {
    let items = value.as_array().ok_or_else(|| ConfigError::InvalidValue {
        key: name.to_string(),
        message: format!(
            "expected [severity, applicability, value], found {}",
            value.type_str()
        ),
    })?;

    let severity = match items.first() {
        Some(raw) => parse_severity(name, raw)?,
        None => {
            return Err(ConfigError::InvalidValue {
                key: name.to_string(),
                message: "rule entry is empty".to_string(),
            }
            .into())
        }
    };

    let applicability = match items.get(1) {
        Some(raw) => parse_applicability(name, raw)?,
        None => Applicability::Always,
    };

    let rule_value = parse_rule_value(name, items.get(2))?;

    if items.len() > 3 {
        return Err(ConfigError::InvalidValue {
            key: name.to_string(),
            message: format!("expected at most 3 elements, found {}", items.len()),
        }
        .into());
    }

    Ok(RuleConfig::new(severity, applicability, rule_value))
}

fn parse_severity(name: RuleName, raw: &Value) -> Result<Severity> {
    let parsed = match raw {
        Value::Integer(level) => Severity::from_level(*level),
        Value::String(s) => s.parse::<Severity>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ConfigError::InvalidSeverity {
            rule: name.to_string(),
            found: raw.to_string(),
        }
        .into()
    })
}

fn parse_applicability(name: RuleName, raw: &Value) -> Result<Applicability> {
    raw.as_str()
        .and_then(|s| s.parse::<Applicability>().ok())
        .ok_or_else(|| {
            ConfigError::InvalidApplicability {
                rule: name.to_string(),
                found: raw.to_string(),
            }
            .into()
        })
}

fn parse_rule_value(name: RuleName, raw: Option<&Value>) -> Result<RuleValue> {
    let invalid = |message: String| -> LintError {
        ConfigError::InvalidValue {
            key: name.to_string(),
            message,
        }
        .into()
    };

    match (name.value_kind(), raw) {
        (ValueKind::None, None) => Ok(RuleValue::None),
        (ValueKind::None, Some(v)) => Err(invalid(format!("takes no value, found {}", v))),
        (_, None) => Err(ConfigError::MissingValue {
            rule: name.to_string(),
        }
        .into()),
        (ValueKind::Length, Some(Value::Integer(n))) => usize::try_from(*n)
            .map(RuleValue::Length)
            .map_err(|_| invalid(format!("length must be non-negative, found {}", n))),
        (ValueKind::Length, Some(v)) => {
            Err(invalid(format!("expected an integer, found {}", v.type_str())))
        }
        (ValueKind::Text, Some(Value::String(s))) => Ok(RuleValue::Text(s.clone())),
        (ValueKind::Text, Some(v)) => {
            Err(invalid(format!("expected a string, found {}", v.type_str())))
        }
        (ValueKind::List, Some(Value::Array(items))) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid(format!("list items must be strings, found {}", item)))
            })
            .collect::<Result<Vec<_>>>()
            .map(RuleValue::List),
        (ValueKind::List, Some(v)) => {
            Err(invalid(format!("expected a list, found {}", v.type_str())))
        }
    }
}
