// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! A [`RuleSet`] is an ordered mapping from [`RuleName`] to
//! `(severity, applicability, value)`. It is built once at startup and is
//! read-only afterwards.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Enforcement strength of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled and never evaluated.
    Off,
    /// Violations are reported but do not fail the check.
    Warning,
    /// Violations fail the check.
    Error,
}

impl Severity {
    /// Build a severity from its numeric level.
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Severity::Off),
            1 => Some(Severity::Warning),
            2 => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" => Ok(Severity::Off),
            "warning" | "warn" | "1" => Ok(Severity::Warning),
            "error" | "2" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a rule's condition is checked as stated or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }

    /// Turn the outcome of a plain check into a pass/fail verdict.
    ///
    /// `holds` is whether the stated condition is true for the input.
    pub fn passes(&self, holds: bool) -> bool {
        match self {
            Applicability::Always => holds,
            Applicability::Never => !holds,
        }
    }
}

impl FromStr for Applicability {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the value a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// The rule takes no value.
    None,
    /// A non-negative integer length.
    Length,
    /// A string.
    Text,
    /// A list of strings.
    List,
}

/// The closed catalog of supported rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    HeaderMaxLength,
    HeaderMinLength,
    SignedOffBy,
    TypeEnum,
    TypeEmpty,
    SubjectEmpty,
    SubjectFullStop,
    BodyLeadingBlank,
    BodyMaxLineLength,
}

impl RuleName {
    /// Get the configuration key of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::HeaderMinLength => "header-min-length",
            RuleName::SignedOffBy => "signed-off-by",
            RuleName::TypeEnum => "type-enum",
            RuleName::TypeEmpty => "type-empty",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyMaxLineLength => "body-max-line-length",
        }
    }

    /// The value shape this rule expects.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            RuleName::HeaderMaxLength
            | RuleName::HeaderMinLength
            | RuleName::BodyMaxLineLength => ValueKind::Length,
            RuleName::SignedOffBy | RuleName::SubjectFullStop => ValueKind::Text,
            RuleName::TypeEnum => ValueKind::List,
            RuleName::TypeEmpty | RuleName::SubjectEmpty | RuleName::BodyLeadingBlank => {
                ValueKind::None
            }
        }
    }

    /// Get all supported rules.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::HeaderMaxLength,
            RuleName::HeaderMinLength,
            RuleName::SignedOffBy,
            RuleName::TypeEnum,
            RuleName::TypeEmpty,
            RuleName::SubjectEmpty,
            RuleName::SubjectFullStop,
            RuleName::BodyLeadingBlank,
            RuleName::BodyMaxLineLength,
        ]
    }
}

impl FromStr for RuleName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RuleName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleValue {
    None,
    Length(usize),
    Text(String),
    List(Vec<String>),
}

impl RuleValue {
    pub fn as_length(&self) -> Option<usize> {
        match self {
            RuleValue::Length(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RuleValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::None => Ok(()),
            RuleValue::Length(n) => write!(f, "{}", n),
            RuleValue::Text(s) => write!(f, "{:?}", s),
            RuleValue::List(items) => write!(f, "{:?}", items),
        }
    }
}

/// Configuration of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: RuleValue,
}

impl RuleConfig {
    pub fn new(severity: Severity, applicability: Applicability, value: RuleValue) -> Self {
        Self {
            severity,
            applicability,
            value,
        }
    }

    /// Whether the rule takes part in validation.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

/// Ordered, immutable set of configured rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    entries: Vec<(RuleName, RuleConfig)>,
}

impl RuleSet {
    /// Build a rule set from entries in declaration order.
    ///
    /// A rule declared twice keeps its first position and its last setting.
    pub fn new(entries: impl IntoIterator<Item = (RuleName, RuleConfig)>) -> Self {
        let mut ordered: Vec<(RuleName, RuleConfig)> = Vec::new();
        for (name, config) in entries {
            match ordered.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = config,
                None => ordered.push((name, config)),
            }
        }
        Self { entries: ordered }
    }

    /// Iterate over all rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &(RuleName, RuleConfig)> {
        self.entries.iter()
    }

    /// Iterate over rules whose severity is not `off`.
    pub fn enabled(&self) -> impl Iterator<Item = &(RuleName, RuleConfig)> {
        self.entries.iter().filter(|(_, config)| config.is_enabled())
    }

    /// Look up a rule by name.
    pub fn get(&self, name: RuleName) -> Option<&RuleConfig> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, config)| config)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new([
            (
                RuleName::HeaderMaxLength,
                RuleConfig::new(
                    Severity::Error,
                    Applicability::Always,
                    RuleValue::Length(72),
                ),
            ),
            (
                RuleName::HeaderMinLength,
                RuleConfig::new(
                    Severity::Error,
                    Applicability::Always,
                    RuleValue::Length(10),
                ),
            ),
            (
                RuleName::SignedOffBy,
                RuleConfig::new(
                    Severity::Error,
                    Applicability::Always,
                    RuleValue::Text("Signed-off-by:".to_string()),
                ),
            ),
        ])
    }
}

/// The complete, loaded configuration.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Configured rules.
    pub rules: RuleSet,

    /// Skip merge, revert, fixup and squash messages.
    pub default_ignores: bool,

    /// Messages matching any of these are skipped.
    pub ignores: Vec<Regex>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            default_ignores: true,
            ignores: Vec::new(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}
