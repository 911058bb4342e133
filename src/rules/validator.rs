// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation and report types.

use crate::config::{RuleName, Severity};
use console::{style, Style};
use serde::Serialize;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule that produced the violation.
    pub rule: RuleName,
    /// Severity configured for the rule.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    pub fn new(rule: RuleName, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let (prefix, rule_style) = if self.is_error() {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            rule_style.apply_to(self.rule.as_str()),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Ordered violations found in one commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    /// Commit SHA if an existing commit was linted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    /// Header of the linted message.
    pub header: String,
    /// Whether the message was skipped by an ignore pattern.
    pub ignored: bool,
    /// Violations in rule-declaration order.
    pub violations: Vec<Violation>,
}

impl ViolationReport {
    /// Create an empty report for a message header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Self::default()
        }
    }

    /// A report for a message skipped by an ignore pattern.
    pub fn ignored(header: impl Into<String>) -> Self {
        Self {
            ignored: true,
            ..Self::new(header)
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Error-severity violations.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    /// Warning-severity violations.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Check if the message passed (no error-severity violations).
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Rule names in report order.
    pub fn rules(&self) -> Vec<RuleName> {
        self.violations.iter().map(|v| v.rule).collect()
    }

    /// Print the report to stdout as styled text.
    pub fn print(&self) {
        let status = if self.ignored {
            style("-").dim()
        } else if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                println!("{} {} {}", status, style(short_sha).cyan(), self.header);
            }
            None => println!("{} {}", status, self.header),
        }

        for violation in &self.violations {
            println!("  {}", violation.format());
        }

        if !self.violations.is_empty() {
            println!("  {}", style(self.summary()).dim());
        }
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            return "Ignored".to_string();
        }

        let warnings = self.warning_count();
        if self.is_valid() {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count(),
                warnings
            )
        }
    }
}
