// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::{LintConfig, RuleSet};
use crate::error::Result;
use crate::git;

use super::builtin::check_rule;
use super::validator::ViolationReport;

/// Validate a commit message against a rule set.
///
/// Every enabled rule runs, in declaration order, and all violations are
/// collected. Pure: the same input always yields the same report.
pub fn validate(message: &str, rules: &RuleSet) -> ViolationReport {
    validate_message(&CommitMessage::parse(message), rules)
}

/// Validate an already parsed commit message.
pub fn validate_message(message: &CommitMessage, rules: &RuleSet) -> ViolationReport {
    let mut report = ViolationReport::new(message.header.clone());

    for (name, config) in rules.enabled() {
        if let Some(violation) = check_rule(*name, config, message) {
            report.push(violation);
        }
    }

    report
}

/// Lints commit messages with a loaded configuration.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Whether a message is skipped by the ignore settings.
    pub fn is_ignored(&self, message: &CommitMessage) -> bool {
        (self.config.default_ignores && message.is_default_ignored())
            || self
                .config
                .ignores
                .iter()
                .any(|pattern| pattern.is_match(&message.raw))
    }

    /// Lint a parsed message, honoring ignore settings.
    pub fn lint(&self, message: &CommitMessage) -> ViolationReport {
        if self.is_ignored(message) {
            tracing::debug!("Ignoring message: {}", message.header);
            return ViolationReport::ignored(message.header.clone());
        }

        validate_message(message, &self.config.rules)
    }

    /// Lint a commit message string.
    pub fn lint_str(&self, message: &str) -> ViolationReport {
        self.lint(&CommitMessage::parse(message))
    }

    /// Lint the contents of a git edit file.
    pub fn lint_edit_file(&self, content: &str) -> ViolationReport {
        self.lint(&CommitMessage::from_edit_file(content))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ViolationReport> {
        let (sha, message) = git::get_commit(reference)?;
        let mut report = self.lint_str(&message);
        report.commit_sha = Some(sha);
        Ok(report)
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<ViolationReport>> {
        let commits = git::get_commit_range(range)?;
        tracing::debug!("Checking {} commit(s) in {}", commits.len(), range);

        Ok(commits
            .into_iter()
            .map(|(sha, message)| {
                let mut report = self.lint_str(&message);
                report.commit_sha = Some(sha);
                report
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, RuleName, Severity};

    const SIGNED: &str = "Signed-off-by: A <a@example.com>";

    fn message(header: &str, body: &str) -> String {
        format!("{}\n\n{}", header, body)
    }

    #[test]
    fn test_valid_headers_produce_empty_report() {
        let rules = RuleSet::default();
        for len in 10..=72 {
            let header = format!("fix: {}", "a".repeat(len - 5));
            assert_eq!(header.chars().count(), len);
            let report = validate(&message(&header, SIGNED), &rules);
            assert!(report.is_empty(), "length {} reported {:?}", len, report);
        }
    }

    #[test]
    fn test_header_of_nine_chars() {
        let report = validate(&message("fix: abcd", SIGNED), &RuleSet::default());
        assert_eq!(report.rules(), vec![RuleName::HeaderMinLength]);
    }

    #[test]
    fn test_header_of_seventy_three_chars() {
        let header = format!("feat: {}", "a".repeat(67));
        assert_eq!(header.len(), 73);
        let report = validate(&message(&header, SIGNED), &RuleSet::default());
        assert_eq!(report.rules(), vec![RuleName::HeaderMaxLength]);
    }

    #[test]
    fn test_missing_sign_off() {
        let report = validate(
            &message("feat: add rule validator", "Plain body"),
            &RuleSet::default(),
        );
        assert_eq!(report.rules(), vec![RuleName::SignedOffBy]);
    }

    #[test]
    fn test_short_header_scenario() {
        let report = validate("fix: bug\n\nSigned-off-by: A", &RuleSet::default());
        assert_eq!(report.rules(), vec![RuleName::HeaderMinLength]);
    }

    #[test]
    fn test_max_length_header_scenario() {
        let header = "a".repeat(72);
        let report = validate(&format!("{}\nSigned-off-by: A", header), &RuleSet::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_header_trailing_whitespace_counts() {
        let rules = RuleSet::default();
        let long = format!("{} \n\nSigned-off-by: A", "a".repeat(72));
        assert_eq!(validate(&long, &rules).rules(), vec![RuleName::HeaderMaxLength]);

        assert!(validate("fix: bug  \n\nSigned-off-by: A", &rules).is_empty());
        assert_eq!(
            validate("fix: bug \n\nSigned-off-by: A", &rules).rules(),
            vec![RuleName::HeaderMinLength]
        );
    }

    #[test]
    fn test_never_inverts_header_max_length() {
        let config = parse_config("[rules]\nheader-max-length = [2, \"never\", 72]\n").unwrap();
        assert_eq!(
            validate(&"a".repeat(20), &config.rules).rules(),
            vec![RuleName::HeaderMaxLength]
        );
        assert_eq!(
            validate(&"a".repeat(72), &config.rules).rules(),
            vec![RuleName::HeaderMaxLength]
        );
        assert!(validate(&"a".repeat(73), &config.rules).is_empty());
        assert!(validate(&"a".repeat(80), &config.rules).is_empty());
    }

    #[test]
    fn test_never_inverts_header_min_length() {
        let config = parse_config("[rules]\nheader-min-length = [2, \"never\", 10]\n").unwrap();
        assert_eq!(
            validate(&"a".repeat(20), &config.rules).rules(),
            vec![RuleName::HeaderMinLength]
        );
        assert_eq!(
            validate(&"a".repeat(10), &config.rules).rules(),
            vec![RuleName::HeaderMinLength]
        );
        assert!(validate(&"a".repeat(9), &config.rules).is_empty());
        assert!(validate("fix", &config.rules).is_empty());
    }

    #[test]
    fn test_empty_message() {
        let report = validate("", &RuleSet::default());
        assert_eq!(
            report.rules(),
            vec![RuleName::HeaderMinLength, RuleName::SignedOffBy]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let rules = RuleSet::default();
        let input = "wip\n\nno sign off here";
        assert_eq!(validate(input, &rules), validate(input, &rules));
    }

    #[test]
    fn test_collects_in_declaration_order() {
        let config = parse_config(
            r#"
[rules]
signed-off-by = [1, "always", "Signed-off-by:"]
header-min-length = [2, "always", 10]
"#,
        )
        .unwrap();
        let report = validate("fix", &config.rules);
        assert_eq!(
            report.rules(),
            vec![RuleName::SignedOffBy, RuleName::HeaderMinLength]
        );
        assert_eq!(report.violations[0].severity, Severity::Warning);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_off_rules_are_skipped() {
        let config = parse_config(
            r#"
[rules]
header-min-length = [0, "always", 10]
signed-off-by = [0, "always", "Signed-off-by:"]
"#,
        )
        .unwrap();
        assert!(validate("", &config.rules).is_empty());
    }

    #[test]
    fn test_never_inverts_sign_off() {
        let config = parse_config("[rules]\nsigned-off-by = [2, \"never\", \"Signed-off-by:\"]\n")
            .unwrap();
        assert!(validate("fix: something\n\nplain", &config.rules).is_empty());
        assert_eq!(
            validate("fix: something\n\nSigned-off-by: A", &config.rules).rules(),
            vec![RuleName::SignedOffBy]
        );
    }

    #[test]
    fn test_engine_default_ignores() {
        let engine = RuleEngine::new(LintConfig::default());
        let report = engine.lint_str("Merge branch 'main' into feature/x");
        assert!(report.ignored);
        assert!(report.is_empty());

        let engine = RuleEngine::new(parse_config("default-ignores = false\n").unwrap());
        assert!(!engine.lint_str("Merge branch 'main' into feature/x").ignored);
    }

    #[test]
    fn test_engine_custom_ignores() {
        let engine =
            RuleEngine::new(parse_config("ignores = [\"^chore\\\\(release\\\\)\"]\n").unwrap());
        assert!(engine.lint_str("chore(release): 1.2.0").ignored);
        assert!(!engine.lint_str("chore(deps): bump").ignored);
    }

    #[test]
    fn test_engine_lint_edit_file() {
        let engine = RuleEngine::new(LintConfig::default());
        let content = "feat: add commit linter\n\nSigned-off-by: A\n# Please enter the commit message\n";
        assert!(engine.lint_edit_file(content).is_empty());
    }
}
