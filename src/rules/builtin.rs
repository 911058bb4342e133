// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each check answers whether its stated condition holds and lets the
//! configured [`Applicability`] decide pass or fail, so `never` always means
//! the exact inverse of `always`.

use crate::commit::CommitMessage;
use crate::config::{Applicability, RuleConfig, RuleName, Severity};

use super::validator::Violation;

/// Why a check failed, before a rule name and severity are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub message: String,
    pub suggestion: Option<String>,
}

impl Finding {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the rule identity.
    pub fn into_violation(self, rule: RuleName, severity: Severity) -> Violation {
        Violation {
            rule,
            severity,
            message: self.message,
            suggestion: self.suggestion,
        }
    }
}

/// Evaluate one configured rule against a message.
///
/// Returns `None` when the rule passes or is switched off.
pub fn check_rule(
    rule: RuleName,
    config: &RuleConfig,
    message: &CommitMessage,
) -> Option<Violation> {
    if !config.is_enabled() {
        return None;
    }

    let app = config.applicability;
    let value = &config.value;

    let finding = match rule {
        RuleName::HeaderMaxLength => {
            let max = expect_value(rule, value.as_length())?;
            validate_header_length(&message.header, 0, max, app)
        }
        RuleName::HeaderMinLength => {
            let min = expect_value(rule, value.as_length())?;
            validate_header_length(&message.header, min, usize::MAX, app)
        }
        RuleName::SignedOffBy => {
            let marker = expect_value(rule, value.as_text())?;
            validate_signed_off(message.body.as_slice(), marker, app)
        }
        RuleName::TypeEnum => {
            let allowed = expect_value(rule, value.as_list())?;
            check_type_enum(message, allowed, app)
        }
        RuleName::TypeEmpty => check_type_empty(message, app),
        RuleName::SubjectEmpty => check_subject_empty(message, app),
        RuleName::SubjectFullStop => {
            let stop = expect_value(rule, value.as_text())?;
            check_subject_full_stop(message, stop, app)
        }
        RuleName::BodyLeadingBlank => check_body_leading_blank(message, app),
        RuleName::BodyMaxLineLength => {
            let max = expect_value(rule, value.as_length())?;
            check_body_max_line_length(message, max, app)
        }
    }?;

    tracing::debug!("Rule {} failed: {}", rule, finding.message);
    Some(finding.into_violation(rule, config.severity))
}

/// Rule sets built from files are type-checked at load time; one built in
/// code with the wrong value shape is skipped rather than failing.
fn expect_value<T>(rule: RuleName, value: Option<T>) -> Option<T> {
    if value.is_none() {
        tracing::warn!("Skipping rule {}: value has the wrong type", rule);
    }
    value
}

/// Check a header against the inclusive length range `[min, max]`.
///
/// With `Always` the header fails outside the range; with `Never` it fails
/// inside it. Length is counted in characters.
pub fn validate_header_length(
    header: &str,
    min: usize,
    max: usize,
    applicability: Applicability,
) -> Option<Finding> {
    let len = header.chars().count();
    let within = len >= min && len <= max;

    if applicability.passes(within) {
        return None;
    }

    let finding = match applicability {
        Applicability::Always if len < min => {
            Finding::new(format!(
                "Header is too short: {} characters (min: {})",
                len, min
            ))
            .suggest("Add more detail to the header")
        }
        Applicability::Always => Finding::new(format!(
            "Header is too long: {} characters (max: {})",
            len, max
        ))
        .suggest(format!("Shorten the header to {} characters or less", max)),
        Applicability::Never if max == usize::MAX => Finding::new(format!(
            "Header must be shorter than {} characters: {} characters",
            min, len
        )),
        Applicability::Never if min == 0 => Finding::new(format!(
            "Header must be longer than {} characters: {} characters",
            max, len
        )),
        Applicability::Never => Finding::new(format!(
            "Header length must not be between {} and {}: {} characters",
            min, max, len
        )),
    };

    Some(finding)
}

/// Check that some body line starts with `marker` (or, with `Never`, that
/// none does).
pub fn validate_signed_off<S: AsRef<str>>(
    body: &[S],
    marker: &str,
    applicability: Applicability,
) -> Option<Finding> {
    let present = body.iter().any(|line| line.as_ref().starts_with(marker));

    if applicability.passes(present) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => {
            Finding::new(format!("Message must contain a '{}' line", marker))
                .suggest("Sign off the commit with `git commit -s`")
        }
        Applicability::Never => {
            Finding::new(format!("Message must not contain a '{}' line", marker))
        }
    })
}

/// Check the header type against a list of types.
fn check_type_enum(
    message: &CommitMessage,
    allowed: &[String],
    applicability: Applicability,
) -> Option<Finding> {
    let header = message.conventional();
    if header.commit_type.is_empty() {
        return None;
    }

    let listed = allowed.iter().any(|t| *t == header.commit_type);
    if applicability.passes(listed) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new(format!(
            "Type '{}' is not allowed",
            header.commit_type
        ))
        .suggest(format!("Use one of: {}", allowed.join(", "))),
        Applicability::Never => {
            Finding::new(format!("Type '{}' is forbidden", header.commit_type))
        }
    })
}

/// Check whether the header type is empty.
fn check_type_empty(message: &CommitMessage, applicability: Applicability) -> Option<Finding> {
    let empty = message.conventional().commit_type.is_empty();
    if applicability.passes(empty) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new("Type must be empty"),
        Applicability::Never => Finding::new("Type may not be empty")
            .suggest("Use the form type(scope): subject"),
    })
}

/// Check whether the subject is empty.
fn check_subject_empty(message: &CommitMessage, applicability: Applicability) -> Option<Finding> {
    let empty = message.conventional().subject.is_empty();
    if applicability.passes(empty) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new("Subject must be empty"),
        Applicability::Never => Finding::new("Subject may not be empty"),
    })
}

/// Check whether the subject ends with `stop`.
fn check_subject_full_stop(
    message: &CommitMessage,
    stop: &str,
    applicability: Applicability,
) -> Option<Finding> {
    let subject = message.conventional().subject;
    if subject.is_empty() {
        return None;
    }

    let ends = subject.ends_with(stop);
    if applicability.passes(ends) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new(format!("Subject must end with '{}'", stop)),
        Applicability::Never => Finding::new(format!("Subject may not end with '{}'", stop))
            .suggest(format!("Remove the trailing '{}'", stop)),
    })
}

/// Check whether the body starts with a blank line.
fn check_body_leading_blank(
    message: &CommitMessage,
    applicability: Applicability,
) -> Option<Finding> {
    let first = message.body.first()?;
    let blank = first.trim().is_empty();
    if applicability.passes(blank) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new("Body must have a leading blank line")
            .suggest("Separate the header from the body with an empty line"),
        Applicability::Never => Finding::new("Body may not have a leading blank line"),
    })
}

/// Check every body line against a maximum length.
fn check_body_max_line_length(
    message: &CommitMessage,
    max: usize,
    applicability: Applicability,
) -> Option<Finding> {
    if message.body.is_empty() {
        return None;
    }

    let longest = message
        .body
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let within = longest <= max;
    if applicability.passes(within) {
        return None;
    }

    Some(match applicability {
        Applicability::Always => Finding::new(format!(
            "Body line is too long: {} characters (max: {})",
            longest, max
        ))
        .suggest(format!("Wrap body lines at {} characters", max)),
        Applicability::Never => Finding::new(format!(
            "Body lines must exceed {} characters: longest is {}",
            max, longest
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleValue;

    fn rule(severity: Severity, applicability: Applicability, value: RuleValue) -> RuleConfig {
        RuleConfig::new(severity, applicability, value)
    }

    #[test]
    fn test_header_length_bounds_inclusive() {
        let always = Applicability::Always;
        assert!(validate_header_length(&"a".repeat(10), 10, 72, always).is_none());
        assert!(validate_header_length(&"a".repeat(72), 10, 72, always).is_none());
        assert!(validate_header_length(&"a".repeat(9), 10, 72, always).is_some());
        assert!(validate_header_length(&"a".repeat(73), 10, 72, always).is_some());
    }

    #[test]
    fn test_header_length_never_inverts() {
        let never = Applicability::Never;
        assert!(validate_header_length(&"a".repeat(40), 10, 72, never).is_some());
        assert!(validate_header_length(&"a".repeat(9), 10, 72, never).is_none());
        assert!(validate_header_length(&"a".repeat(73), 10, 72, never).is_none());
    }

    #[test]
    fn test_header_length_messages() {
        let short = validate_header_length("fix", 10, usize::MAX, Applicability::Always).unwrap();
        assert!(short.message.contains("too short"));

        let long = validate_header_length(&"a".repeat(80), 0, 72, Applicability::Always).unwrap();
        assert!(long.message.contains("too long"));
        assert!(long.message.contains("80"));
    }

    #[test]
    fn test_header_length_never_messages_name_the_bound() {
        let never = Applicability::Never;
        let min_zero = validate_header_length("fix: x", 0, usize::MAX, never).unwrap();
        assert!(min_zero.message.contains("shorter than 0"));
        assert!(!min_zero.message.contains(&usize::MAX.to_string()));

        let max = validate_header_length("fix: x", 0, 72, never).unwrap();
        assert!(max.message.contains("longer than 72"));

        let min = validate_header_length(&"a".repeat(20), 10, usize::MAX, never).unwrap();
        assert!(min.message.contains("shorter than 10"));
    }

    #[test]
    fn test_empty_header_fails_min_length() {
        assert!(validate_header_length("", 10, usize::MAX, Applicability::Always).is_some());
    }

    #[test]
    fn test_signed_off() {
        let body = ["", "Some detail", "Signed-off-by: A <a@example.com>"];
        assert!(validate_signed_off(&body, "Signed-off-by:", Applicability::Always).is_none());
        assert!(validate_signed_off(&body, "Signed-off-by:", Applicability::Never).is_some());

        let unsigned = ["", "Some detail"];
        assert!(
            validate_signed_off(&unsigned, "Signed-off-by:", Applicability::Always).is_some()
        );
        assert!(validate_signed_off(&unsigned, "Signed-off-by:", Applicability::Never).is_none());
    }

    #[test]
    fn test_signed_off_requires_line_start() {
        let body = ["Not Signed-off-by: A"];
        assert!(validate_signed_off(&body, "Signed-off-by:", Applicability::Always).is_some());
    }

    #[test]
    fn test_check_rule_off_never_reports() {
        let message = CommitMessage::parse("x");
        let config = rule(Severity::Off, Applicability::Always, RuleValue::Length(10));
        assert!(check_rule(RuleName::HeaderMinLength, &config, &message).is_none());
    }

    #[test]
    fn test_check_rule_carries_severity() {
        let message = CommitMessage::parse("fix: bug");
        let config = rule(Severity::Warning, Applicability::Always, RuleValue::Length(10));
        let violation = check_rule(RuleName::HeaderMinLength, &config, &message).unwrap();
        assert_eq!(violation.rule, RuleName::HeaderMinLength);
        assert_eq!(violation.severity, Severity::Warning);
    }

    #[test]
    fn test_check_rule_wrong_value_is_skipped() {
        let message = CommitMessage::parse("fix: bug");
        let config = rule(
            Severity::Error,
            Applicability::Always,
            RuleValue::Text("10".to_string()),
        );
        assert!(check_rule(RuleName::HeaderMinLength, &config, &message).is_none());
    }

    #[test]
    fn test_type_enum() {
        let allowed = vec!["feat".to_string(), "fix".to_string()];
        let config = rule(
            Severity::Error,
            Applicability::Always,
            RuleValue::List(allowed),
        );

        let ok = CommitMessage::parse("feat: add parser");
        assert!(check_rule(RuleName::TypeEnum, &config, &ok).is_none());

        let bad = CommitMessage::parse("wip: half done");
        let violation = check_rule(RuleName::TypeEnum, &config, &bad).unwrap();
        assert!(violation.message.contains("wip"));

        let untyped = CommitMessage::parse("half done");
        assert!(check_rule(RuleName::TypeEnum, &config, &untyped).is_none());
    }

    #[test]
    fn test_type_and_subject_empty() {
        let never = rule(Severity::Error, Applicability::Never, RuleValue::None);
        let untyped = CommitMessage::parse("update readme");
        assert!(check_rule(RuleName::TypeEmpty, &never, &untyped).is_some());

        let typed = CommitMessage::parse("docs: update readme");
        assert!(check_rule(RuleName::TypeEmpty, &never, &typed).is_none());
        assert!(check_rule(RuleName::SubjectEmpty, &never, &typed).is_none());

        let blank_subject = CommitMessage::parse("docs: ");
        assert!(check_rule(RuleName::SubjectEmpty, &never, &blank_subject).is_some());
    }

    #[test]
    fn test_subject_full_stop() {
        let never = rule(
            Severity::Error,
            Applicability::Never,
            RuleValue::Text(".".to_string()),
        );
        let dotted = CommitMessage::parse("fix: handle input.");
        assert!(check_rule(RuleName::SubjectFullStop, &never, &dotted).is_some());

        let clean = CommitMessage::parse("fix: handle input");
        assert!(check_rule(RuleName::SubjectFullStop, &never, &clean).is_none());
    }

    #[test]
    fn test_body_leading_blank() {
        let always = rule(Severity::Warning, Applicability::Always, RuleValue::None);
        let cramped = CommitMessage::parse("fix: handle input\nbody right away");
        assert!(check_rule(RuleName::BodyLeadingBlank, &always, &cramped).is_some());

        let spaced = CommitMessage::parse("fix: handle input\n\nbody");
        assert!(check_rule(RuleName::BodyLeadingBlank, &always, &spaced).is_none());

        let header_only = CommitMessage::parse("fix: handle input");
        assert!(check_rule(RuleName::BodyLeadingBlank, &always, &header_only).is_none());
    }

    #[test]
    fn test_body_max_line_length() {
        let always = rule(Severity::Error, Applicability::Always, RuleValue::Length(20));
        let long = CommitMessage::parse(&format!("fix: handle input\n\n{}", "b".repeat(21)));
        let violation = check_rule(RuleName::BodyMaxLineLength, &always, &long).unwrap();
        assert!(violation.message.contains("21"));

        let short = CommitMessage::parse("fix: handle input\n\nshort line");
        assert!(check_rule(RuleName::BodyMaxLineLength, &always, &short).is_none());
    }
}
