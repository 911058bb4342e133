// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Generate an example configuration file.
///
/// The rules section matches [`RuleSet::default`](super::RuleSet).
pub fn example_config() -> &'static str {
    r#"# cmlint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Skip merge, revert, fixup! and squash! messages
default-ignores = true

# Extra patterns; matching messages are not linted
ignores = []

# Each rule is [severity, applicability, value]
#   severity:      0 = off, 1 = warning, 2 = error
#   applicability: "always", or "never" to invert the rule
[rules]
header-max-length = [2, "always", 72]
header-min-length = [2, "always", 10]
signed-off-by = [2, "always", "Signed-off-by:"]
"#
}

/// Example configuration that also enables the conventional-commit rules.
///
/// Only the type, subject and body rules cmlint implements are included, so
/// this is a subset of commitlint's config-conventional: footer and case
/// rules are absent and severities follow cmlint's defaults.
pub fn conventional_config() -> &'static str {
    r#"# cmlint configuration (conventional commits)
default-ignores = true

[rules]
header-max-length = [2, "always", 72]
header-min-length = [2, "always", 10]
signed-off-by = [2, "always", "Signed-off-by:"]
type-enum = [2, "always", ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]]
type-empty = [2, "never"]
subject-empty = [2, "never"]
subject-full-stop = [2, "never", "."]
body-leading-blank = [1, "always"]
body-max-line-length = [2, "always", 100]
"#
}
