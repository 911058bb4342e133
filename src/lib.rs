// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Commit message rule validator
//!
//! Checks commit messages against an ordered, immutable rule set: header
//! length bounds, a mandatory sign-off trailer, and a handful of optional
//! conventional-commit rules.
//!
//! # Example
//!
//! ```
//! use cmlint::config::{RuleName, RuleSet};
//! use cmlint::rules::validate;
//!
//! let rules = RuleSet::default();
//! let report = validate("fix: bug\n\nSigned-off-by: A", &rules);
//!
//! assert_eq!(report.rules(), vec![RuleName::HeaderMinLength]);
//! assert!(!report.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::{LintConfig, RuleSet};
pub use error::{LintError, Result};
pub use rules::{validate, Violation, ViolationReport};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
