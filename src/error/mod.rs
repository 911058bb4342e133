// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cmlint.
//!
//! Rule violations are not errors: they are collected into a
//! [`ViolationReport`](crate::rules::ViolationReport). The types here cover
//! configuration loading, message input, and git access.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Message input errors
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Lint finished with failing violations
    #[error("Commit message check failed: {errors} error(s), {warnings} warning(s)")]
    LintFailed { errors: usize, warnings: usize },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl LintError {
    /// Process exit code for this error.
    ///
    /// `1` means the linted message(s) failed; `2` means cmlint itself could
    /// not do its job.
    pub fn exit_code(&self) -> i32 {
        match self {
            LintError::LintFailed { .. } => 1,
            _ => 2,
        }
    }
}

/// Configuration-related errors, raised only while loading a rule set.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule '{rule}'")]
    UnknownRule { rule: String },

    #[error("Invalid severity for '{rule}': {found} (expected 0, 1, 2, \"off\", \"warning\" or \"error\")")]
    InvalidSeverity { rule: String, found: String },

    #[error("Invalid applicability for '{rule}': {found} (expected \"always\" or \"never\")")]
    InvalidApplicability { rule: String, found: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Missing required value for '{rule}'")]
    MissingValue { rule: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Errors while obtaining a commit message to lint.
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Failed to read message from {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },

    #[error("Commit message is not valid UTF-8: {source_name}")]
    InvalidEncoding { source_name: String },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
