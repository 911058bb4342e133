// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule validator for commit messages.
//!
//! [`validate`] is a pure function over a message and an immutable
//! [`RuleSet`](crate::config::RuleSet); [`RuleEngine`] adds ignore handling
//! and git input on top of it.

mod builtin;
mod engine;
mod validator;

pub use builtin::{check_rule, validate_header_length, validate_signed_off, Finding};
pub use engine::{validate, validate_message, RuleEngine};
pub use validator::{Violation, ViolationReport};
