// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Read-only access to commit messages for linting existing history.

mod repo;

pub use repo::{get_commit, get_commit_range, Repository};
