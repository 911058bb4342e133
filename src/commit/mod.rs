// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing.

pub mod message;

pub use message::{CommitMessage, ConventionalHeader};
