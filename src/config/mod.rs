// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module loads the rule set from a TOML file (or falls back to the
//! built-in defaults) and validates every rule entry at load time.

pub mod default;
mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    parse_rules,
};
pub use schema::*;
