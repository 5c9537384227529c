// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for jclint.
//!
//! This module handles loading and parsing the optional `jclint.toml`,
//! which overrides parts of the built-in commit policy.

pub mod default;
mod loader;
mod schema;

pub use default::default_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
