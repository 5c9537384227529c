// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from history for `jclint check`.

mod repo;

pub use repo::{
    get_commit_range, open_repo, read_commit, Repository,
};
