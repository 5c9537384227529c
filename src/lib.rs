// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! jclint - Conventional commit linter for Japanese commit messages
//!
//! Validates commit messages against a fixed policy: Conventional Commits
//! headers with a mandatory scope, and subject and body text written in
//! Japanese.
//!
//! # Features
//!
//! - **Rule Engine**: ordered rule table with error/warning/disabled levels
//! - **Japanese Predicates**: `subject-japanese`, `body-japanese`,
//!   `subject-full-stop-japanese`
//! - **Configuration**: per-rule overrides from `jclint.toml`
//! - **Git Integration**: lint single commits or ranges from history
//! - **Git Hooks**: install a `commit-msg` hook without shell tooling
//!
//! # Example
//!
//! ```
//! use jclint::rules::{RuleEngine, RuleName};
//!
//! let engine = RuleEngine::default();
//!
//! let verdict = engine.lint("fix(core): 日本語の件名\n\n日本語の本文");
//! assert!(verdict.is_valid());
//!
//! let verdict = engine.lint("fix(core): English subject\n\n日本語の本文");
//! assert!(verdict.has_failure(RuleName::SubjectJapanese));
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use commit::ParsedCommit;
pub use config::JclConfig;
pub use error::{JclError, Result};
pub use rules::{RuleEngine, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of jclint.
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
