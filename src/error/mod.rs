// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for jclint.
//!
//! Rule failures are never errors: they are reported through
//! [`Verdict`](crate::rules::Verdict). The types here cover the host side
//! (configuration, git access, hook management, CLI input).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for jclint operations.
#[derive(Error, Debug)]
pub enum JclError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
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

/// Errors raised while collecting or judging a commit message.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("No commit message given (pass a message, --edit <FILE>, or pipe it on stdin)")]
    NoInput,

    #[error("Commit message rejected: {errors} errors, {warnings} warnings")]
    Rejected { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists and was not installed by jclint: {hook}")]
    AlreadyExists { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for jclint operations.
pub type Result<T> = std::result::Result<T, JclError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| JclError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
