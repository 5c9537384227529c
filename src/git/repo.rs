// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, JclError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            JclError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, searching parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                JclError::Git(GitError::NotARepository)
            } else {
                JclError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get the git directory path (.git).
    pub fn git_dir(&self) -> &Path {
        self.inner.path()
    }

    /// Directory git runs hooks from.
    ///
    /// `core.hooksPath` wins when set (relative paths resolve against the
    /// work tree). Otherwise the shared `hooks` directory of the common git
    /// dir, so linked worktrees map to the main repository's hooks.
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let config = self.inner.config().map_err(GitError::from)?;

        match config.get_path("core.hooksPath") {
            Ok(path) if path.is_absolute() => Ok(path),
            Ok(path) => {
                let base = self.inner.workdir().unwrap_or_else(|| self.inner.path());
                Ok(base.join(path))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => {
                Ok(self.inner.commondir().join("hooks"))
            }
            Err(e) => Err(JclError::Git(GitError::from(e))),
        }
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            JclError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            JclError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        Ok(message_of(&commit))
    }

    /// Resolve a reference to its commit id and message in one lookup.
    pub fn read_commit(&self, reference: &str) -> Result<(Oid, String)> {
        let commit = self.get_commit(reference)?;
        Ok((commit.id(), message_of(&commit)))
    }

    /// Get commits in a range, newest first.
    ///
    /// `from..to` walks commits reachable from `to` but not from `from`;
    /// a single reference yields that commit only.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        let Some((from, to)) = range.split_once("..") else {
            return Ok(vec![self.read_commit(range)?]);
        };

        let walk_err = |command: &str, e: git2::Error| {
            JclError::Git(GitError::CommandFailed {
                command: command.to_string(),
                message: e.message().to_string(),
            })
        };

        let to = if to.is_empty() { "HEAD" } else { to };
        let from = self.get_commit(from)?;
        let to = self.get_commit(to)?;

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_err("revwalk", e))?;
        revwalk
            .set_sorting(git2::Sort::TOPOLOGICAL)
            .map_err(|e| walk_err("revwalk.set_sorting", e))?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_err("revwalk.push", e))?;
        revwalk
            .hide(from.id())
            .map_err(|e| walk_err("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_err("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                JclError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, message_of(&commit)));
        }

        Ok(commits)
    }
}

/// Commit message text. Non-UTF-8 bytes are replaced, not dropped.
fn message_of(commit: &git2::Commit<'_>) -> String {
    String::from_utf8_lossy(commit.message_bytes()).into_owned()
}

/// Open the repository from the current directory.
pub fn open_repo() -> Result<Repository> {
    Repository::open_current()
}

/// Resolve a reference to its full SHA and message.
pub fn read_commit(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    let (oid, message) = repo.read_commit(reference)?;
    Ok((oid.to_string(), message))
}

/// Get commits in a range.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open_current()?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
