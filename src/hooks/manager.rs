// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing the commit-msg hook.

use crate::error::{HookError, JclError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

/// Hook file name.
pub const HOOK_NAME: &str = "commit-msg";

/// Marker identifying hooks written by jclint.
const HOOK_MARKER: &str = "# jclint commit-msg hook";

/// Installation state of the commit-msg hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// No hook file.
    Missing,
    /// Hook installed by jclint.
    Installed,
    /// Some other hook occupies the slot.
    Foreign,
}

/// Manager for the commit-msg hook of one repository.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        Self::for_repo(&git::open_repo()?)
    }

    /// Create a hook manager for the hooks directory git uses in `repo`.
    pub fn for_repo(repo: &git::Repository) -> Result<Self> {
        let hooks_dir = repo.hooks_dir()?;
        tracing::debug!("Using hooks directory {:?}", hooks_dir);
        Self::with_dir(hooks_dir)
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir)
                .map_err(|e| install_error(format!("Failed to create hooks directory: {}", e)))?;
        }

        Ok(Self { hooks_dir })
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", HOOK_NAME))
    }

    /// The hook script.
    pub fn script() -> String {
        format!(
            "#!/bin/sh\n{}\n# Generated by jclint v{}\n\nexec jclint lint --edit \"$1\"\n",
            HOOK_MARKER,
            crate::version::VERSION
        )
    }

    /// Install the hook.
    ///
    /// A foreign hook is refused unless `force` is set, in which case it is
    /// moved to `commit-msg.backup`.
    pub fn install(&self, force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if self.status()? == HookStatus::Foreign {
            if !force {
                return Err(JclError::Hook(HookError::AlreadyExists {
                    hook: HOOK_NAME.to_string(),
                }));
            }

            tracing::debug!("Backing up existing hook to {:?}", self.backup_path());
            fs::rename(&hook_path, self.backup_path())
                .map_err(|e| install_error(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, Self::script())
            .map_err(|e| install_error(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)
    }

    /// Uninstall the hook, restoring any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::Missing => return Ok(()),
            HookStatus::Foreign => {
                return Err(JclError::Hook(HookError::RemoveFailed {
                    hook: HOOK_NAME.to_string(),
                    message: "Hook was not installed by jclint".to_string(),
                }))
            }
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path).map_err(|e| {
            JclError::Hook(HookError::RemoveFailed {
                hook: HOOK_NAME.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path)?;
        }

        Ok(())
    }

    /// Get the status of the hook.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();
        if !hook_path.exists() {
            return Ok(HookStatus::Missing);
        }

        let content = fs::read_to_string(&hook_path)?;
        if content.contains(HOOK_MARKER) {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }
}

fn install_error(message: String) -> JclError {
    JclError::Hook(HookError::InstallFailed {
        hook: HOOK_NAME.to_string(),
        message,
    })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_error(format!("Failed to get permissions: {}", e)))?
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_error(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
