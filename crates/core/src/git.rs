//! Git operations using command-line git
//!
//! Uses command-line git to avoid dependency issues with git2/libgit2. Every
//! repository handle is bound to an explicit working directory; nothing here
//! reads the process current directory.

use crate::error::{Error, Result};
use crate::process::{run_command_in_dir, CommandResult};
use std::path::{Path, PathBuf};

/// Git repository wrapper
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    /// Open a git repository at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Verify it's a git repo
        let result = run_command_in_dir("git", &["rev-parse", "--git-dir"], path)?;
        if !result.success {
            return Err(Error::not_a_git_repo());
        }

        // Get the working directory root
        let result = run_command_in_dir("git", &["rev-parse", "--show-toplevel"], path)?;
        let workdir = PathBuf::from(result.stdout.trim());

        Ok(Self { workdir })
    }

    /// Wrap a working directory without verifying it is a repository
    ///
    /// Git commands issued through the handle simply fail with a non-zero
    /// exit when the directory turns out not to be one.
    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Get the repository working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get the current branch name
    pub fn current_branch(&self) -> Result<String> {
        let result = run_command_in_dir(
            "git",
            &["rev-parse", "--abbrev-ref", "HEAD"],
            &self.workdir,
        )?;

        Ok(result.stdout.trim().to_string())
    }

    /// Check if there are uncommitted changes
    pub fn has_uncommitted_changes(&self) -> Result<bool> {
        let result = run_command_in_dir("git", &["status", "--porcelain"], &self.workdir)?;

        Ok(!result.stdout.trim().is_empty())
    }

    /// Stage all changes in the working tree (`git add .`)
    ///
    /// Returns the raw command result; callers decide whether a non-zero
    /// exit matters to them.
    pub fn stage_all(&self) -> Result<CommandResult> {
        run_command_in_dir("git", &["add", "."], &self.workdir)
    }

    /// Create a commit with the given message
    pub fn commit(&self, message: &str) -> Result<CommandResult> {
        run_command_in_dir("git", &["commit", "-m", message], &self.workdir)
    }

    /// Force-push a branch to a remote (`git push <remote> <branch> --force`)
    pub fn push_force(&self, remote: &str, branch: &str) -> Result<CommandResult> {
        run_command_in_dir("git", &["push", remote, branch, "--force"], &self.workdir)
    }
}

/// Check if a path is inside a git repository
pub fn is_git_repo(path: &Path) -> bool {
    run_command_in_dir("git", &["rev-parse", "--git-dir"], path)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Get the git root directory for a path
pub fn git_root(path: &Path) -> Option<PathBuf> {
    run_command_in_dir("git", &["rev-parse", "--show-toplevel"], path)
        .ok()
        .filter(|r| r.success)
        .map(|r| PathBuf::from(r.stdout.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::command_exists;

    #[test]
    fn test_is_git_repo_plain_dir() {
        if !command_exists("git") {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_git_repo(dir.path()));
    }

    #[test]
    fn test_open_plain_dir_fails() {
        if !command_exists("git") {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let err = GitRepo::open(dir.path()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotAGitRepo);
    }

    #[test]
    fn test_git_root_plain_dir() {
        if !command_exists("git") {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        assert!(git_root(dir.path()).is_none());
    }
}
