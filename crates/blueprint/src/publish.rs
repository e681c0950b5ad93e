//! Best-effort publishing of materialized artifacts
//!
//! Publishing is three sequential git steps: stage everything, commit with a
//! message, force-push to a fixed remote branch. It is not a transaction; a
//! failed step does not roll back earlier steps, and step exit codes never
//! fail the run. Only an unspawnable git binary surfaces as an error.
//!
//! The capability is behind the [`Publisher`] trait so callers can be tested
//! against [`RecordingPublisher`] instead of a real repository.

use rescue_core::error::Result;
use rescue_core::git::GitRepo;
use rescue_core::process::CommandResult;
use std::cell::RefCell;
use std::path::PathBuf;

/// One publish step and how it exited
#[derive(Debug, Clone)]
pub struct PublishStep {
    /// Step name: `stage`, `commit`, or `push`
    pub name: &'static str,
    /// Whether the step exited with code 0
    pub success: bool,
    /// Trailing command output, kept for display
    pub detail: Option<String>,
}

impl PublishStep {
    fn from_result(name: &'static str, result: &CommandResult) -> Self {
        let detail = {
            let combined = result.combined_output();
            let trimmed = combined.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        Self {
            name,
            success: result.success,
            detail,
        }
    }
}

/// Outcome of a publish invocation
#[derive(Debug, Clone, Default)]
pub struct PublishReport {
    /// Steps in execution order
    pub steps: Vec<PublishStep>,
}

impl PublishReport {
    /// Whether every step exited with code 0
    pub fn completed(&self) -> bool {
        self.steps.iter().all(|s| s.success)
    }
}

/// The injected publish capability
pub trait Publisher {
    /// Stage all changes, commit with `message`, and force-push
    fn publish(&self, message: &str) -> Result<PublishReport>;
}

/// Publishes through command-line git
pub struct GitPublisher {
    workdir: PathBuf,
    remote: String,
    branch: String,
}

impl GitPublisher {
    /// Create a publisher for a working directory and remote branch
    pub fn new(
        workdir: impl Into<PathBuf>,
        remote: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            workdir: workdir.into(),
            remote: remote.into(),
            branch: branch.into(),
        }
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, message: &str) -> Result<PublishReport> {
        let repo = GitRepo::at(&self.workdir);
        let mut report = PublishReport::default();

        let staged = repo.stage_all()?;
        report.steps.push(PublishStep::from_result("stage", &staged));

        let committed = repo.commit(message)?;
        report
            .steps
            .push(PublishStep::from_result("commit", &committed));

        let pushed = repo.push_force(&self.remote, &self.branch)?;
        report.steps.push(PublishStep::from_result("push", &pushed));

        Ok(report)
    }
}

/// Test double that records commit messages instead of touching git
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    messages: RefCell<Vec<String>>,
}

impl RecordingPublisher {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit messages received so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Publisher for RecordingPublisher {
    fn publish(&self, message: &str) -> Result<PublishReport> {
        self.messages.borrow_mut().push(message.to_string());
        Ok(PublishReport {
            steps: vec![
                PublishStep {
                    name: "stage",
                    success: true,
                    detail: None,
                },
                PublishStep {
                    name: "commit",
                    success: true,
                    detail: None,
                },
                PublishStep {
                    name: "push",
                    success: true,
                    detail: None,
                },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescue_core::process::command_exists;

    #[test]
    fn test_recording_publisher_captures_messages() {
        let publisher = RecordingPublisher::new();

        let report = publisher.publish("Regenerate build configuration").unwrap();
        publisher.publish("Second run").unwrap();

        assert!(report.completed());
        assert_eq!(
            publisher.messages(),
            vec!["Regenerate build configuration", "Second run"]
        );
    }

    #[test]
    fn test_git_publisher_tolerates_failing_steps() {
        if !command_exists("git") {
            return;
        }

        // Not a repository: every step exits non-zero, none of it is an error.
        let dir = tempfile::tempdir().unwrap();
        let publisher = GitPublisher::new(dir.path(), "origin", "main");

        let report = publisher.publish("won't land anywhere").unwrap();

        assert_eq!(report.steps.len(), 3);
        assert!(!report.completed());
    }

    #[test]
    fn test_publish_report_completed_requires_all_steps() {
        let report = PublishReport {
            steps: vec![
                PublishStep {
                    name: "stage",
                    success: true,
                    detail: None,
                },
                PublishStep {
                    name: "commit",
                    success: false,
                    detail: Some("nothing to commit".to_string()),
                },
            ],
        };
        assert!(!report.completed());
    }
}
