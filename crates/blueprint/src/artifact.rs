//! The artifact model
//!
//! An artifact is a text file identified by its relative path. Content is
//! always replaced in full; there is no merging and no partial update.

use std::path::PathBuf;

/// A text file to be written at a path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Target path, relative to the materialization root
    pub path: PathBuf,
    /// Full file content
    pub content: String,
}

impl Artifact {
    /// Create an artifact
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Wall-clock capture taken once per run
///
/// Embedded into rendered content solely to force a different byte sequence
/// on every invocation, so that downstream consumers that cache on file
/// identity see a change. Runs without a stamp are fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(i64);

impl Stamp {
    /// Capture the current wall-clock time
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }

    /// Create a stamp from unix seconds
    pub fn from_epoch(secs: i64) -> Self {
        Self(secs)
    }

    /// Unix seconds of the capture
    pub fn epoch(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Stamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_new() {
        let artifact = Artifact::new("settings.gradle", "root=app");
        assert_eq!(artifact.path, PathBuf::from("settings.gradle"));
        assert_eq!(artifact.content, "root=app");
    }

    #[test]
    fn test_stamp_display_is_epoch_seconds() {
        let stamp = Stamp::from_epoch(1719237123);
        assert_eq!(stamp.to_string(), "1719237123");
    }

    #[test]
    fn test_stamp_now_is_recent() {
        let stamp = Stamp::now();
        assert!(stamp.epoch() > 1_700_000_000);
    }
}
