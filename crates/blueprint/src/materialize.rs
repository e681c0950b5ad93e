//! Artifact materialization
//!
//! Writes artifacts to disk relative to an explicit root directory. Writes
//! are sequential and fail fast; a file-system error aborts the run with no
//! retry and no rollback of earlier writes.

use crate::artifact::Artifact;
use rescue_core::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes artifacts below a fixed root directory
///
/// The root is explicit so callers never depend on the process working
/// directory.
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    /// Create a materializer rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory artifacts are written under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write one artifact, creating missing parent directories
    ///
    /// Pre-existing content at the target path is discarded unconditionally.
    /// Returns the absolute target path.
    pub fn write(&self, artifact: &Artifact) -> Result<PathBuf> {
        let target = self.root.join(&artifact.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::from(e).with_context(format!("While creating {}", parent.display()))
            })?;
        }

        fs::write(&target, &artifact.content).map_err(|e| {
            Error::from(e).with_context(format!("While writing {}", target.display()))
        })?;

        Ok(target)
    }

    /// Write every artifact in order, failing on the first error
    ///
    /// Returns the written target paths in input order.
    pub fn materialize(&self, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            written.push(self.write(artifact)?);
        }
        Ok(written)
    }

    /// Delete a file below the root if it exists
    ///
    /// Used before materialization when the consuming system caches file
    /// identity rather than content. Returns whether a file was removed.
    pub fn delete_if_exists(&self, path: &Path) -> Result<bool> {
        let target = self.root.join(path);
        if target.exists() {
            fs::remove_file(&target).map_err(|e| {
                Error::from(e).with_context(format!("While deleting {}", target.display()))
            })?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let artifact = Artifact::new("settings.cfg", "root=app");
        materializer.write(&artifact).unwrap();

        let content = fs::read_to_string(dir.path().join("settings.cfg")).unwrap();
        assert_eq!(content, "root=app");
    }

    #[test]
    fn test_write_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let artifact = Artifact::new("nested/dir/file.txt", "content");
        materializer.write(&artifact).unwrap();

        assert!(dir.path().join("nested/dir").is_dir());
        let content = fs::read_to_string(dir.path().join("nested/dir/file.txt")).unwrap();
        assert_eq!(content, "content");
    }

    #[test]
    fn test_write_replaces_existing_content_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        fs::write(
            dir.path().join("build.gradle"),
            "old content that is much longer than the replacement",
        )
        .unwrap();

        let artifact = Artifact::new("build.gradle", "new");
        materializer.write(&artifact).unwrap();

        let content = fs::read_to_string(dir.path().join("build.gradle")).unwrap();
        assert_eq!(content, "new");
    }

    #[test]
    fn test_materialize_returns_paths_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let artifacts = vec![
            Artifact::new("a.txt", "a"),
            Artifact::new("sub/b.txt", "b"),
        ];
        let written = materializer.materialize(&artifacts).unwrap();

        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("a.txt"));
        assert!(written[1].ends_with("sub/b.txt"));
        for path in &written {
            assert!(path.exists());
        }
    }

    #[test]
    fn test_materialize_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        let artifacts = vec![Artifact::new("settings.gradle", "rootProject.name = \"x\"\n")];
        materializer.materialize(&artifacts).unwrap();
        let first = fs::read(dir.path().join("settings.gradle")).unwrap();

        materializer.materialize(&artifacts).unwrap();
        let second = fs::read(dir.path().join("settings.gradle")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_delete_if_exists() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        fs::write(dir.path().join("stale.yml"), "old").unwrap();

        assert!(materializer.delete_if_exists(Path::new("stale.yml")).unwrap());
        assert!(!dir.path().join("stale.yml").exists());
        // second delete is a no-op
        assert!(!materializer.delete_if_exists(Path::new("stale.yml")).unwrap());
    }

    #[test]
    fn test_delete_then_materialize_leaves_only_new_content() {
        let dir = tempfile::tempdir().unwrap();
        let materializer = Materializer::new(dir.path());

        fs::write(dir.path().join("android.yml"), "old workflow").unwrap();

        materializer
            .delete_if_exists(Path::new("android.yml"))
            .unwrap();
        materializer
            .write(&Artifact::new("android.yml", "new workflow"))
            .unwrap();

        let content = fs::read_to_string(dir.path().join("android.yml")).unwrap();
        assert_eq!(content, "new workflow");
    }
}
