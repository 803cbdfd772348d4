//! Run-scoped scratch area for pipeline execution.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch area for one pipeline run.
///
/// Holds every intermediate artifact of a run: the fetched archive,
/// expanded parts, encoded segments, and the joined stream. The
/// directory is removed when the value drops, which covers the success
/// and the failure path alike. Only the finalized asset, written
/// outside the scratch area, survives the run.
///
/// # Example
///
/// ```no_run
/// use clipforge_av::Scratch;
///
/// let scratch = Scratch::new()?;
/// let archive = scratch.file("P2E_S5.tar.xz");
/// // ... fetch, expand, encode under scratch.path() ...
/// // dropped here; the directory and its contents are gone
/// # Ok::<(), clipforge_av::Error>(())
/// ```
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    /// Create a new scratch directory.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().map_err(|e| Error::Scratch(e.to_string()))?;
        tracing::debug!("Created scratch directory {}", dir.path().display());
        Ok(Self { dir })
    }

    /// Get the scratch directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a scratch file path with the given name.
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Disarm cleanup and return the directory path, for inspection
    /// after a run.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_file_paths() {
        let scratch = Scratch::new().unwrap();
        let file = scratch.file("part_001.mkv");
        assert!(file.starts_with(scratch.path()));
        assert_eq!(file.file_name().unwrap(), "part_001.mkv");
    }

    #[test]
    fn test_scratch_removed_on_drop() {
        let scratch = Scratch::new().unwrap();
        let path = scratch.path().to_path_buf();
        std::fs::write(scratch.file("leftover.txt"), b"scratch data").unwrap();
        assert!(path.exists());

        drop(scratch);
        assert!(!path.exists());
    }

    #[test]
    fn test_scratch_keep_disarms_cleanup() {
        let scratch = Scratch::new().unwrap();
        let kept = scratch.keep();
        assert!(kept.exists());
        std::fs::remove_dir_all(kept).unwrap();
    }
}
