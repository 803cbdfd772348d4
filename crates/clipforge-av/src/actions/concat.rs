//! Stream-copy concatenation of ordered segments.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Write the concat demuxer manifest: one absolute segment path per
/// line, in the given order.
///
/// The manifest is a temporary file and is deleted when the returned
/// handle drops, error paths included.
fn write_manifest(segments: &[PathBuf]) -> Result<NamedTempFile> {
    let mut manifest = NamedTempFile::new()?;
    for segment in segments {
        let absolute = std::path::absolute(segment)?;
        writeln!(manifest, "file '{}'", absolute.display())?;
    }
    manifest.flush()?;
    Ok(manifest)
}

/// Concatenate segments byte-stream-wise, preserving order exactly.
///
/// Uses the ffmpeg concat demuxer with stream copy; nothing is
/// re-encoded.
pub fn concat(segments: &[PathBuf], output: &Path) -> Result<()> {
    if segments.is_empty() {
        return Err(Error::InvalidInput(
            "no segments to concatenate".to_string(),
        ));
    }

    let ffmpeg = require_tool("ffmpeg")?;
    let manifest = write_manifest(segments)?;

    tracing::info!("Concatenating {} segments", segments.len());

    ToolCommand::new(ffmpeg)
        .arg("-f")
        .arg("concat")
        .arg("-safe")
        .arg("0")
        .arg("-i")
        .arg(manifest.path())
        .arg("-c")
        .arg("copy")
        .arg("-y")
        .arg(output)
        .execute()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_preserves_segment_order() {
        let dir = tempfile::tempdir().unwrap();
        let segments = vec![
            dir.path().join("part_001.mkv"),
            dir.path().join("part_002.mkv"),
            dir.path().join("part_003.mkv"),
        ];

        let manifest = write_manifest(&segments).unwrap();
        let content = std::fs::read_to_string(manifest.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();

        assert_eq!(lines.len(), 3);
        for (line, segment) in lines.iter().zip(&segments) {
            assert_eq!(*line, format!("file '{}'", segment.display()));
        }
    }

    #[test]
    fn manifest_removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let segments = vec![dir.path().join("part_001.mkv")];

        let manifest = write_manifest(&segments).unwrap();
        let path = manifest.path().to_path_buf();
        assert!(path.exists());

        drop(manifest);
        assert!(!path.exists());
    }

    #[test]
    fn concat_rejects_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = concat(&[], &dir.path().join("joined.mkv"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
