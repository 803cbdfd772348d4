//! Downloading from video-hosting sites through yt-dlp.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Container extensions the downloader is known to produce, probed in
/// order when locating its output.
const CONTAINER_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "webm", "avi"];

/// Resolution hint passed to the hosted downloader's format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Up to 2160p.
    #[serde(rename = "4k")]
    Uhd,
    /// Up to 1080p, falling back to the best stream below it.
    #[serde(rename = "1080p")]
    Fhd,
    /// Whatever the site offers as best.
    #[serde(rename = "best")]
    Best,
}

impl Resolution {
    /// The yt-dlp format selector for this hint.
    pub fn format_selector(&self) -> &'static str {
        match self {
            Resolution::Uhd => "best[height<=2160]",
            Resolution::Fhd => "best[height<=1080]/best[height<1080]",
            Resolution::Best => "best",
        }
    }
}

/// Download a hosted video into `dir` and return the produced file.
///
/// The downloader picks the container, so the output template leaves
/// the extension to it and the produced file is located afterwards by
/// probing known extensions.
pub fn download_hosted(
    url: &str,
    dir: &Path,
    stem: &str,
    resolution: Resolution,
) -> Result<PathBuf> {
    let tool = require_tool("yt-dlp")?;
    let template = dir.join(format!("{stem}.%(ext)s"));

    tracing::info!("Downloading hosted video {url}");
    ToolCommand::new(tool)
        .arg("-f")
        .arg(resolution.format_selector())
        .arg("-o")
        .arg(&template)
        .arg(url)
        .execute()?;

    locate_downloaded(dir, stem).ok_or_else(|| {
        Error::transfer(url, "downloader reported success but produced no output file")
    })
}

/// Locate the downloader's output for a given stem.
pub fn locate_downloaded(dir: &Path, stem: &str) -> Option<PathBuf> {
    for ext in CONTAINER_EXTENSIONS {
        let candidate = dir.join(format!("{stem}.{ext}"));
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_selector_mapping() {
        assert_eq!(Resolution::Uhd.format_selector(), "best[height<=2160]");
        assert_eq!(
            Resolution::Fhd.format_selector(),
            "best[height<=1080]/best[height<1080]"
        );
        assert_eq!(Resolution::Best.format_selector(), "best");
    }

    #[test]
    fn locate_downloaded_probes_extensions() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate_downloaded(dir.path(), "bengal"), None);

        std::fs::write(dir.path().join("bengal.webm"), b"x").unwrap();
        assert_eq!(
            locate_downloaded(dir.path(), "bengal"),
            Some(dir.path().join("bengal.webm"))
        );
    }
}
