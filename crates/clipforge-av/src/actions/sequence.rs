//! Encoding a numbered image sequence into a video segment.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::{Error, Result};
use std::path::Path;

/// Encode a directory of numbered images into one video segment.
///
/// `pattern` is the zero-padded numeric filename pattern of the frames
/// inside `images_dir` (e.g. `%08d.jpg`). The segment is encoded at the
/// given frame rate with the fixed profile used across the dataset:
/// H.264, yuv420p, CRF 23, preset medium. The output's parent directory
/// is created if absent.
pub fn build_segment(images_dir: &Path, pattern: &str, fps: f64, output: &Path) -> Result<()> {
    if !images_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "image directory does not exist: {}",
            images_dir.display()
        )));
    }

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let ffmpeg = require_tool("ffmpeg")?;
    let input_pattern = images_dir.join(pattern);

    tracing::info!(
        "Encoding image sequence {} at {fps} fps",
        input_pattern.display()
    );

    ToolCommand::new(ffmpeg)
        .arg("-y")
        .arg("-f")
        .arg("image2")
        .arg("-r")
        .arg(fps.to_string())
        .arg("-i")
        .arg(&input_pattern)
        .arg("-c:v")
        .arg("libx264")
        .arg("-pix_fmt")
        .arg("yuv420p")
        .arg("-crf")
        .arg("23")
        .arg("-preset")
        .arg("medium")
        .arg(output)
        .execute()?;

    Ok(())
}
