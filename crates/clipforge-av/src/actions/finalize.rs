//! Transcoding to the canonical delivery format.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::Result;
use std::path::Path;

/// Transcode to the dataset's delivery format: H.264 video, AAC audio,
/// CRF 23, preset medium. Overwrites any existing file at the output
/// path. This is the common tail of every pipeline variant.
pub fn finalize(input: &Path, output: &Path) -> Result<()> {
    tracing::info!("Finalizing {} -> {}", input.display(), output.display());

    let ffmpeg = require_tool("ffmpeg")?;
    ToolCommand::new(ffmpeg)
        .arg("-i")
        .arg(input)
        .arg("-c:v")
        .arg("libx264")
        .arg("-c:a")
        .arg("aac")
        .arg("-preset")
        .arg("medium")
        .arg("-crf")
        .arg("23")
        .arg("-y")
        .arg(output)
        .execute()?;

    Ok(())
}
