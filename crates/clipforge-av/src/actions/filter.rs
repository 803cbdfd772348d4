//! Frame-selection filters.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::Result;
use std::path::Path;

/// Selection expression retaining even-indexed frames only.
pub const EVEN_FRAME_SELECT: &str = "select=not(mod(n\\,2))";

/// Drop every odd-indexed frame.
///
/// Frame dropping cannot stream-copy; the result is re-encoded with the
/// dataset's delivery codecs.
pub fn keep_even_frames(input: &Path, output: &Path) -> Result<()> {
    tracing::info!("Retaining even-indexed frames of {}", input.display());

    let ffmpeg = require_tool("ffmpeg")?;
    ToolCommand::new(ffmpeg)
        .arg("-i")
        .arg(input)
        .arg("-vf")
        .arg(EVEN_FRAME_SELECT)
        .arg("-c:v")
        .arg("libx264")
        .arg("-c:a")
        .arg("aac")
        .arg("-y")
        .arg(output)
        .execute()?;

    Ok(())
}
