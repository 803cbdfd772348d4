//! Stream-copy cuts by frame range or timestamp range.

use crate::command::ToolCommand;
use crate::tools::require_tool;
use crate::{Error, Result};
use std::path::Path;

/// Convert a frame range into a `(start_seconds, duration_seconds)`
/// window at the declared frame rate.
pub fn frame_window(start_frame: u64, end_frame: u64, fps: f64) -> (f64, f64) {
    let start = start_frame as f64 / fps;
    let duration = (end_frame - start_frame) as f64 / fps;
    (start, duration)
}

/// Cut a video to a frame range, without re-encoding.
pub fn cut_by_frames(
    input: &Path,
    output: &Path,
    start_frame: u64,
    end_frame: u64,
    fps: f64,
) -> Result<()> {
    if fps <= 0.0 {
        return Err(Error::InvalidInput(format!("frame rate must be positive: {fps}")));
    }
    if end_frame <= start_frame {
        return Err(Error::InvalidInput(format!(
            "frame range is empty: {start_frame}..{end_frame}"
        )));
    }

    let (start, duration) = frame_window(start_frame, end_frame, fps);
    tracing::info!("Cutting frames {start_frame}..{end_frame} ({start:.3}s + {duration:.3}s)");

    let ffmpeg = require_tool("ffmpeg")?;
    ToolCommand::new(ffmpeg)
        .arg("-i")
        .arg(input)
        .arg("-ss")
        .arg(start.to_string())
        .arg("-t")
        .arg(duration.to_string())
        .arg("-c")
        .arg("copy")
        .arg("-y")
        .arg(output)
        .execute()?;

    Ok(())
}

/// Cut a video to a literal timestamp range (`HH:MM:SS`), without
/// re-encoding.
pub fn cut_by_time(input: &Path, output: &Path, start: &str, end: &str) -> Result<()> {
    if start.is_empty() || end.is_empty() {
        return Err(Error::InvalidInput("timestamp range is empty".to_string()));
    }

    tracing::info!("Cutting {start}..{end}");

    let ffmpeg = require_tool("ffmpeg")?;
    ToolCommand::new(ffmpeg)
        .arg("-i")
        .arg(input)
        .arg("-ss")
        .arg(start)
        .arg("-to")
        .arg(end)
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
    fn frame_window_matches_fps_arithmetic() {
        let (start, duration) = frame_window(8475, 9474, 25.0);
        assert!((start - 339.0).abs() < 1e-9);
        assert!((duration - 999.0 / 25.0).abs() < 1e-9);
    }

    #[test]
    fn frame_cut_equals_time_cut_within_one_frame() {
        // Cutting frames [start, end) at fps must land on the same
        // window as cutting by start/fps for (end-start)/fps seconds.
        let fps = 30.0;
        let (start, duration) = frame_window(2400, 4740, fps);
        let frames_covered = duration * fps;
        assert!((start * fps - 2400.0).abs() < 1.0);
        assert!((frames_covered - 2340.0).abs() < 1.0);
    }

    #[test]
    fn empty_frame_range_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let result = cut_by_frames(
            &dir.path().join("in.mkv"),
            &dir.path().join("out.mkv"),
            100,
            100,
            30.0,
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
