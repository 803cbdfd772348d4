//! Clip processing actions.
//!
//! Every action wraps one invocation of the external `ffmpeg` binary:
//! - Encoding an image sequence into a video segment
//! - Stream-copy concatenation of ordered segments
//! - Stream-copy cuts by frame range or timestamp range
//! - Even-frame retention
//! - Transcoding to the canonical delivery format

mod concat;
mod cut;
mod filter;
mod finalize;
mod sequence;

pub use concat::concat;
pub use cut::{cut_by_frames, cut_by_time, frame_window};
pub use filter::{keep_even_frames, EVEN_FRAME_SELECT};
pub use finalize::finalize;
pub use sequence::build_segment;
