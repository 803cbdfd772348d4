//! # clipforge-av
//!
//! Fetching, archive assembly, and ffmpeg-based processing for dataset
//! video clips.
//!
//! This crate provides the primitives the clipforge pipelines are built
//! from:
//! - Streaming HTTP downloads with byte progress
//! - tar+xz expansion, including nested archives, with deterministic
//!   part ordering
//! - Directory-diff part discovery as an explicit reconciliation step
//! - Hosted-video downloads through yt-dlp
//! - The ffmpeg action set: image-sequence encoding, stream-copy
//!   concatenation and cuts, frame filtering, delivery transcoding
//!
//! Everything is synchronous and blocking. A pipeline run talks to one
//! external process or one remote endpoint at a time, in order.
//!
//! ## Example
//!
//! ```no_run
//! use clipforge_av::{archive, Scratch};
//!
//! let scratch = Scratch::new()?;
//! let top = scratch.file("P2E_S5.tar.xz");
//! clipforge_av::fetch::fetch("https://example.org/P2E_S5.tar.xz", &top)?;
//! archive::expand(&top, scratch.path())?;
//! for nested in archive::nested_archives(scratch.path(), &top)? {
//!     println!("nested part archive: {}", nested.display());
//! }
//! # Ok::<(), clipforge_av::Error>(())
//! ```

pub mod actions;
pub mod archive;
mod command;
pub mod discover;
mod error;
pub mod fetch;
pub mod hosted;
mod scratch;
pub mod tools;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use discover::{reconcile, snapshot, Discovery, Snapshot};
pub use error::{Error, Result};
pub use hosted::{download_hosted, locate_downloaded, Resolution};
pub use scratch::Scratch;
pub use tools::{check_tool, check_tools, require_tool, ToolInfo};
