use clipforge_av::Resolution;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The per-item parameter table.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemSpec>,
}

impl Catalog {
    /// Look up an item by name.
    pub fn find(&self, name: &str) -> Option<&ItemSpec> {
        self.items.iter().find(|item| item.name == name)
    }
}

/// Immutable configuration record for one dataset item.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemSpec {
    /// Item name, unique within the catalog.
    pub name: String,

    /// Where the source asset comes from.
    pub source: Source,

    /// Dataset directory the final asset is placed in, relative to the
    /// output root.
    pub output_dir: PathBuf,

    /// Final asset file name.
    pub output_name: String,

    /// Declared frame rate, used for frame-range arithmetic and
    /// image-sequence encoding.
    pub fps: f64,

    /// Optional cut applied after the source asset is obtained.
    #[serde(default)]
    pub cut: Option<CutSpec>,

    /// Frame filters applied after the cut, in order.
    #[serde(default)]
    pub filters: Vec<FrameFilter>,
}

impl ItemSpec {
    /// Absolute path of the final asset under an output root.
    pub fn final_path(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.output_dir).join(&self.output_name)
    }
}

/// Source of an item's raw asset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// A compressed archive at a direct HTTP(S) location.
    Archive { url: String, assembly: Assembly },

    /// A video-hosting URL resolved by the external downloader.
    Hosted { url: String, resolution: Resolution },
}

/// How an archive's contents are assembled into one video stream.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum Assembly {
    /// The archive deposits nested archives, each expanding into one
    /// image-sequence part. Parts are ordered by the lexicographic sort
    /// of the nested archive names; `pattern` is the zero-padded frame
    /// filename pattern inside each part.
    NestedParts { pattern: String },

    /// The archive expands directly into a known, explicitly ordered
    /// set of raw video part files.
    FixedParts { parts: Vec<String> },
}

/// Cut range applied to a single-source asset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CutSpec {
    /// Frame range, converted to a time window at the item's fps.
    Frames { start: u64, end: u64 },

    /// Literal `HH:MM:SS` timestamp range.
    Time { start: String, end: String },
}

/// Frame-selection filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameFilter {
    /// Retain even-indexed frames only (re-encodes).
    KeepEvenFrames,
}
