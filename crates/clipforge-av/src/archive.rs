//! Archive expansion (tar + xz) and nested-archive ordering.

use crate::{Error, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use xz2::read::XzDecoder;

/// Expand a tar.xz archive into a destination directory.
///
/// Expanding may deposit further nested archives in the destination;
/// those are expanded by calling this again, once per nested archive.
pub fn expand(archive: &Path, dest: &Path) -> Result<()> {
    tracing::debug!("Expanding {} into {}", archive.display(), dest.display());

    let file = File::open(archive).map_err(|e| Error::expansion(archive, e.to_string()))?;
    let decoder = XzDecoder::new(file);
    let mut tar = tar::Archive::new(decoder);
    tar.unpack(dest)
        .map_err(|e| Error::expansion(archive, e.to_string()))?;

    Ok(())
}

/// List the nested `.tar.xz` archives deposited by a top-level
/// expansion, excluding the top-level archive itself.
///
/// The returned paths are sorted lexicographically by file name. This
/// sort order is the authoritative sequencing for all downstream
/// concatenation, independent of filesystem iteration order.
pub fn nested_archives(dir: &Path, top_level: &Path) -> Result<Vec<PathBuf>> {
    let skip = top_level.file_name();

    let mut found = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(".tar.xz") {
            continue;
        }
        if Some(name.as_os_str()) == skip {
            continue;
        }
        found.push(entry.path());
    }

    found.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    Ok(found)
}
