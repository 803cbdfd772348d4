//! Part discovery by directory-listing reconciliation.
//!
//! Each nested-archive expansion is expected to materialize exactly one
//! new top-level entry in the expansion directory: the part. Discovery
//! compares a listing snapshot taken before the expansion with one taken
//! after, and refuses to guess when the difference is empty or
//! ambiguous.

use crate::{Error, Result};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A directory-listing snapshot, keyed by entry name.
pub type Snapshot = BTreeSet<OsString>;

/// Snapshot a directory's top-level entry names.
pub fn snapshot(dir: &Path) -> Result<Snapshot> {
    let mut names = BTreeSet::new();
    for entry in std::fs::read_dir(dir)? {
        names.insert(entry?.file_name());
    }
    Ok(names)
}

/// Outcome of reconciling a post-expansion listing against the
/// pre-expansion snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// Exactly one new entry appeared: the part.
    Found(PathBuf),
    /// No new entry appeared.
    NotFound,
    /// More than one new entry appeared; the part cannot be identified.
    AmbiguousMultiple(Vec<PathBuf>),
}

impl Discovery {
    /// Resolve to the discovered part path, treating [`NotFound`] and
    /// [`AmbiguousMultiple`] as fatal discovery errors.
    ///
    /// [`NotFound`]: Discovery::NotFound
    /// [`AmbiguousMultiple`]: Discovery::AmbiguousMultiple
    pub fn into_part(self) -> Result<PathBuf> {
        match self {
            Discovery::Found(path) => Ok(path),
            Discovery::NotFound => Err(Error::Discovery(
                "no new entry appeared after expansion".to_string(),
            )),
            Discovery::AmbiguousMultiple(paths) => Err(Error::Discovery(format!(
                "expected one new entry after expansion, found {}: {paths:?}",
                paths.len()
            ))),
        }
    }
}

/// Compare the directory's current listing against a prior snapshot and
/// classify what is new.
pub fn reconcile(dir: &Path, before: &Snapshot) -> Result<Discovery> {
    let after = snapshot(dir)?;
    let mut new_entries: Vec<PathBuf> = after
        .difference(before)
        .map(|name| dir.join(name))
        .collect();

    match new_entries.len() {
        0 => Ok(Discovery::NotFound),
        1 => Ok(Discovery::Found(new_entries.remove(0))),
        _ => Ok(Discovery::AmbiguousMultiple(new_entries)),
    }
}
