use crate::catalog::{Assembly, CutSpec, FrameFilter, ItemSpec, Source};
use anyhow::{Context, Result};
use clipforge_av::{actions, archive, discover, fetch, hosted, Scratch};
use std::path::{Path, PathBuf};

/// Executes one dataset item's pipeline inside a run-scoped scratch
/// area.
///
/// Control flows strictly forward: obtain the source asset (archive
/// assembly or hosted download), apply the optional cut and frame
/// filters, then finalize into the dataset directory. Every
/// intermediate lives in the scratch area, which is removed when the
/// run ends, whether it succeeded or aborted.
pub struct ItemPipeline<'a> {
    spec: &'a ItemSpec,
    output_root: &'a Path,
    keep_scratch: bool,
}

impl<'a> ItemPipeline<'a> {
    pub fn new(spec: &'a ItemSpec, output_root: &'a Path) -> Self {
        Self {
            spec,
            output_root,
            keep_scratch: false,
        }
    }

    /// Keep the scratch directory after the run, for inspection.
    pub fn keep_scratch(mut self, keep: bool) -> Self {
        self.keep_scratch = keep;
        self
    }

    /// Run the pipeline to completion, returning the final asset path.
    pub fn run(self) -> Result<PathBuf> {
        let final_dir = self.output_root.join(&self.spec.output_dir);
        std::fs::create_dir_all(&final_dir)
            .with_context(|| format!("Failed to create output directory: {:?}", final_dir))?;
        let final_path = final_dir.join(&self.spec.output_name);

        let scratch = Scratch::new()?;
        tracing::debug!("Scratch directory: {}", scratch.path().display());

        let result = self.run_stages(&scratch, &final_path);

        if self.keep_scratch {
            let kept = scratch.keep();
            println!("Scratch kept at {}", kept.display());
        }

        result
    }

    fn run_stages(&self, scratch: &Scratch, final_path: &Path) -> Result<PathBuf> {
        let source_file = match &self.spec.source {
            Source::Archive { url, assembly } => self.assemble_archive(url, assembly, scratch)?,
            Source::Hosted { url, resolution } => {
                println!("Downloading {url}");
                hosted::download_hosted(url, scratch.path(), &self.spec.name, *resolution)?
            }
        };

        let mut current = match &self.spec.cut {
            Some(CutSpec::Frames { start, end }) => {
                println!("Cutting frames {start}..{end} at {} fps", self.spec.fps);
                let out = scratch.file("cut.mkv");
                actions::cut_by_frames(&source_file, &out, *start, *end, self.spec.fps)?;
                out
            }
            Some(CutSpec::Time { start, end }) => {
                println!("Cutting {start}..{end}");
                let out = scratch.file("cut.mkv");
                actions::cut_by_time(&source_file, &out, start, end)?;
                out
            }
            None => source_file,
        };

        for filter in &self.spec.filters {
            match filter {
                FrameFilter::KeepEvenFrames => {
                    println!("Dropping odd-indexed frames");
                    let out = scratch.file("even.mkv");
                    actions::keep_even_frames(&current, &out)?;
                    current = out;
                }
            }
        }

        println!("Finalizing to {}", final_path.display());
        actions::finalize(&current, final_path)
            .with_context(|| format!("Failed to finalize {}", self.spec.name))?;

        Ok(final_path.to_path_buf())
    }

    fn assemble_archive(
        &self,
        url: &str,
        assembly: &Assembly,
        scratch: &Scratch,
    ) -> Result<PathBuf> {
        let archive_name = archive_file_name(url)?;
        let top_archive = scratch.file(&archive_name);

        println!("Fetching {url}");
        fetch::fetch(url, &top_archive)?;

        println!("Expanding {archive_name}");
        archive::expand(&top_archive, scratch.path())?;

        match assembly {
            Assembly::NestedParts { pattern } => {
                self.assemble_nested_parts(&top_archive, pattern, scratch)
            }
            Assembly::FixedParts { parts } => self.assemble_fixed_parts(parts, scratch),
        }
    }

    /// Expand each nested archive, discover the part it produced, encode
    /// the part into a segment, and join the segments in archive-name
    /// order.
    fn assemble_nested_parts(
        &self,
        top_archive: &Path,
        pattern: &str,
        scratch: &Scratch,
    ) -> Result<PathBuf> {
        let nested = archive::nested_archives(scratch.path(), top_archive)?;
        if nested.is_empty() {
            anyhow::bail!(
                "no nested archives found after expanding {}",
                top_archive.display()
            );
        }
        println!("Discovered {} nested archives", nested.len());

        let mut segments = Vec::new();
        for (index, nested_archive) in nested.iter().enumerate() {
            let before = discover::snapshot(scratch.path())?;
            archive::expand(nested_archive, scratch.path())?;
            let part = discover::reconcile(scratch.path(), &before)?.into_part()?;
            println!("Part {}: {}", index + 1, part.display());

            let segment = scratch.file(&format!("part_{:03}.mkv", index + 1));
            match actions::build_segment(&part, pattern, self.spec.fps, &segment) {
                Ok(()) => segments.push(segment),
                Err(e) => {
                    tracing::warn!(
                        "segment build failed for {}: {e}; skipping part",
                        part.display()
                    );
                }
            }
        }

        // A partial sequence must never reach the joiner.
        if segments.len() != nested.len() {
            return Err(clipforge_av::Error::SegmentCount {
                expected: nested.len(),
                built: segments.len(),
            }
            .into());
        }

        let joined = scratch.file("joined.mkv");
        println!("Joining {} segments", segments.len());
        actions::concat(&segments, &joined)?;
        Ok(joined)
    }

    /// Verify the explicitly listed parts exist and join them in the
    /// given order.
    fn assemble_fixed_parts(&self, parts: &[String], scratch: &Scratch) -> Result<PathBuf> {
        let mut paths = Vec::new();
        for part in parts {
            let path = scratch.file(part);
            if !path.exists() {
                return Err(clipforge_av::Error::Discovery(format!(
                    "expected part missing after expansion: {}",
                    path.display()
                ))
                .into());
            }
            paths.push(path);
        }

        let joined = scratch.file("joined.mkv");
        println!("Joining {} parts", paths.len());
        actions::concat(&paths, &joined)?;
        Ok(joined)
    }
}

/// Derive the local archive file name from its URL.
fn archive_file_name(url: &str) -> Result<String> {
    let tail = url.split(['?', '#']).next().unwrap_or(url);
    tail.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("cannot derive archive file name from URL: {url}"))
}
