mod types;

pub use types::*;

use anyhow::{Context, Result};
use clipforge_av::Resolution;
use std::path::Path;

/// Load a catalog from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let catalog: Catalog = toml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {:?}", path))?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

/// Load a catalog from a custom path, or fall back to the built-in
/// dataset table.
pub fn load_catalog_or_builtin(custom_path: Option<&Path>) -> Result<Catalog> {
    match custom_path {
        Some(path) => load_catalog(path),
        None => Ok(builtin()),
    }
}

/// Validate a catalog.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    for item in &catalog.items {
        if item.name.is_empty() {
            anyhow::bail!("Catalog item with empty name");
        }
        if item.output_name.is_empty() {
            anyhow::bail!("Item '{}' has no output name", item.name);
        }
        if item.fps <= 0.0 {
            anyhow::bail!("Item '{}' has non-positive fps: {}", item.name, item.fps);
        }

        match &item.source {
            Source::Archive { url, assembly } => {
                if url.is_empty() {
                    anyhow::bail!("Item '{}' has an empty archive URL", item.name);
                }
                match assembly {
                    Assembly::NestedParts { pattern } => {
                        if !pattern.contains('%') {
                            anyhow::bail!(
                                "Item '{}' frame pattern '{}' has no numeric placeholder",
                                item.name,
                                pattern
                            );
                        }
                    }
                    Assembly::FixedParts { parts } => {
                        if parts.is_empty() {
                            anyhow::bail!("Item '{}' lists no fixed parts", item.name);
                        }
                    }
                }
            }
            Source::Hosted { url, .. } => {
                if url.is_empty() {
                    anyhow::bail!("Item '{}' has an empty hosted URL", item.name);
                }
            }
        }

        if let Some(CutSpec::Frames { start, end }) = &item.cut {
            if end <= start {
                anyhow::bail!(
                    "Item '{}' has an empty frame range: {}..{}",
                    item.name,
                    start,
                    end
                );
            }
        }
    }

    let mut names: Vec<_> = catalog.items.iter().map(|i| i.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    if names.len() != catalog.items.len() {
        anyhow::bail!("Catalog item names are not unique");
    }

    Ok(())
}

/// The built-in table of known dataset items.
pub fn builtin() -> Catalog {
    Catalog {
        items: vec![
            ItemSpec {
                name: "choke1".to_string(),
                source: Source::Archive {
                    url: "https://zenodo.org/record/815657/files/P2E_S5.tar.xz".to_string(),
                    assembly: Assembly::NestedParts {
                        pattern: "%08d.jpg".to_string(),
                    },
                },
                output_dir: "IJCB Videos".into(),
                output_name: "Choke1.mkv".to_string(),
                fps: 30.0,
                cut: None,
                filters: Vec::new(),
            },
            ItemSpec {
                name: "choke2".to_string(),
                source: Source::Archive {
                    url: "https://zenodo.org/record/815657/files/P2L_S5.tar.xz".to_string(),
                    assembly: Assembly::FixedParts {
                        parts: vec![
                            "P2L_S5_C1.2".to_string(),
                            "P2L_S5_C1.1".to_string(),
                            "P2L_S5_C1.3".to_string(),
                        ],
                    },
                },
                output_dir: "IJCB Videos".into(),
                output_name: "Choke2.mkv".to_string(),
                fps: 30.0,
                cut: None,
                filters: Vec::new(),
            },
            ItemSpec {
                name: "bengal".to_string(),
                source: Source::Hosted {
                    url: "https://www.youtube.com/watch?v=oMJyrvHSGqY".to_string(),
                    resolution: Resolution::Fhd,
                },
                output_dir: "IJCB Videos".into(),
                output_name: "Bengal.mkv".to_string(),
                fps: 25.0,
                cut: Some(CutSpec::Frames {
                    start: 8475,
                    end: 9474,
                }),
                filters: Vec::new(),
            },
            ItemSpec {
                name: "sidewalk".to_string(),
                source: Source::Hosted {
                    url: "https://www.youtube.com/watch?v=UgUC_IY7rMw".to_string(),
                    resolution: Resolution::Fhd,
                },
                output_dir: "IJCB Videos".into(),
                output_name: "Sidewalk.mkv".to_string(),
                fps: 24.0,
                cut: Some(CutSpec::Frames {
                    start: 140,
                    end: 1436,
                }),
                filters: vec![FrameFilter::KeepEvenFrames],
            },
            ItemSpec {
                name: "terminal1".to_string(),
                source: Source::Hosted {
                    url: "https://www.youtube.com/watch?v=SqZWZTu1veA".to_string(),
                    resolution: Resolution::Fhd,
                },
                output_dir: "T-BIOM Videos".into(),
                output_name: "Terminal1.mkv".to_string(),
                fps: 30.0,
                cut: Some(CutSpec::Frames {
                    start: 2400,
                    end: 4740,
                }),
                filters: Vec::new(),
            },
            ItemSpec {
                name: "terminal2".to_string(),
                source: Source::Hosted {
                    url: "https://www.youtube.com/watch?v=SqZWZTu1veA".to_string(),
                    resolution: Resolution::Fhd,
                },
                output_dir: "T-BIOM Videos".into(),
                output_name: "Terminal2.mkv".to_string(),
                fps: 30.0,
                cut: Some(CutSpec::Time {
                    start: "00:23:37".to_string(),
                    end: "00:24:52".to_string(),
                }),
                filters: Vec::new(),
            },
        ],
    }
}
