use crate::content::{validate, ContentKind, ContentRecord, ValidationFailure};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of validating one content file.
#[derive(Debug)]
pub struct LoadedRecord {
    pub path: PathBuf,
    pub kind: ContentKind,
    pub result: Result<ContentRecord, ValidationFailure>,
}

/// Every record found under a content directory.
#[derive(Debug, Default)]
pub struct ContentReport {
    pub records: Vec<LoadedRecord>,
}

impl ContentReport {
    pub fn valid(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.iter().filter_map(|r| r.result.as_ref().ok())
    }

    pub fn invalid(&self) -> impl Iterator<Item = (&Path, &ValidationFailure)> {
        self.records
            .iter()
            .filter_map(|r| r.result.as_ref().err().map(|e| (r.path.as_path(), e)))
    }

    pub fn is_ok(&self) -> bool {
        self.invalid().next().is_none()
    }
}

/// Load and validate `<root>/{blog,events,faq}/*.json`.
///
/// A missing collection directory is treated as empty. Files that are not
/// valid JSON are an error; schema problems end up in the report.
pub fn load_content_dir(root: &Path) -> Result<ContentReport> {
    let mut report = ContentReport::default();

    for kind in ContentKind::ALL {
        report.records.extend(load_collection(root, kind)?);
    }

    Ok(report)
}

/// Load and validate one collection, in file name order.
pub fn load_collection(root: &Path, kind: ContentKind) -> Result<Vec<LoadedRecord>> {
    let dir = root.join(kind.collection());
    if !dir.is_dir() {
        debug!("No {} collection at {}", kind.collection(), dir.display());
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(&dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let raw: Value = serde_json::from_str(&source)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let result = validate(kind, &raw);
        debug!(path = %path.display(), valid = result.is_ok(), "Validated {} record", kind);
        records.push(LoadedRecord { path, kind, result });
    }

    Ok(records)
}
