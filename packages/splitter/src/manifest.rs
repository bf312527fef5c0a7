//! Chapter manifest: which file holds which chapter.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{FULLTEXT_KEY, MANIFEST_FILE_NAME};
use crate::error::Result;

/// One written chapter file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterRecord {
    /// Manifest key (`chapter1`, `chapter2`, ...).
    pub key: String,

    /// Declared ordinal of the heading; absent for the front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,

    /// Heading paragraph text; absent for the front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Path of the written file.
    pub path: PathBuf,
}

/// Result of splitting one document.
///
/// `chapter1` is always the front matter; later chapters follow in
/// document order with strictly increasing ordinals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterMap {
    /// The unsplit input document.
    pub fulltext: PathBuf,

    /// Written chapters in emission order.
    pub chapters: Vec<ChapterRecord>,
}

impl ChapterMap {
    /// Create an empty map for an input document.
    #[must_use]
    pub fn new(fulltext: impl Into<PathBuf>) -> Self {
        Self {
            fulltext: fulltext.into(),
            chapters: Vec::new(),
        }
    }

    /// Append a chapter record.
    pub fn push(&mut self, record: ChapterRecord) {
        self.chapters.push(record);
    }

    /// Look up a path by key; `fulltext` names the input document.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Path> {
        if key == FULLTEXT_KEY {
            return Some(&self.fulltext);
        }
        self.chapters
            .iter()
            .find(|record| record.key == key)
            .map(|record| record.path.as_path())
    }

    /// All `(key, path)` pairs, chapters first, then `fulltext`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.chapters
            .iter()
            .map(|record| (record.key.as_str(), record.path.as_path()))
            .chain(std::iter::once((FULLTEXT_KEY, self.fulltext.as_path())))
    }
}

/// Render the manifest as YAML.
///
/// # Errors
/// Fails when a path is not valid UTF-8.
pub fn generate_manifest(map: &ChapterMap) -> Result<String> {
    Ok(serde_yaml_ng::to_string(map)?)
}

/// Write `chapters.yaml` into `output_dir`.
///
/// # Returns
/// The path of the written manifest.
///
/// # Errors
/// Returns an error if serialization or any file operation fails.
pub fn save_manifest(map: &ChapterMap, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let output_file = output_dir.join(MANIFEST_FILE_NAME);
    let temp_file = output_dir.join(format!(".{MANIFEST_FILE_NAME}.tmp"));

    let content = generate_manifest(map)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    tracing::info!(path = %output_file.display(), "Wrote chapter manifest");
    Ok(output_file)
}
