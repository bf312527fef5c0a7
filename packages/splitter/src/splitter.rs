//! Splitter service that ties loading, planning and writing together.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{
    chapter_key, sanitize_file_stem, SplitOptions, DOCX_EXTENSION, FRONT_MATTER_FILE_NAME,
};
use crate::docx::WordDocument;
use crate::error::Result;
use crate::manifest::{save_manifest, ChapterMap, ChapterRecord};
use crate::splitting::{ChapterBoundaryDetector, ChapterSpan, SplitEngine};

/// Split a Word document into one file per chapter.
///
/// The material before the first chapter heading goes to `封面.docx`; each
/// chapter is written to a file named after its heading paragraph. The
/// returned map lists the written files as `chapter1`, `chapter2`, ... and
/// the input as `fulltext`.
///
/// # Arguments
/// * `input` - Path of the .docx file to split
/// * `options` - Output directory, numbering and manifest settings
///
/// # Errors
/// Fails when the input cannot be loaded, a paragraph's numbering cannot
/// be resolved, or an output file cannot be written. Files written before
/// the failure are left in place.
pub fn split_word(input: &Path, options: &SplitOptions) -> Result<ChapterMap> {
    let document = WordDocument::open(input)?;

    let engine = SplitEngine::new(ChapterBoundaryDetector)
        .with_gap_text(options.gap_text.as_str())
        .with_restart(options.restart);
    let spans = engine.plan_document(&document)?;

    let output_dir = options.resolve_output_dir(input);
    fs::create_dir_all(&output_dir)?;

    let mut names = FileNames::new(input);
    let mut map = ChapterMap::new(input);

    for (position, span) in spans.iter().enumerate() {
        let key = chapter_key(position + 1);
        let path = output_dir.join(names.claim(span, &key));

        document.write_blocks(span.blocks.clone(), &path)?;
        tracing::info!(
            key = %key,
            blocks = span.len(),
            path = %path.display(),
            "Wrote chapter"
        );

        map.push(ChapterRecord {
            key,
            ordinal: span.ordinal,
            title: span.title.clone(),
            path,
        });
    }

    if options.write_manifest {
        save_manifest(&map, &output_dir)?;
    }

    Ok(map)
}

/// Hands out output file names, never reusing one within a run and never
/// using the input's own name.
struct FileNames {
    taken: HashSet<String>,
}

impl FileNames {
    fn new(input: &Path) -> Self {
        let taken = input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .into_iter()
            .collect();
        Self { taken }
    }

    fn claim(&mut self, span: &ChapterSpan, key: &str) -> PathBuf {
        let name = match &span.title {
            None => FRONT_MATTER_FILE_NAME.to_string(),
            Some(title) => {
                let stem = sanitize_file_stem(title).unwrap_or_else(|| key.to_string());
                format!("{stem}.{DOCX_EXTENSION}")
            }
        };

        let name = if self.taken.contains(&name) {
            let stem = name
                .strip_suffix(&format!(".{DOCX_EXTENSION}"))
                .unwrap_or(&name);
            let renamed = format!("{stem}_{key}.{DOCX_EXTENSION}");
            tracing::warn!(file = %name, renamed = %renamed, "Chapter file name already used");
            renamed
        } else {
            name
        };

        self.taken.insert(name.clone());
        PathBuf::from(name)
    }
}
