//! Reading and writing .docx packages.

use std::fs::File;
use std::io::{Read, Seek, Write};
use std::ops::Range;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use super::body::{Block, DocumentBody};
use super::styles::StyleSheet;
use crate::config::{RestartPolicy, DOCUMENT_PART, NUMBERING_PART, STYLES_PART};
use crate::error::{Result, SplitterError};
use crate::numbering::{NumberingStyleTable, ParagraphNumberResolver};

/// One file inside the package, held in memory.
#[derive(Debug, Clone)]
struct PackageEntry {
    name: String,
    data: Vec<u8>,
    compression: CompressionMethod,
}

/// A Word document loaded into memory.
///
/// The main document part is parsed once; chapter files are written by
/// copying every other part unchanged and re-emitting `word/document.xml`
/// with a subset of its body blocks.
#[derive(Debug)]
pub struct WordDocument {
    entries: Vec<PackageEntry>,
    document_xml: String,
    body: DocumentBody,
    numbering: NumberingStyleTable,
    styles: StyleSheet,
}

impl WordDocument {
    /// Open a .docx file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, is not a zip archive, or has no
    /// well-formed main document part.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            SplitterError::Io(std::io::Error::new(
                e.kind(),
                format!("{e}: {}", path.display()),
            ))
        })?;
        Self::from_reader(file, path)
    }

    /// Load a package from any seekable reader; `path` is recorded as the
    /// document's origin.
    ///
    /// # Errors
    /// See [`WordDocument::open`].
    pub fn from_reader<R: Read + Seek>(reader: R, path: &Path) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|_| SplitterError::InvalidDocx("file is not a ZIP archive".to_string()))?;

        let mut entries = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let mut file = archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }
            let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
            file.read_to_end(&mut data)?;
            entries.push(PackageEntry {
                name: file.name().to_string(),
                data,
                compression: file.compression(),
            });
        }

        let document_xml = part_text(&entries, DOCUMENT_PART)?
            .ok_or_else(|| SplitterError::MissingPart(DOCUMENT_PART.to_string()))?;
        let body = DocumentBody::parse(&document_xml)?;

        let numbering_xml = part_text(&entries, NUMBERING_PART).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Numbering part unreadable");
            None
        });
        let numbering = NumberingStyleTable::build(numbering_xml.as_deref());

        let styles = match part_text(&entries, STYLES_PART)? {
            Some(xml) => StyleSheet::parse(&xml)?,
            None => StyleSheet::default(),
        };

        tracing::debug!(
            path = %path.display(),
            blocks = body.blocks().len(),
            numbering_definitions = numbering.len(),
            "Loaded document"
        );

        Ok(Self {
            entries,
            document_xml,
            body,
            numbering,
            styles,
        })
    }

    /// Body block items in document order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        self.body.blocks()
    }

    /// The document's numbering definitions.
    #[must_use]
    pub fn numbering(&self) -> &NumberingStyleTable {
        &self.numbering
    }

    /// The document's paragraph styles.
    #[must_use]
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Write a copy of the package whose body holds only the blocks in
    /// `range`.
    ///
    /// # Errors
    /// Fails when the output file cannot be created or written.
    pub fn write_blocks(&self, range: Range<usize>, path: &Path) -> Result<()> {
        let document_xml = self.body.render_range(&self.document_xml, range);

        let file = File::create(path)?;
        let mut writer = ZipWriter::new(file);

        for entry in &self.entries {
            let method = match entry.compression {
                CompressionMethod::Stored => CompressionMethod::Stored,
                _ => CompressionMethod::Deflated,
            };
            let options = SimpleFileOptions::default().compression_method(method);
            writer.start_file(entry.name.as_str(), options)?;

            if entry.name == DOCUMENT_PART {
                writer.write_all(document_xml.as_bytes())?;
            } else {
                writer.write_all(&entry.data)?;
            }
        }

        writer.finish()?;
        Ok(())
    }

    /// Text of every paragraph prefixed with its resolved numbering.
    ///
    /// # Errors
    /// Fails on a dangling numbering reference or an out-of-range numeral.
    pub fn numbered_texts(&self, restart: RestartPolicy) -> Result<Vec<String>> {
        let mut resolver = ParagraphNumberResolver::new(&self.numbering).with_restart(restart);

        self.blocks()
            .iter()
            .filter_map(Block::as_paragraph)
            .map(|paragraph| {
                let prefix = resolver.resolve(paragraph.numbering)?;
                Ok(prefix + &paragraph.text)
            })
            .collect()
    }
}

fn part_text(entries: &[PackageEntry], name: &str) -> Result<Option<String>> {
    let Some(entry) = entries.iter().find(|entry| entry.name == name) else {
        return Ok(None);
    };
    String::from_utf8(entry.data.clone())
        .map(Some)
        .map_err(|_| SplitterError::InvalidDocx(format!("{name} is not valid UTF-8")))
}
