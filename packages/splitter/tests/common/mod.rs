//! Builders for small .docx packages used by the integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chapter_splitter::docx::{BlockKind, WordDocument};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Paragraph styles: `Normal` (default), centered `Title`, and
/// `ChapterTitle` which inherits its alignment from `Title`.
pub const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:pPr><w:jc w:val="center"/></w:pPr></w:style><w:style w:type="paragraph" w:styleId="ChapterTitle"><w:name w:val="Chapter Title"/><w:basedOn w:val="Title"/></w:style></w:styles>"#;

/// List 1: level 0 "第%1章" in Chinese counting, level 1 "%1.%2" decimal.
pub const CHAPTER_NUMBERING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:abstractNum w:abstractNumId="0"><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="chineseCounting"/><w:lvlText w:val="第%1章"/><w:lvlJc w:val="left"/></w:lvl><w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1.%2"/><w:suff w:val="space"/></w:lvl></w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#;

/// Accumulates body blocks and optional parts of a Word document.
#[derive(Default)]
pub struct DocxBuilder {
    body: String,
    styles: Option<String>,
    numbering: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default().styles(STYLES)
    }

    pub fn styles(mut self, xml: &str) -> Self {
        self.styles = Some(xml.to_string());
        self
    }

    pub fn numbering(mut self, xml: &str) -> Self {
        self.numbering = Some(xml.to_string());
        self
    }

    /// Left-aligned body paragraph.
    pub fn paragraph(self, text: &str) -> Self {
        self.raw_paragraph("", text)
    }

    /// Paragraph with direct center alignment.
    pub fn centered(self, text: &str) -> Self {
        self.raw_paragraph(r#"<w:jc w:val="center"/>"#, text)
    }

    /// Paragraph using a named style.
    pub fn styled(self, style: &str, text: &str) -> Self {
        self.raw_paragraph(&format!(r#"<w:pStyle w:val="{style}"/>"#), text)
    }

    /// Centered list paragraph.
    pub fn numbered(self, num_id: u32, level: u32, text: &str) -> Self {
        self.raw_paragraph(
            &format!(
                r#"<w:numPr><w:ilvl w:val="{level}"/><w:numId w:val="{num_id}"/></w:numPr><w:jc w:val="center"/>"#
            ),
            text,
        )
    }

    /// Centered paragraph whose heading run follows a page break run.
    pub fn after_page_break(mut self, text: &str) -> Self {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:br w:type="page"/></w:r><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#
        ));
        self
    }

    /// One-cell table.
    pub fn table(mut self, cell: &str) -> Self {
        self.body.push_str(&format!(
            "<w:tbl><w:tr><w:tc><w:p><w:r><w:t>{cell}</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"
        ));
        self
    }

    fn raw_paragraph(mut self, properties: &str, text: &str) -> Self {
        let runs: String = text
            .split('\t')
            .map(|piece| format!(r#"<w:t xml:space="preserve">{piece}</w:t>"#))
            .collect::<Vec<_>>()
            .join("<w:tab/>");
        self.body.push_str(&format!(
            "<w:p><w:pPr>{properties}</w:pPr><w:r>{runs}</w:r></w:p>"
        ));
        self
    }

    pub fn document_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{}<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#,
            self.body
        )
    }

    pub fn write(&self, path: &Path) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        let mut parts = vec![
            ("[Content_Types].xml", CONTENT_TYPES.to_string()),
            ("_rels/.rels", RELS.to_string()),
            ("word/document.xml", self.document_xml()),
        ];
        if let Some(styles) = &self.styles {
            parts.push(("word/styles.xml", styles.clone()));
        }
        if let Some(numbering) = &self.numbering {
            parts.push(("word/numbering.xml", numbering.clone()));
        }

        for (name, content) in parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
}

/// Text of every block in a written document; tables read as `[table]`.
pub fn block_texts(path: &Path) -> Vec<String> {
    let document = WordDocument::open(path).unwrap();
    document
        .blocks()
        .iter()
        .map(|block| match &block.kind {
            BlockKind::Paragraph(paragraph) => paragraph.text.clone(),
            BlockKind::Table => "[table]".to_string(),
            BlockKind::Other(tag) => format!("[{tag}]"),
        })
        .collect()
}
