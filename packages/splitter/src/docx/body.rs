//! Block-level content of `w:body`.
//!
//! Blocks keep the byte span of their element in the source XML so a
//! chapter can be written by copying a contiguous run of blocks verbatim.

use std::ops::Range;

use roxmltree::{Document, Node};

use super::styles::StyleSheet;
use crate::config::WML_NS;
use crate::error::{Result, SplitterError};
use crate::numbering::NumberingRef;
use crate::xml::{child_val, child_val_u32, element_children, find_by_path, find_child, get_tag_name, is_wml};

/// A paragraph's properties relevant to numbering and heading detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Literal run text.
    pub text: String,

    /// Direct alignment (`w:pPr/w:jc`).
    pub alignment: Option<String>,

    /// Paragraph style id (`w:pPr/w:pStyle`).
    pub style_id: Option<String>,

    /// Numbering reference (`w:pPr/w:numPr`).
    pub numbering: Option<NumberingRef>,
}

impl Paragraph {
    /// Centered directly or through its style.
    #[must_use]
    pub fn is_centered(&self, styles: &StyleSheet) -> bool {
        self.alignment.as_deref() == Some("center") || styles.is_centered(self.style_id.as_deref())
    }
}

/// Kind of a body-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph(Paragraph),
    Table,
    /// Any other body-level content (content controls, bookmarks, ...).
    Other(String),
}

/// One block item of the body, in document order.
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    span: Range<usize>,
}

impl Block {
    /// The paragraph, if this block is one.
    #[must_use]
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match &self.kind {
            BlockKind::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    /// Byte span of the element in the document XML.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

#[derive(Debug, Clone)]
enum BodyChild {
    Block(usize),
    /// Kept in every chapter (section properties).
    Fixed(Range<usize>),
}

/// The parsed body of `word/document.xml`.
#[derive(Debug, Clone)]
pub struct DocumentBody {
    blocks: Vec<Block>,
    children: Vec<BodyChild>,
    content: Option<Range<usize>>,
}

impl DocumentBody {
    /// Parse the body of a main document part.
    ///
    /// # Errors
    /// Returns an error when the XML is malformed or has no `w:body`.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let body = find_child(doc.root_element(), "body")
            .ok_or_else(|| SplitterError::InvalidDocx("document has no w:body".to_string()))?;

        let content = match (body.first_child(), body.last_child()) {
            (Some(first), Some(last)) => Some(first.range().start..last.range().end),
            _ => None,
        };

        let mut blocks = Vec::new();
        let mut children = Vec::new();

        for child in element_children(body) {
            if is_wml(child, "sectPr") {
                children.push(BodyChild::Fixed(child.range()));
                continue;
            }

            let kind = if is_wml(child, "p") {
                BlockKind::Paragraph(parse_paragraph(child))
            } else if is_wml(child, "tbl") {
                BlockKind::Table
            } else {
                BlockKind::Other(get_tag_name(child).to_string())
            };

            children.push(BodyChild::Block(blocks.len()));
            blocks.push(Block {
                kind,
                span: child.range(),
            });
        }

        Ok(Self {
            blocks,
            children,
            content,
        })
    }

    /// Block items in document order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Rebuild `source` keeping only the blocks in `range`.
    ///
    /// Section properties are kept; whitespace between body children is
    /// dropped.
    #[must_use]
    pub fn render_range(&self, source: &str, range: Range<usize>) -> String {
        let Some(content) = &self.content else {
            return source.to_string();
        };

        let mut out = String::with_capacity(source.len());
        out.push_str(&source[..content.start]);

        for child in &self.children {
            match child {
                BodyChild::Block(index) if range.contains(index) => {
                    out.push_str(&source[self.blocks[*index].span.clone()]);
                }
                BodyChild::Block(_) => {}
                BodyChild::Fixed(span) => out.push_str(&source[span.clone()]),
            }
        }

        out.push_str(&source[content.end..]);
        out
    }
}

fn parse_paragraph(p: Node<'_, '_>) -> Paragraph {
    let ppr = find_child(p, "pPr");

    let numbering = find_by_path(p, "pPr/numPr")
        .and_then(|num_pr| {
            let list_id = child_val_u32(num_pr, "numId")?;
            let level = child_val_u32(num_pr, "ilvl").unwrap_or(0);
            Some(NumberingRef::new(list_id, level))
        })
        .filter(|reference| !reference.is_none());

    let mut text = String::new();
    collect_text(p, &mut text);

    Paragraph {
        text,
        alignment: ppr.and_then(|ppr| child_val(ppr, "jc")).map(str::to_string),
        style_id: ppr.and_then(|ppr| child_val(ppr, "pStyle")).map(str::to_string),
        numbering,
    }
}

/// Append the text of runs that belong to this paragraph, including runs
/// nested in hyperlinks, insertions and simple fields. Text boxes and
/// deleted runs are not part of the paragraph text.
fn collect_text(node: Node<'_, '_>, out: &mut String) {
    for child in element_children(node).filter(is_wordml) {
        match get_tag_name(child) {
            "r" => run_text(child, out),
            "hyperlink" | "ins" | "smartTag" | "fldSimple" | "customXml" | "sdt" | "sdtContent" => {
                collect_text(child, out);
            }
            _ => {}
        }
    }
}

fn is_wordml(node: &Node<'_, '_>) -> bool {
    node.tag_name().namespace() == Some(WML_NS)
}

fn run_text(run: Node<'_, '_>, out: &mut String) {
    for child in element_children(run).filter(is_wordml) {
        match get_tag_name(child) {
            "t" => out.push_str(child.text().unwrap_or_default()),
            "tab" | "ptab" => out.push('\t'),
            "br" if is_line_break(child) => out.push('\n'),
            "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}

/// Page and column breaks carry no text; only text wrapping breaks do.
fn is_line_break(br: Node<'_, '_>) -> bool {
    matches!(br.attribute((WML_NS, "type")), None | Some("textWrapping"))
}
