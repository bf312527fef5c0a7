//! Numbering definitions parsed from `word/numbering.xml`.

use std::collections::HashMap;

use roxmltree::{Document, Node};

use super::format::NumberFormat;
use crate::error::{Result, SplitterError};
use crate::xml::{child_val, child_val_u32, find_child, find_children, is_mc, wml_attribute};

/// What follows the numbering text of a level (`w:suff`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuffixKind {
    #[default]
    Tab,
    Space,
    Nothing,
}

impl SuffixKind {
    /// Parse a `w:suff` value; anything unrecognised is a tab.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("space") => Self::Space,
            Some("nothing") => Self::Nothing,
            _ => Self::Tab,
        }
    }
}

/// Formatting of one level of one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingDefinition {
    /// Number format of this level's counter.
    pub format: NumberFormat,

    /// Level template with `%1`..`%9` placeholders (e.g. "第%1章", "%1.%2.").
    pub level_text: String,

    /// Value of the first paragraph at this level.
    pub start: u32,

    /// Separator between the numbering and the paragraph text.
    pub suffix: SuffixKind,
}

impl NumberingDefinition {
    /// Create a definition with a tab suffix.
    #[must_use]
    pub fn new(format: NumberFormat, level_text: impl Into<String>, start: u32) -> Self {
        Self {
            format,
            level_text: level_text.into(),
            start,
            suffix: SuffixKind::Tab,
        }
    }

    /// Set the suffix kind.
    #[must_use]
    pub fn with_suffix(mut self, suffix: SuffixKind) -> Self {
        self.suffix = suffix;
        self
    }
}

/// Lookup of `(list id, level)` to its numbering definition.
///
/// Built once per document and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NumberingStyleTable {
    definitions: HashMap<(u32, u32), NumberingDefinition>,
}

impl NumberingStyleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for a document, degrading to an empty table when the
    /// numbering part is absent or malformed.
    #[must_use]
    pub fn build(numbering_xml: Option<&str>) -> Self {
        let parsed = numbering_xml
            .ok_or_else(|| SplitterError::Structure("numbering part is absent".to_string()))
            .and_then(Self::parse);

        match parsed {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "Numbering unavailable, paragraphs resolve without numbers");
                Self::new()
            }
        }
    }

    /// Parse `word/numbering.xml`.
    ///
    /// # Errors
    /// Returns [`SplitterError::Structure`] when the XML is malformed or
    /// carries unusable identifiers.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml).map_err(|e| SplitterError::Structure(e.to_string()))?;
        let root = doc.root_element();
        if root.tag_name().name() != "numbering" {
            return Err(SplitterError::Structure(format!(
                "unexpected root element <{}>",
                root.tag_name().name()
            )));
        }

        let mut abstracts: HashMap<u32, HashMap<u32, NumberingDefinition>> = HashMap::new();
        for abstract_num in find_children(root, "abstractNum") {
            let id = required_id(abstract_num, "abstractNumId")?;
            let mut levels = HashMap::new();
            for lvl in find_children(abstract_num, "lvl") {
                let (level, definition) = parse_level(lvl)?;
                levels.insert(level, definition);
            }
            abstracts.insert(id, levels);
        }

        let mut table = Self::new();
        for num in find_children(root, "num") {
            let list_id = required_id(num, "numId")?;
            let Some(abstract_id) = child_val_u32(num, "abstractNumId") else {
                return Err(SplitterError::Structure(format!(
                    "list {list_id} has no abstract definition reference"
                )));
            };
            let Some(levels) = abstracts.get(&abstract_id) else {
                tracing::warn!(list_id, abstract_id, "List references unknown abstract definition");
                continue;
            };

            for (level, definition) in levels {
                table.insert(list_id, *level, definition.clone());
            }

            for override_node in find_children(num, "lvlOverride") {
                let level = required_id(override_node, "ilvl")?;
                if let Some(lvl) = find_child(override_node, "lvl") {
                    let (_, definition) = parse_level(lvl)?;
                    table.insert(list_id, level, definition);
                }
                if let Some(start) = child_val_u32(override_node, "startOverride") {
                    if let Some(definition) = table.definitions.get_mut(&(list_id, level)) {
                        definition.start = start;
                    }
                }
            }
        }

        tracing::debug!(definitions = table.len(), "Parsed numbering definitions");
        Ok(table)
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, list_id: u32, level: u32, definition: NumberingDefinition) {
        self.definitions.insert((list_id, level), definition);
    }

    /// Get the definition for a list level.
    #[must_use]
    pub fn get(&self, list_id: u32, level: u32) -> Option<&NumberingDefinition> {
        self.definitions.get(&(list_id, level))
    }

    /// Number of (list, level) definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the table has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn required_id(node: Node<'_, '_>, attribute: &str) -> Result<u32> {
    let raw = wml_attribute(node, attribute).ok_or_else(|| {
        SplitterError::Structure(format!(
            "<{}> without w:{attribute}",
            node.tag_name().name()
        ))
    })?;
    raw.trim().parse().map_err(|_| {
        SplitterError::Structure(format!("invalid w:{attribute} value '{raw}'"))
    })
}

/// Parse one `w:lvl` into its level index and definition.
fn parse_level(lvl: Node<'_, '_>) -> Result<(u32, NumberingDefinition)> {
    let level = required_id(lvl, "ilvl")?;

    let format_name = child_val(lvl, "numFmt")
        .map(str::to_string)
        .or_else(|| alternate_decimal_format(lvl))
        .unwrap_or_else(|| "decimal".to_string());

    let definition = NumberingDefinition {
        format: NumberFormat::parse(&format_name),
        level_text: child_val(lvl, "lvlText").unwrap_or_default().to_string(),
        start: child_val_u32(lvl, "start").unwrap_or(0),
        suffix: SuffixKind::parse(child_val(lvl, "suff")),
    };

    Ok((level, definition))
}

/// Recover a zero-padded decimal format from `mc:AlternateContent`.
///
/// Newer Word versions write custom decimal formats such as "001, 002, 003"
/// as a `w:numFmt w:val="custom" w:format="001, ..."` choice with a plain
/// `decimal` fallback. The padding of the first sample becomes the format
/// name, e.g. `decimal001`.
fn alternate_decimal_format(lvl: Node<'_, '_>) -> Option<String> {
    let alternate = lvl.children().find(|n| is_mc(*n, "AlternateContent"))?;

    let fallback = alternate.children().find(|n| is_mc(*n, "Fallback"))?;
    if child_val(fallback, "numFmt") != Some("decimal") {
        return None;
    }

    let choice = alternate.children().find(|n| is_mc(*n, "Choice"))?;
    let sample = find_child(choice, "numFmt").and_then(|n| wml_attribute(n, "format"))?;
    let first = sample.split(',').next().unwrap_or_default().trim();

    Some(format!("decimal{first}"))
}
