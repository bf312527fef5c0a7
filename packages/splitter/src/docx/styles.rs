//! Paragraph style alignment from `word/styles.xml`.

use std::collections::HashMap;

use roxmltree::Document;

use crate::error::Result;
use crate::xml::{child_val, find_child, find_children, wml_attribute};

/// Longest `basedOn` chain followed before giving up.
const MAX_STYLE_DEPTH: usize = 16;

#[derive(Debug, Clone, Default)]
struct ParagraphStyle {
    based_on: Option<String>,
    alignment: Option<String>,
}

/// Paragraph styles of a document, keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, ParagraphStyle>,
    default_style: Option<String>,
}

impl StyleSheet {
    /// Parse `word/styles.xml`.
    ///
    /// # Errors
    /// Returns an XML error when the part is not well-formed.
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let mut sheet = Self::default();

        for style in find_children(doc.root_element(), "style") {
            if wml_attribute(style, "type") != Some("paragraph") {
                continue;
            }
            let Some(id) = wml_attribute(style, "styleId") else {
                continue;
            };

            if matches!(wml_attribute(style, "default"), Some("1" | "true" | "on")) {
                sheet.default_style = Some(id.to_string());
            }

            let alignment = find_child(style, "pPr")
                .and_then(|ppr| child_val(ppr, "jc"))
                .map(str::to_string);

            sheet.styles.insert(
                id.to_string(),
                ParagraphStyle {
                    based_on: child_val(style, "basedOn").map(str::to_string),
                    alignment,
                },
            );
        }

        Ok(sheet)
    }

    /// Alignment a paragraph inherits from its style.
    ///
    /// A paragraph without `w:pStyle` uses the default paragraph style.
    /// The first `w:jc` found walking up the `basedOn` chain wins.
    #[must_use]
    pub fn alignment(&self, style_id: Option<&str>) -> Option<&str> {
        let mut current = style_id.or(self.default_style.as_deref());

        for _ in 0..MAX_STYLE_DEPTH {
            let style = self.styles.get(current?)?;
            if let Some(alignment) = style.alignment.as_deref() {
                return Some(alignment);
            }
            current = style.based_on.as_deref();
        }

        None
    }

    /// Whether the style (or the default style) centers its paragraphs.
    #[must_use]
    pub fn is_centered(&self, style_id: Option<&str>) -> bool {
        self.alignment(style_id) == Some("center")
    }
}
