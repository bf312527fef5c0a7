//! Types for the chapter splitting system.

use std::ops::Range;

/// A paragraph considered as a possible chapter heading.
///
/// Only exists while the document is being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingCandidate {
    /// Numbering prefix followed by the trimmed paragraph text, with ASCII
    /// spaces removed.
    pub text: String,

    /// Whether the paragraph is centered directly or through its style.
    pub is_centered: bool,
}

impl HeadingCandidate {
    /// Build a candidate from a resolved numbering prefix and the
    /// paragraph's literal text.
    ///
    /// # Examples
    /// ```
    /// use chapter_splitter::splitting::HeadingCandidate;
    ///
    /// let candidate = HeadingCandidate::new("第一章", " 绪 论 ", true);
    /// assert_eq!(candidate.text, "第一章绪论");
    /// ```
    #[must_use]
    pub fn new(numbering: &str, text: &str, is_centered: bool) -> Self {
        let mut joined = String::with_capacity(numbering.len() + text.len());
        joined.push_str(numbering);
        joined.push_str(text.trim());
        joined.retain(|c| c != ' ');

        Self {
            text: joined,
            is_centered,
        }
    }

    /// Length in characters.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// State carried through one scan of a document.
#[derive(Debug, Clone, Default)]
pub struct SplitContext {
    /// Ordinal of the last accepted chapter (0 before the first one).
    pub last_ordinal: u32,

    /// Index of the block being examined.
    pub block_index: usize,
}

impl SplitContext {
    /// Create a context for a fresh scan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A contiguous run of body blocks written to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSpan {
    /// Declared ordinal of the chapter heading; `None` for front matter.
    pub ordinal: Option<u32>,

    /// Literal heading paragraph text; `None` for front matter.
    pub title: Option<String>,

    /// Half-open block index range.
    pub blocks: Range<usize>,
}

impl ChapterSpan {
    /// The material before the first chapter heading.
    #[must_use]
    pub fn front_matter(blocks: Range<usize>) -> Self {
        Self {
            ordinal: None,
            title: None,
            blocks,
        }
    }

    /// A chapter opened by an accepted heading.
    #[must_use]
    pub fn chapter(ordinal: u32, title: impl Into<String>, blocks: Range<usize>) -> Self {
        Self {
            ordinal: Some(ordinal),
            title: Some(title.into()),
            blocks,
        }
    }

    /// Whether this span is the front matter.
    #[must_use]
    pub fn is_front_matter(&self) -> bool {
        self.ordinal.is_none()
    }

    /// Number of blocks in the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the span holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
