//! Paragraph numbering resolution.
//!
//! Word stores only a `(list, level)` reference on each numbered paragraph;
//! the visible text ("第三章", "3.2.1") has to be recomputed by replaying
//! the counters in document order.

use std::collections::HashMap;

use super::table::{NumberingStyleTable, SuffixKind};
use crate::config::{RestartPolicy, DEFAULT_GAP_TEXT};
use crate::error::{Result, SplitterError};

/// A paragraph's numbering reference (`w:numPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberingRef {
    /// `w:numId`; 0 means "numbering removed".
    pub list_id: u32,

    /// `w:ilvl`, 0-based.
    pub level: u32,
}

impl NumberingRef {
    /// Create a reference.
    #[must_use]
    pub fn new(list_id: u32, level: u32) -> Self {
        Self { list_id, level }
    }

    /// Whether this is the `numId="0"` sentinel.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.list_id == 0
    }
}

/// Replays list counters for one document.
///
/// Counters and the last rendered numeral per level live in the instance;
/// use a fresh resolver per document.
#[derive(Debug)]
pub struct ParagraphNumberResolver<'t> {
    table: &'t NumberingStyleTable,
    counters: HashMap<(u32, u32), u32>,
    rendered: HashMap<(u32, u32), String>,
    gap_text: String,
    restart: RestartPolicy,
}

impl<'t> ParagraphNumberResolver<'t> {
    /// Create a resolver over a numbering table.
    #[must_use]
    pub fn new(table: &'t NumberingStyleTable) -> Self {
        Self {
            table,
            counters: HashMap::new(),
            rendered: HashMap::new(),
            gap_text: DEFAULT_GAP_TEXT.to_string(),
            restart: RestartPolicy::Never,
        }
    }

    /// Set the text appended for the `tab` suffix.
    #[must_use]
    pub fn with_gap_text(mut self, gap: impl Into<String>) -> Self {
        self.gap_text = gap.into();
        self
    }

    /// Set the counter restart policy.
    #[must_use]
    pub fn with_restart(mut self, restart: RestartPolicy) -> Self {
        self.restart = restart;
        self
    }

    /// Produce the numbering prefix of the next paragraph carrying
    /// `reference`, advancing that level's counter.
    ///
    /// Paragraphs without a reference, with the `numId="0"` sentinel, or in
    /// a document without numbering resolve to empty text.
    ///
    /// # Errors
    /// - [`SplitterError::NumberingLookup`] when the reference names a
    ///   level the table does not define.
    /// - [`SplitterError::NumeralRange`] when the counter exceeds what the
    ///   level's format can render.
    pub fn resolve(&mut self, reference: Option<NumberingRef>) -> Result<String> {
        let Some(NumberingRef { list_id, level }) = reference else {
            return Ok(String::new());
        };
        let table = self.table;
        if table.is_empty() || list_id == 0 {
            return Ok(String::new());
        }

        let definition = table
            .get(list_id, level)
            .ok_or(SplitterError::NumberingLookup { list_id, level })?;

        let value = match self.counters.get(&(list_id, level)) {
            Some(current) => current.saturating_add(1),
            None => definition.start,
        };
        self.counters.insert((list_id, level), value);

        if self.restart == RestartPolicy::OnShallowerAdvance {
            self.counters
                .retain(|(list, deeper), _| *list != list_id || *deeper <= level);
        }

        let numeral = definition.format.format(value)?.unwrap_or_default();
        self.rendered.insert((list_id, level), numeral);

        let mut text = render_template(&definition.level_text, level, |index| {
            self.rendered.get(&(list_id, index)).map(String::as_str)
        });

        match definition.suffix {
            SuffixKind::Tab => text.push_str(&self.gap_text),
            SuffixKind::Space => text.push(' '),
            SuffixKind::Nothing => {}
        }

        Ok(text)
    }
}

/// Substitute `%1`..`%N` in a level template, where `N` is `level + 1`.
///
/// `lookup` receives the 0-based level index of each placeholder; missing
/// values render as empty text. Placeholders for deeper levels and any
/// other `%` sequences are copied unchanged.
///
/// # Examples
/// ```
/// use chapter_splitter::numbering::render_template;
///
/// let values = ["3", "2"];
/// let text = render_template("%1.%2.", 1, |i| values.get(i as usize).copied());
/// assert_eq!(text, "3.2.");
/// ```
pub fn render_template<'v>(
    template: &str,
    level: u32,
    lookup: impl Fn(u32) -> Option<&'v str>,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let placeholder = chars
                .peek()
                .and_then(|next| next.to_digit(10))
                .filter(|digit| (1..=level + 1).contains(digit));
            if let Some(digit) = placeholder {
                chars.next();
                out.push_str(lookup(digit - 1).unwrap_or_default());
                continue;
            }
        }
        out.push(c);
    }

    out
}
