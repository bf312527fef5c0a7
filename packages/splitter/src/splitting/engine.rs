//! Split engine that partitions a document's blocks into chapters.

use super::strategy::SplitStrategy;
use super::types::{ChapterSpan, HeadingCandidate, SplitContext};
use crate::config::RestartPolicy;
use crate::docx::{Block, StyleSheet, WordDocument};
use crate::error::Result;
use crate::numbering::{NumberingStyleTable, ParagraphNumberResolver};

/// Engine for splitting a document at chapter headings.
///
/// Walks the body blocks once in document order, resolving every
/// paragraph's numbering so list counters stay in step, and asks the
/// strategy whether each non-empty paragraph opens a new chapter.
pub struct SplitEngine<S: SplitStrategy> {
    strategy: S,
    gap_text: String,
    restart: RestartPolicy,
}

impl<S: SplitStrategy> SplitEngine<S> {
    /// Create a new split engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            gap_text: String::new(),
            restart: RestartPolicy::Never,
        }
    }

    /// Set the text used for the `tab` numbering suffix in headings.
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

    /// Plan the chapters of a loaded document.
    ///
    /// # Errors
    /// See [`SplitEngine::plan`].
    pub fn plan_document(&self, document: &WordDocument) -> Result<Vec<ChapterSpan>> {
        self.plan(document.blocks(), document.numbering(), document.styles())
    }

    /// Partition `blocks` into chapter spans.
    ///
    /// The first span is always the front matter, possibly empty. Every
    /// block lands in exactly one span and spans are returned in document
    /// order.
    ///
    /// # Errors
    /// Fails when a paragraph's numbering cannot be resolved.
    pub fn plan(
        &self,
        blocks: &[Block],
        numbering: &NumberingStyleTable,
        styles: &StyleSheet,
    ) -> Result<Vec<ChapterSpan>> {
        let mut resolver = ParagraphNumberResolver::new(numbering)
            .with_gap_text(self.gap_text.as_str())
            .with_restart(self.restart);
        let mut context = SplitContext::new();
        let mut spans = vec![ChapterSpan::front_matter(0..0)];

        for (index, block) in blocks.iter().enumerate() {
            let Some(paragraph) = block.as_paragraph() else {
                continue;
            };

            let prefix = resolver.resolve(paragraph.numbering)?;
            if paragraph.text.is_empty() {
                continue;
            }

            let candidate =
                HeadingCandidate::new(&prefix, &paragraph.text, paragraph.is_centered(styles));
            if candidate.is_centered {
                tracing::debug!(block = index, heading = %candidate.text, "Heading candidate");
            }

            context.block_index = index;
            let Some(ordinal) = self.strategy.detect(&candidate, &mut context) else {
                continue;
            };

            tracing::info!(block = index, ordinal, heading = %candidate.text, "Chapter boundary");

            if let Some(current) = spans.last_mut() {
                current.blocks.end = index;
            }
            spans.push(ChapterSpan::chapter(
                ordinal,
                paragraph.text.as_str(),
                index..index,
            ));
        }

        if let Some(current) = spans.last_mut() {
            current.blocks.end = blocks.len();
        }

        Ok(spans)
    }
}
