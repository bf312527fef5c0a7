//! Chapter heading detection.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::strategy::SplitStrategy;
use super::types::{HeadingCandidate, SplitContext};
use crate::config::{CHAPTER_PATTERN, MAX_HEADING_CHARS, PART_PATTERN};

const BASE_NUMERALS: [char; 11] = ['零', '一', '二', '三', '四', '五', '六', '七', '八', '九', '十'];

/// Chinese numerals 0 through 99 as written in chapter headings.
static CHINESE_NUMERALS: LazyLock<HashMap<String, u32>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(100);

    for (value, glyph) in (0u32..).zip(BASE_NUMERALS) {
        table.insert(glyph.to_string(), value);
    }
    for (ones, glyph) in (1u32..).zip(&BASE_NUMERALS[1..10]) {
        table.insert(format!("十{glyph}"), 10 + ones);
    }
    for (tens, tens_glyph) in (2u32..).zip(&BASE_NUMERALS[2..10]) {
        table.insert(format!("{tens_glyph}十"), tens * 10);
        for (ones, ones_glyph) in (1u32..).zip(&BASE_NUMERALS[1..10]) {
            table.insert(format!("{tens_glyph}十{ones_glyph}"), tens * 10 + ones);
        }
    }

    table
});

/// Convert a heading ordinal token to a number.
///
/// Digit runs are read as decimal and saturate at `u32::MAX`; Chinese
/// numerals are looked up in a table covering 0 through 99. Anything else
/// yields 0, which never opens a chapter.
///
/// # Examples
/// ```
/// use chapter_splitter::splitting::chinese_to_num;
///
/// assert_eq!(chinese_to_num("二十三"), 23);
/// assert_eq!(chinese_to_num("12"), 12);
/// assert_eq!(chinese_to_num("一百"), 0);
/// ```
#[must_use]
pub fn chinese_to_num(token: &str) -> u32 {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().unwrap_or_else(|_| {
            tracing::debug!(token, "Chapter ordinal overflows u32, saturating");
            u32::MAX
        });
    }
    CHINESE_NUMERALS.get(token).copied().unwrap_or(0)
}

/// Detects chapter headings of the form "第N章" / "第N部分".
///
/// A heading opens a chapter only when it is centered, short, free of tab
/// characters and declares an ordinal above every chapter accepted so far.
/// The last condition drops table-of-contents entries and cross references
/// that repeat earlier chapter titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChapterBoundaryDetector;

impl SplitStrategy for ChapterBoundaryDetector {
    fn get_number(&self, candidate: &HeadingCandidate) -> Option<u32> {
        let captures = CHAPTER_PATTERN
            .captures(&candidate.text)
            .or_else(|| PART_PATTERN.captures(&candidate.text))?;
        Some(chinese_to_num(captures.get(1)?.as_str()))
    }

    fn should_split_here(
        &self,
        candidate: &HeadingCandidate,
        ordinal: u32,
        context: &SplitContext,
    ) -> bool {
        if !candidate.is_centered {
            return false;
        }

        let reason = if ordinal <= context.last_ordinal {
            "ordinal not above last chapter"
        } else if candidate.char_count() >= MAX_HEADING_CHARS {
            "heading too long"
        } else if candidate.text.contains('\t') {
            "heading contains tab"
        } else {
            return true;
        };

        tracing::debug!(
            heading = %candidate.text,
            ordinal,
            last_ordinal = context.last_ordinal,
            block = context.block_index,
            reason,
            "Rejected chapter boundary"
        );
        false
    }
}
