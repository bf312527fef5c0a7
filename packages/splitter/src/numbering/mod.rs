//! List numbering resolution.
//!
//! - [`format`]: counter value to numeral text for each `w:numFmt`
//! - [`table`]: `(list, level)` definitions from `word/numbering.xml`
//! - [`resolver`]: per-document counters and level-template composition

mod chinese;
mod format;
mod resolver;
mod table;
mod words;

pub use chinese::{to_chinese, GlyphSet, COUNTING, LEGAL_SIMPLIFIED, MAX_CHINESE_VALUE};
pub use format::{ordinal_suffix, to_letters, to_roman, NumberFormat};
pub use resolver::{render_template, NumberingRef, ParagraphNumberResolver};
pub use table::{NumberingDefinition, NumberingStyleTable, SuffixKind};
pub use words::{cardinal_text, ordinal_text, MAX_CARDINAL_VALUE, MAX_ORDINAL_VALUE};
