//! Number formats for list levels.
//!
//! Each format maps a counter value to the numeral text that replaces a
//! `%N` placeholder in a level template.

use super::chinese::{to_chinese, COUNTING, LEGAL_SIMPLIFIED};
use super::words::{cardinal_text, ordinal_text};
use crate::error::Result;

const IDEOGRAPH_TRADITIONAL: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const IDEOGRAPH_ZODIAC: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// A list-level number format (`w:numFmt`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    /// Base-10 digits, left-padded with zeros to `width`.
    Decimal { width: usize },
    UpperRoman,
    LowerRoman,
    UpperLetter,
    LowerLetter,
    /// Digits with an English ordinal suffix ("21st").
    Ordinal,
    CardinalText,
    OrdinalText,
    /// 甲乙丙 ... (1-10).
    IdeographTraditional,
    /// 子丑寅 ... (1-12).
    IdeographZodiac,
    ChineseCounting,
    ChineseLegalSimplified,
    /// Recognised but not rendered.
    DecimalEnclosedCircleChinese,
    /// Any other format name (`bullet`, `none`, ...).
    Other(String),
}

impl NumberFormat {
    /// Parse a `w:numFmt` value.
    ///
    /// Every `decimal*` name other than `decimalEnclosedCircleChinese` is a
    /// padded decimal whose width is one more than the number of `0`s in
    /// the name, so `decimal` is unpadded, `decimal01` and `decimalZero`
    /// pad to two digits and `decimal001` to three.
    ///
    /// # Examples
    /// ```
    /// use chapter_splitter::numbering::NumberFormat;
    ///
    /// assert_eq!(NumberFormat::parse("decimal"), NumberFormat::Decimal { width: 1 });
    /// assert_eq!(NumberFormat::parse("decimalZero"), NumberFormat::Decimal { width: 2 });
    /// assert_eq!(NumberFormat::parse("upperRoman"), NumberFormat::UpperRoman);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "decimalEnclosedCircleChinese" => Self::DecimalEnclosedCircleChinese,
            "decimalZero" => Self::Decimal { width: 2 },
            "upperRoman" => Self::UpperRoman,
            "lowerRoman" => Self::LowerRoman,
            "upperLetter" => Self::UpperLetter,
            "lowerLetter" => Self::LowerLetter,
            "ordinal" => Self::Ordinal,
            "cardinalText" => Self::CardinalText,
            "ordinalText" => Self::OrdinalText,
            "ideographTraditional" => Self::IdeographTraditional,
            "ideographZodiac" => Self::IdeographZodiac,
            "chineseCounting" => Self::ChineseCounting,
            "chineseLegalSimplified" => Self::ChineseLegalSimplified,
            name if name.starts_with("decimal") => Self::Decimal {
                width: name.matches('0').count() + 1,
            },
            other => Self::Other(other.to_string()),
        }
    }

    /// The format's `w:numFmt` name, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decimal { .. } => "decimal",
            Self::UpperRoman => "upperRoman",
            Self::LowerRoman => "lowerRoman",
            Self::UpperLetter => "upperLetter",
            Self::LowerLetter => "lowerLetter",
            Self::Ordinal => "ordinal",
            Self::CardinalText => "cardinalText",
            Self::OrdinalText => "ordinalText",
            Self::IdeographTraditional => "ideographTraditional",
            Self::IdeographZodiac => "ideographZodiac",
            Self::ChineseCounting => "chineseCounting",
            Self::ChineseLegalSimplified => "chineseLegalSimplified",
            Self::DecimalEnclosedCircleChinese => "decimalEnclosedCircleChinese",
            Self::Other(_) => "other",
        }
    }

    /// Render `value` in this format.
    ///
    /// Returns `Ok(None)` when the format has no textual rendering for the
    /// value: unsupported formats, and ideographs outside their cycle.
    ///
    /// # Errors
    /// Returns [`crate::SplitterError::NumeralRange`] when a word or
    /// Chinese format receives a value above its maximum.
    pub fn format(&self, value: u32) -> Result<Option<String>> {
        let text = match self {
            Self::Decimal { width } => format!("{value:0width$}", width = *width),
            Self::UpperRoman => to_roman(value),
            Self::LowerRoman => to_roman(value).to_lowercase(),
            Self::UpperLetter => to_letters(value),
            Self::LowerLetter => to_letters(value).to_lowercase(),
            Self::Ordinal => format!("{value}{}", ordinal_suffix(value)),
            Self::CardinalText => cardinal_text(value)?,
            Self::OrdinalText => ordinal_text(value)?,
            Self::IdeographTraditional => return Ok(cycle_glyph(&IDEOGRAPH_TRADITIONAL, value)),
            Self::IdeographZodiac => return Ok(cycle_glyph(&IDEOGRAPH_ZODIAC, value)),
            Self::ChineseCounting => to_chinese(value, &COUNTING, self.name())?,
            Self::ChineseLegalSimplified => to_chinese(value, &LEGAL_SIMPLIFIED, self.name())?,
            Self::DecimalEnclosedCircleChinese | Self::Other(_) => {
                tracing::debug!(format = %self.label(), value, "Number format not rendered");
                return Ok(None);
            }
        };
        Ok(Some(text))
    }

    fn label(&self) -> &str {
        match self {
            Self::Other(name) => name,
            _ => self.name(),
        }
    }
}

/// Subtractive Roman numeral in upper case. Zero renders as empty text.
#[must_use]
pub fn to_roman(value: u32) -> String {
    let mut remaining = value;
    let mut out = String::new();
    for (amount, symbol) in ROMAN_NUMERALS {
        while remaining >= amount {
            out.push_str(symbol);
            remaining -= amount;
        }
    }
    out
}

/// Bijective base-26 letters: 1 is `A`, 26 is `Z`, 27 is `AA`.
#[must_use]
pub fn to_letters(value: u32) -> String {
    let mut remaining = value;
    let mut out: Vec<char> = Vec::new();
    while remaining > 0 {
        remaining -= 1;
        out.push(char::from(b'A' + (remaining % 26) as u8));
        remaining /= 26;
    }
    out.into_iter().rev().collect()
}

/// English ordinal suffix for `value` ("st", "nd", "rd" or "th").
#[must_use]
pub fn ordinal_suffix(value: u32) -> &'static str {
    if matches!(value % 100, 11..=13) {
        return "th";
    }
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn cycle_glyph(glyphs: &[char], value: u32) -> Option<String> {
    let index = usize::try_from(value).ok()?.checked_sub(1)?;
    glyphs.get(index).map(char::to_string)
}
