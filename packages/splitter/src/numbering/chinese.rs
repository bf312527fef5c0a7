//! Chinese numerals for the `chineseCounting` and `chineseLegalSimplified`
//! list formats.

use crate::error::{Result, SplitterError};

/// Largest value the Chinese formats can render (below one hundred million).
pub const MAX_CHINESE_VALUE: u32 = 99_999_999;

/// Glyph set for one Chinese numbering register.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    /// Digit glyphs for 0 through 9.
    pub digits: [char; 10],

    /// Place-unit glyphs for ones, tens, hundreds and thousands.
    pub units: [char; 4],

    /// Glyph separating the ten-thousands group from the lower group.
    pub wan: char,

    /// Render 10-19 as "十X" instead of "一十X".
    pub elide_leading_one: bool,
}

/// Counting register: 〇一二三 ... with 十百千.
pub const COUNTING: GlyphSet = GlyphSet {
    digits: ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'],
    units: ['个', '十', '百', '千'],
    wan: '万',
    elide_leading_one: true,
};

/// Legal/financial register: 零壹贰叁 ... with 拾佰仟.
pub const LEGAL_SIMPLIFIED: GlyphSet = GlyphSet {
    digits: ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'],
    units: ['个', '拾', '佰', '仟'],
    wan: '万',
    elide_leading_one: false,
};

/// Render `value` as a Chinese numeral in the given register.
///
/// Values of ten thousand and above are split into an upper group, the
/// ten-thousand glyph and a lower group, each rendered with the same rules.
///
/// # Errors
/// Returns [`SplitterError::NumeralRange`] above [`MAX_CHINESE_VALUE`].
pub fn to_chinese(value: u32, glyphs: &GlyphSet, format: &'static str) -> Result<String> {
    if value > MAX_CHINESE_VALUE {
        return Err(SplitterError::NumeralRange { format, value });
    }

    let zero = glyphs.digits[0];
    let mut text = if value < 10_000 {
        group_text(value, glyphs)
    } else {
        let mut upper = group_text(value / 10_000, glyphs);
        upper.push(glyphs.wan);
        upper.push_str(&group_text(value % 10_000, glyphs));
        upper
    };

    if text.chars().any(|c| c != zero) {
        text = text.trim_matches(zero).to_string();
    } else {
        text = zero.to_string();
    }

    Ok(text)
}

/// Render a group below ten thousand, keeping a leading zero glyph when the
/// group has no thousands digit.
fn group_text(value: u32, glyphs: &GlyphSet) -> String {
    let zero = glyphs.digits[0];
    let mut out: Vec<char> = Vec::with_capacity(8);
    let mut in_zero_run = false;

    for place in (0..4u32).rev() {
        let digit = (value / 10u32.pow(place) % 10) as usize;
        if digit == 0 {
            if !in_zero_run {
                out.push(zero);
                in_zero_run = true;
            }
        } else {
            out.push(glyphs.digits[digit]);
            out.push(glyphs.units[place as usize]);
            in_zero_run = false;
        }
    }

    // The ones place has no visible unit.
    if out.last() == Some(&glyphs.units[0]) {
        out.pop();
    }

    if out.iter().any(|c| *c != zero) {
        while out.last() == Some(&zero) {
            out.pop();
        }
    }

    if glyphs.elide_leading_one {
        let lead = out.iter().take_while(|c| **c == zero).count();
        if out[lead..].starts_with(&[glyphs.digits[1], glyphs.units[1]]) {
            out.remove(lead);
        }
    }

    out.into_iter().collect()
}
