//! English number words for the `cardinalText` and `ordinalText` formats.
//!
//! Output is sentence case: only the first letter of the phrase is upper
//! case ("Twenty-one", "One hundred twenty-first").

use crate::error::{Result, SplitterError};

/// Largest value `cardinalText` can render.
pub const MAX_CARDINAL_VALUE: u32 = 999_999_999;

/// Largest value `ordinalText` can render.
pub const MAX_ORDINAL_VALUE: u32 = 999_999;

const BASE: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const BASE_ORDINAL: [&str; 21] = [
    "zeroth", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
    "ninth", "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth",
    "sixteenth", "seventeenth", "eighteenth", "nineteenth", "twentieth",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TENS_ORDINAL: [&str; 10] = [
    "", "", "twentieth", "thirtieth", "fortieth", "fiftieth", "sixtieth", "seventieth",
    "eightieth", "ninetieth",
];

const SCALES: [&str; 3] = ["", "thousand", "million"];

/// Render `value` as English cardinal words.
///
/// # Errors
/// Returns [`SplitterError::NumeralRange`] above [`MAX_CARDINAL_VALUE`].
pub fn cardinal_text(value: u32) -> Result<String> {
    if value > MAX_CARDINAL_VALUE {
        return Err(SplitterError::NumeralRange {
            format: "cardinalText",
            value,
        });
    }
    Ok(capitalize_first(&cardinal_words(value)))
}

/// Render `value` as English ordinal words.
///
/// # Errors
/// Returns [`SplitterError::NumeralRange`] above [`MAX_ORDINAL_VALUE`].
pub fn ordinal_text(value: u32) -> Result<String> {
    if value > MAX_ORDINAL_VALUE {
        return Err(SplitterError::NumeralRange {
            format: "ordinalText",
            value,
        });
    }

    let (thousands, rest) = (value / 1000, value % 1000);
    let mut parts: Vec<String> = Vec::new();

    if thousands > 0 {
        let words = cardinal_words(thousands);
        if rest == 0 {
            return Ok(capitalize_first(&format!("{words} thousandth")));
        }
        parts.push(format!("{words} thousand"));
    }

    let (hundreds, rest) = (rest / 100, rest % 100);
    if hundreds > 0 {
        if rest == 0 {
            parts.push(format!("{} hundredth", BASE[hundreds as usize]));
            return Ok(capitalize_first(&parts.join(" ")));
        }
        parts.push(format!("{} hundred", BASE[hundreds as usize]));
    }

    parts.push(ordinal_two_digits(rest));
    Ok(capitalize_first(&parts.join(" ")))
}

/// Lower-case cardinal words for any value up to the cardinal maximum.
fn cardinal_words(value: u32) -> String {
    if value < 1000 {
        return three_digits(value);
    }

    let mut chunks: Vec<u32> = Vec::new();
    let mut remaining = value;
    while remaining > 0 {
        chunks.push(remaining % 1000);
        remaining /= 1000;
    }

    chunks
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, chunk)| **chunk > 0)
        .map(|(scale, chunk)| {
            let words = three_digits(*chunk);
            match SCALES.get(scale) {
                Some(name) if !name.is_empty() => format!("{words} {name}"),
                _ => words,
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn three_digits(value: u32) -> String {
    let (hundreds, rest) = (value / 100, value % 100);
    if hundreds == 0 {
        return two_digits(rest);
    }
    let mut words = format!("{} hundred", BASE[hundreds as usize]);
    if rest > 0 {
        words.push(' ');
        words.push_str(&two_digits(rest));
    }
    words
}

fn two_digits(value: u32) -> String {
    if value < 20 {
        return BASE[value as usize].to_string();
    }
    let (tens, unit) = ((value / 10) as usize, (value % 10) as usize);
    if unit == 0 {
        TENS[tens].to_string()
    } else {
        format!("{}-{}", TENS[tens], BASE[unit])
    }
}

fn ordinal_two_digits(value: u32) -> String {
    if value <= 20 {
        return BASE_ORDINAL[value as usize].to_string();
    }
    let (tens, unit) = ((value / 10) as usize, (value % 10) as usize);
    if unit == 0 {
        TENS_ORDINAL[tens].to_string()
    } else {
        format!("{}-{}", TENS[tens], BASE_ORDINAL[unit])
    }
}

fn capitalize_first(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
