/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

//! Numbering markers placed before each reference.
//!
//! Table-driven styles (symbols, alpha, roman) fall back to the numeric
//! `[n]` form once their table is exhausted.

use citeline_core::NumberingStyle;

const SYMBOLS: [&str; 9] = ["*", "†", "‡", "§", "¶", "‖", "**", "††", "‡‡"];

const ROMAN: [&str; 20] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv",
    "xv", "xvi", "xvii", "xviii", "xix", "xx",
];

const ALPHABET_LEN: usize = 26;

/// Marker for the 1-based `index` in `style`.
///
/// ```
/// use citeline_core::NumberingStyle;
/// use citeline_processor::processor::labels::marker;
///
/// assert_eq!(marker(1, NumberingStyle::Roman), "i.");
/// assert_eq!(marker(3, NumberingStyle::Symbols), "‡");
/// assert_eq!(marker(27, NumberingStyle::Alpha), "[27]");
/// ```
pub fn marker(index: usize, style: NumberingStyle) -> String {
    match style {
        NumberingStyle::Numeric => numeric(index),
        NumberingStyle::NumericDot => format!("{}.", index),
        NumberingStyle::NumericParen => format!("({})", index),
        NumberingStyle::Bullet => "•".to_string(),
        NumberingStyle::Dash => "–".to_string(),
        NumberingStyle::Asterisk => "*".to_string(),
        NumberingStyle::Symbols => table_entry(&SYMBOLS, index)
            .map(str::to_string)
            .unwrap_or_else(|| numeric(index)),
        NumberingStyle::Alpha => match index {
            1..=ALPHABET_LEN => {
                let letter = char::from(b'a' + (index - 1) as u8);
                format!("{}.", letter)
            }
            _ => numeric(index),
        },
        NumberingStyle::Roman => table_entry(&ROMAN, index)
            .map(|r| format!("{}.", r))
            .unwrap_or_else(|| numeric(index)),
        NumberingStyle::None => String::new(),
    }
}

fn numeric(index: usize) -> String {
    format!("[{}]", index)
}

fn table_entry<'a>(table: &[&'a str], index: usize) -> Option<&'a str> {
    index.checked_sub(1).and_then(|i| table.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_forms() {
        assert_eq!(marker(1, NumberingStyle::Numeric), "[1]");
        assert_eq!(marker(12, NumberingStyle::NumericDot), "12.");
        assert_eq!(marker(3, NumberingStyle::NumericParen), "(3)");
    }

    #[test]
    fn test_constant_markers() {
        for i in [1, 2, 50] {
            assert_eq!(marker(i, NumberingStyle::Bullet), "•");
            assert_eq!(marker(i, NumberingStyle::Dash), "–");
            assert_eq!(marker(i, NumberingStyle::Asterisk), "*");
            assert_eq!(marker(i, NumberingStyle::None), "");
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(marker(1, NumberingStyle::Symbols), "*");
        assert_eq!(marker(3, NumberingStyle::Symbols), "‡");
        assert_eq!(marker(9, NumberingStyle::Symbols), "‡‡");
        assert_eq!(marker(10, NumberingStyle::Symbols), "[10]");
    }

    #[test]
    fn test_alpha() {
        assert_eq!(marker(1, NumberingStyle::Alpha), "a.");
        assert_eq!(marker(26, NumberingStyle::Alpha), "z.");
        assert_eq!(marker(27, NumberingStyle::Alpha), "[27]");
    }

    #[test]
    fn test_roman() {
        assert_eq!(marker(1, NumberingStyle::Roman), "i.");
        assert_eq!(marker(4, NumberingStyle::Roman), "iv.");
        assert_eq!(marker(20, NumberingStyle::Roman), "xx.");
        assert_eq!(marker(21, NumberingStyle::Roman), "[21]");
    }

    #[test]
    fn test_index_zero_is_out_of_range() {
        assert_eq!(marker(0, NumberingStyle::Symbols), "[0]");
        assert_eq!(marker(0, NumberingStyle::Alpha), "[0]");
        assert_eq!(marker(0, NumberingStyle::Roman), "[0]");
    }
}
