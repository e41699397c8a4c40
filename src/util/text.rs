use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

const NUMBER_ESCAPE_CHAR: &[char] = &['₹', '%', ',', ' ', '"', '\n', '\t', '\u{a0}'];

static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("Failed to compile file name regex"));

/// Parses a statement cell.
///
/// Thousands separators, percent signs, currency symbols and whitespace are
/// removed first. An empty cell counts as zero, anything that still isn't a
/// number is `None`.
pub fn parse_cell(s: &str) -> Option<Decimal> {
    let cleaned = clean_escape_chars(s);
    if cleaned.is_empty() {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(&cleaned).ok()
}

/// Removes the number escape characters from a given string.
///
/// ```text
/// clean_escape_chars("₹ 1,805.95") => "1805.95"
/// ```
pub(crate) fn clean_escape_chars(s: &str) -> String {
    s.chars().filter(|c| !NUMBER_ESCAPE_CHAR.contains(c)).collect()
}

/// 列名稱去掉展開按鈕的 `+` 與不斷行空白，例︰"Sales&nbsp;+" => "Sales"
pub fn normalize_label(s: &str) -> String {
    s.replace('\u{a0}', " ")
        .trim()
        .trim_end_matches('+')
        .trim()
        .to_string()
}

/// Replaces every run of characters outside `[A-Za-z0-9]` with `_`.
pub fn safe_file_stem(s: &str) -> String {
    NON_ALPHANUMERIC.replace_all(s, "_").into_owned()
}
