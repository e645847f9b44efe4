//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in `width` terminal columns (wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

/// 1500 → "25h 00m"
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}
