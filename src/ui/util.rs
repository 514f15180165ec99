use chrono::{DateTime, Datelike, Local};
use rust_decimal::Decimal;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"₹1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let formatted = format!("{val:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("₹{with_commas}.{dec_part}")
}

/// Format a date the way the transaction form expects it back: `D/M/YYYY`.
pub(crate) fn format_date(date: DateTime<Local>) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Scroll a list view down one row, clamped so the last page stays full.
pub(crate) fn scroll_down(scroll: &mut usize, len: usize, page: usize) {
    if *scroll + page < len {
        *scroll += 1;
    }
}

/// Scroll a list view up one row.
pub(crate) fn scroll_up(scroll: &mut usize) {
    *scroll = scroll.saturating_sub(1);
}
