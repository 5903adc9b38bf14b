//! Formatting utilities used for CLI and export outputs.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI escape pattern"));

/// Minutes as `2h 05m`, or `45m` under an hour.
pub fn mins2readable(mins: u32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Left-align to a display width (ANSI escapes are not counted).
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = display_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}

/// Terminal column width of `s`, ignoring ANSI colour sequences.
pub fn display_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Remove SGR and erase-line escape sequences.
pub fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// "N min ago" label used by list views.
pub fn ago(minutes: i64) -> String {
    format!("{minutes} min ago")
}
