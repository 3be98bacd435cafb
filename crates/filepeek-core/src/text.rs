//! Text display metrics.

use crate::config::EMPTY_FILE_PLACEHOLDER;

/// Number of `\n`-separated lines, 0 for absent or empty content.
pub fn line_count(content: Option<&str>) -> usize {
    match content {
        Some(text) if !text.is_empty() => text.split('\n').count(),
        _ => 0,
    }
}

/// Text to render: the content verbatim, or the empty-file placeholder.
pub fn display_text(content: Option<&str>) -> &str {
    match content {
        Some(text) if !text.is_empty() => text,
        _ => EMPTY_FILE_PLACEHOLDER,
    }
}

/// Line count label for the viewer header.
pub fn line_count_label(count: usize) -> String {
    if count == 1 {
        "1 line".to_string()
    } else {
        format!("{} lines", count)
    }
}
