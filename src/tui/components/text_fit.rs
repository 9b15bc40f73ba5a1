//! Fixed-width cell helpers for table and form rendering.
//!
//! Widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates text to `max_width` columns, ending with `...` when cut.
///
/// Widths of three or less fall back to dots.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    truncated.push_str("...");
    truncated
}

/// Truncates or right-pads text to exactly `width` columns.
pub(crate) fn fit_cell(text: &str, width: usize) -> String {
    let mut cell = truncate_with_ellipsis(text, width);
    let padding = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(padding));
    cell
}

/// Clips text at `width` columns without an ellipsis, then right-pads it.
///
/// Zero-width characters are kept so combining marks stay attached.
pub(crate) fn pad_or_clip(text: &str, width: usize) -> String {
    let mut row = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        row.push(ch);
        used = used.saturating_add(char_width);
    }
    row.push_str(&" ".repeat(width.saturating_sub(used)));
    row
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use unicode_width::UnicodeWidthStr;

    use super::{fit_cell, pad_or_clip, truncate_with_ellipsis};

    #[rstest]
    #[case::fits("nginx", 10, "nginx")]
    #[case::cut("bitnami-charts", 8, "bitna...")]
    #[case::tiny("bitnami", 2, "..")]
    #[case::zero("bitnami", 0, "")]
    fn truncation(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_with_ellipsis(text, width), expected);
    }

    #[rstest]
    #[case("repo", 8)]
    #[case("仓库名称很长很长", 8)]
    fn cells_have_exact_width(#[case] text: &str, #[case] width: usize) {
        assert_eq!(fit_cell(text, width).width(), width);
    }

    #[rstest]
    fn clipping_drops_wide_characters_that_would_overflow() {
        assert_eq!(pad_or_clip("ab仓", 3), "ab ");
        assert_eq!(pad_or_clip("abcdef", 4), "abcd");
    }
}
