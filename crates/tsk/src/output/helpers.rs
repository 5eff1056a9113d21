//! Common helper functions for output formatting.

use owo_colors::OwoColorize;

use tsk_core::vocab::{PRIORITY_CRITICAL, PRIORITY_HIGH, PRIORITY_LOW};

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{cut}...")
}

/// Formats the priority column cell.
///
/// The cell is padded before colouring, otherwise the escape codes count
/// towards the pad width and the columns drift.
pub fn format_priority_cell(priority: &str, use_colors: bool) -> String {
    let cell = format!("{priority:<4}");
    if !use_colors {
        return cell;
    }
    match priority {
        PRIORITY_CRITICAL => cell.red().to_string(),
        PRIORITY_HIGH => cell.yellow().to_string(),
        PRIORITY_LOW => cell.dimmed().to_string(),
        _ => cell,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_strings_pass_through() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn test_truncate_str_long_strings_get_ellipsis() {
        assert_eq!(truncate_str("a very long string", 10), "a very ...");
    }

    #[test]
    fn test_truncate_str_counts_characters_not_bytes() {
        // Four characters, more than four bytes.
        assert_eq!(truncate_str("żółw", 4), "żółw");
    }

    #[test]
    fn test_format_priority_cell_pads_without_colors() {
        assert_eq!(format_priority_cell("P0", false), "P0  ");
        assert_eq!(format_priority_cell("P2", false), "P2  ");
    }
}
