//! ANSI-aware text measurement and padding.

use console::{measure_text_width, pad_str, Alignment};

use super::Align;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// CJK characters count as two columns.
///
/// ```rust
/// use carlog_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads a cell according to its alignment.
pub fn pad_cell(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}
