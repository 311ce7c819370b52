use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}

/// Pad `s` with spaces to exactly `width` columns, placing it per `align`.
/// Text wider than `width` is returned unchanged.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text_width = display_width(s);
    if text_width >= width {
        return s.to_string();
    }

    let left = align_offset(text_width, width, align);
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}
