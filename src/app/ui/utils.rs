#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn popup_area(area: Rect, percent_width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

pub fn notice_area(area: Rect, percent_width: u16) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::End);
    let [area] = horizontal.areas(area);
    area
}

/// Cuts `text` to at most `max_width` terminal cells, marking the cut with an
/// ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut ret = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            if ret.pop().is_some() {
                ret.push('…');
            }
            return ret;
        }
        width += w;
        ret.push(c);
    }
    ret
}

/// Greedy word wrap on terminal cell width. Words longer than `width` are
/// truncated.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word = truncate(word, width);
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
