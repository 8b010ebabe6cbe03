use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub const ELLIPSIS: &str = "…";

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Truncate `s` to at most `max_width` cells, ending in an ellipsis when
/// anything was cut. Grapheme clusters are kept whole, so a wide glyph that
/// does not fit is dropped rather than split.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let Some(budget) = max_width.checked_sub(display_width(ELLIPSIS)) else {
        return String::new();
    };

    let mut used = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    // a wide glyph that did not fit leaves a gap before the ellipsis
    out.extend(std::iter::repeat(' ').take(budget - used));
    out.push_str(ELLIPSIS);
    out
}

/// Right-pad `s` with spaces up to `width` cells. Never shortens.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Left-pad `s` with spaces up to `width` cells.
pub fn pad_left_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.extend(std::iter::repeat(' ').take(width - current));
    out.push_str(s);
    out
}

/// Exactly `width` cells: truncated with an ellipsis or padded with spaces.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    pad_to_width(&truncated, width)
}

/// Place `s` inside `width` cells according to `align`, padding both sides.
pub fn align_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text_width = display_width(s);
    if text_width >= width {
        return s.to_string();
    }
    let left = align_offset(text_width, width, align);
    let right = width - text_width - left;
    let mut out = String::with_capacity(s.len() + width - text_width);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(right));
    out
}

/// Accumulates one output line at a time while wrapping.
#[derive(Default)]
struct Lines {
    done: Vec<String>,
    line: String,
    width: usize,
}

impl Lines {
    fn push(&mut self, text: &str, width: usize) {
        self.line.push_str(text);
        self.width += width;
    }

    fn break_line(&mut self) {
        self.done.push(std::mem::take(&mut self.line));
        self.width = 0;
    }

    /// Close the current line if it holds anything.
    fn flush(&mut self) {
        if !self.line.is_empty() {
            self.break_line();
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        if self.done.is_empty() {
            self.done.push(String::new());
        }
        self.done
    }
}

/// Greedy word wrap. Words wider than `max_width` are broken by grapheme.
/// Existing line breaks are kept; a trailing `\r` on a line is dropped.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut out = Lines::default();
    for input_line in s.split('\n') {
        let input_line = input_line.strip_suffix('\r').unwrap_or(input_line);
        if input_line.trim().is_empty() {
            out.done.push(String::new());
            continue;
        }

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);
            let gap = usize::from(!out.line.is_empty());

            if out.width + gap + word_width <= max_width {
                if gap == 1 {
                    out.push(" ", 1);
                }
                out.push(word, word_width);
            } else if word_width <= max_width {
                out.flush();
                out.push(word, word_width);
            } else {
                out.flush();
                break_graphemes(&mut out, word, max_width);
            }
        }
        out.flush();
    }
    out.finish()
}

/// Hard wrap at `max_width` cells, never splitting a grapheme cluster.
pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut out = Lines::default();
    for input_line in s.split('\n') {
        if input_line.is_empty() {
            out.done.push(String::new());
            continue;
        }
        break_graphemes(&mut out, input_line, max_width);
        out.flush();
    }
    out.finish()
}

/// Append `text` grapheme by grapheme, starting a new line whenever the
/// next one would overflow. The last partial line is left open.
fn break_graphemes(out: &mut Lines, text: &str, max_width: usize) {
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if width > 0 && out.width + width > max_width && !out.line.is_empty() {
            out.break_line();
        }
        out.push(grapheme, width);
    }
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
