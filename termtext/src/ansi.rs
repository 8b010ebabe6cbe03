//! Splitting styled strings into escape sequences and visible glyphs.
//!
//! Rendered widgets carry SGR sequences inline. Anything that measures or
//! cuts such a string has to step over those sequences without counting
//! them, and has to keep grapheme clusters whole.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

pub const RESET: &str = "\x1b[0m";

/// One piece of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete escape sequence, never split.
    Escape(&'a str),
    /// One grapheme cluster and the cells it occupies.
    Glyph { text: &'a str, width: usize },
}

impl Segment<'_> {
    pub fn width(&self) -> usize {
        match self {
            Segment::Escape(_) => 0,
            Segment::Glyph { width, .. } => *width,
        }
    }
}

pub fn segments(s: &str) -> Vec<Segment<'_>> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            push_glyphs(&s[text_start..i], &mut out);
            let end = escape_end(bytes, i);
            out.push(Segment::Escape(&s[i..end]));
            i = end;
            text_start = end;
        } else {
            i += 1;
        }
    }
    push_glyphs(&s[text_start..], &mut out);
    out
}

fn push_glyphs<'a>(text: &'a str, out: &mut Vec<Segment<'a>>) {
    for g in text.graphemes(true) {
        out.push(Segment::Glyph {
            text: g,
            width: g.width(),
        });
    }
}

/// Byte index one past the escape sequence starting at `start`.
fn escape_end(bytes: &[u8], start: usize) -> usize {
    let len = bytes.len();
    if start + 1 >= len {
        return len;
    }
    match bytes[start + 1] {
        b'[' => {
            // CSI: parameters and intermediates, then one final byte
            let mut j = start + 2;
            while j < len && !(0x40..=0x7e).contains(&bytes[j]) {
                j += 1;
            }
            (j + 1).min(len)
        }
        b']' | b'P' | b'_' | b'^' => {
            // OSC/DCS/APC/PM: terminated by BEL or ST
            let mut j = start + 2;
            while j < len {
                if bytes[j] == BEL {
                    return j + 1;
                }
                if bytes[j] == ESC && j + 1 < len && bytes[j + 1] == b'\\' {
                    return j + 2;
                }
                j += 1;
            }
            len
        }
        b if b.is_ascii() => start + 2,
        _ => start + 1,
    }
}

pub fn is_sgr(escape: &str) -> bool {
    escape.starts_with("\x1b[") && escape.ends_with('m')
}

/// SGR that returns the terminal to its default rendition.
pub fn is_reset(escape: &str) -> bool {
    escape == "\x1b[0m" || escape == "\x1b[m"
}

pub fn strip_ansi(s: &str) -> String {
    if !contains_escape(s) {
        return s.to_string();
    }
    segments(s)
        .into_iter()
        .filter_map(|seg| match seg {
            Segment::Glyph { text, .. } => Some(text),
            Segment::Escape(_) => None,
        })
        .collect()
}

pub fn visible_width(s: &str) -> usize {
    segments(s).iter().map(Segment::width).sum()
}

pub fn contains_escape(s: &str) -> bool {
    s.as_bytes().contains(&ESC)
}

/// Tracks the SGR rendition in effect at a point in a line, and the
/// sequences needed to re-establish it.
#[derive(Debug, Default, Clone)]
pub(crate) struct SgrState<'a> {
    active: Vec<&'a str>,
    foreground: bool,
    background: bool,
    attributes: u16,
}

impl<'a> SgrState<'a> {
    pub(crate) fn apply(&mut self, escape: &'a str) {
        if !is_sgr(escape) {
            return;
        }
        if is_reset(escape) {
            self.clear();
            return;
        }
        let params = &escape[2..escape.len() - 1];
        let mut codes = params.split(';').map(|p| p.parse::<u16>().unwrap_or(0));
        while let Some(code) = codes.next() {
            match code {
                0 => self.clear(),
                1..=9 => self.attributes |= 1 << code,
                22 => self.attributes &= !((1 << 1) | (1 << 2)),
                23 => self.attributes &= !(1 << 3),
                24 => self.attributes &= !(1 << 4),
                25 => self.attributes &= !((1 << 5) | (1 << 6)),
                27 => self.attributes &= !(1 << 7),
                28 => self.attributes &= !(1 << 8),
                29 => self.attributes &= !(1 << 9),
                30..=37 | 90..=97 => self.foreground = true,
                40..=47 | 100..=107 => self.background = true,
                38 | 48 => {
                    if code == 38 {
                        self.foreground = true;
                    } else {
                        self.background = true;
                    }
                    // 5;n or 2;r;g;b
                    let skip = match codes.next() {
                        Some(5) => 1,
                        Some(2) => 3,
                        _ => 0,
                    };
                    for _ in 0..skip {
                        codes.next();
                    }
                }
                39 => self.foreground = false,
                49 => self.background = false,
                _ => {}
            }
        }
        if self.is_default() {
            self.active.clear();
        } else {
            self.active.push(escape);
        }
    }

    fn clear(&mut self) {
        self.active.clear();
        self.foreground = false;
        self.background = false;
        self.attributes = 0;
    }

    pub(crate) fn is_default(&self) -> bool {
        !self.foreground && !self.background && self.attributes == 0
    }

    pub(crate) fn replay(&self) -> String {
        self.active.concat()
    }
}
