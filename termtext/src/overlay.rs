//! Compositing one rendered block on top of another.
//!
//! Both blocks are plain strings that may carry ANSI styling. Positions and
//! widths are in visual cells. Base rows the overlay does not touch are
//! returned untouched, byte for byte.

use crate::ansi::{segments, visible_width, Segment, SgrState, RESET};

/// Write `overlay` onto `base` with its top-left corner at column `x`, row
/// `y`.
///
/// The overlay is treated as a rectangle as wide as its widest line. Parts
/// that fall outside the base block (below its last line, or right of its
/// widest line) are clipped.
pub fn place_overlay(x: usize, y: usize, overlay: &str, base: &str) -> String {
    let base_lines: Vec<&str> = base.split('\n').collect();
    let overlay_lines: Vec<&str> = overlay.split('\n').collect();

    let base_width = base_lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0);
    let overlay_width = overlay_lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0);

    if overlay_width == 0 || x >= base_width || y >= base_lines.len() {
        log::trace!(
            "overlay at ({x}, {y}) size {overlay_width}x{} fully clipped by base {base_width}x{}",
            overlay_lines.len(),
            base_lines.len()
        );
        return base.to_string();
    }

    let width = overlay_width.min(base_width - x);

    base_lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            match row.checked_sub(y).and_then(|i| overlay_lines.get(i)) {
                Some(over) => splice_line(line, over, x, width),
                None => (*line).to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace cells `[x, x + width)` of `line` with the first `width` cells of
/// `over`.
fn splice_line(line: &str, over: &str, x: usize, width: usize) -> String {
    let segs = segments(line);
    let mut out = String::with_capacity(line.len() + over.len() + 16);

    // left of the overlay
    let (left_cells, left_state) = copy_prefix(&segs, x, &mut out);
    if left_cells < x {
        out.push_str(&" ".repeat(x - left_cells));
    }
    if !left_state.is_default() {
        out.push_str(RESET);
    }

    // the overlay itself, clipped and padded to the rectangle
    let over_segs = segments(over);
    let (over_cells, over_state) = copy_prefix(&over_segs, width, &mut out);
    if over_cells < width {
        out.push_str(&" ".repeat(width - over_cells));
    }
    if !over_state.is_default() {
        out.push_str(RESET);
    }

    // right of the overlay, with the base styling restored
    copy_suffix(&segs, x + width, &mut out);
    out
}

/// Copy the segments covering cells `[0, cells)` into `out`.
///
/// Returns the number of cells written and the SGR state in effect at the
/// cut. A wide glyph straddling the cut is replaced by spaces.
fn copy_prefix<'a>(segs: &[Segment<'a>], cells: usize, out: &mut String) -> (usize, SgrState<'a>) {
    let mut state = SgrState::default();
    let mut col = 0;

    for seg in segs {
        match *seg {
            Segment::Escape(esc) => {
                if col >= cells {
                    break;
                }
                state.apply(esc);
                out.push_str(esc);
            }
            Segment::Glyph { text, width } => {
                if width > 0 && col >= cells {
                    break;
                }
                if col + width > cells {
                    out.push_str(&" ".repeat(cells - col));
                    col = cells;
                    break;
                }
                out.push_str(text);
                col += width;
            }
        }
    }
    (col, state)
}

/// Copy whatever lies at or after cell `from`. Styling that was in effect
/// before that point is replayed first so the right-hand side keeps its
/// look. A wide glyph straddling `from` is replaced by spaces.
fn copy_suffix(segs: &[Segment<'_>], from: usize, out: &mut String) {
    let mut state = SgrState::default();
    let mut col = 0;
    let mut resume = None;

    for (i, seg) in segs.iter().enumerate() {
        match *seg {
            Segment::Escape(esc) => state.apply(esc),
            Segment::Glyph { width, .. } => {
                if col >= from {
                    resume = Some((i, 0));
                    break;
                }
                if col + width > from {
                    resume = Some((i + 1, col + width - from));
                    break;
                }
                col += width;
            }
        }
    }

    let Some((resume_at, blank_cells)) = resume else {
        return;
    };

    out.push_str(&state.replay());
    out.push_str(&" ".repeat(blank_cells));
    for seg in &segs[resume_at..] {
        match *seg {
            Segment::Escape(esc) => out.push_str(esc),
            Segment::Glyph { text, .. } => out.push_str(text),
        }
    }
}
