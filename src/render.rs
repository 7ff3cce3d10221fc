//! Interleaved layout of the buffer pair for display.
//!
//! The two overlays are conceptually single lines of `N` glyphs; this
//! module chunks them into windows of the viewport width and stacks the
//! pieces so aligned positions sit in the same column: an absolute-offset
//! ruler (optional), the top overlay, the bottom overlay, a
//! boundary-heuristic pipe ruler (optional), and a blank separator per
//! window.
//!
//! Rendering is pure: the same buffers, keystream, options, and width
//! always produce the same lines, recomputed from scratch on every call.
//! The core has no notion of a resize; a front end simply asks again with
//! a new width.
//!
//! # Examples
//!
//! ```
//! use cribdrag::{interleave, ByteBuffer, Keystream, RenderOptions};
//!
//! let mut top = ByteBuffer::with_len(3);
//! top.replace(0..3, b"hey");
//! let bottom = ByteBuffer::with_len(3);
//! let ks = Keystream::derive(b"abc", b"xyz");
//!
//! let lines = interleave(&top, &bottom, &ks, RenderOptions::empty(), 80);
//! assert_eq!(lines, vec!["hey", "___", ""]);
//! ```

use crate::buffer::ByteBuffer;
use crate::cell::Cell;
use crate::keystream::{Keystream, is_boundary};
use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

/// Column interval between labels in the offset ruler.
pub const OFFSET_DELTA: usize = 5;

bitflags! {
    /// Optional ruler lines in the interleaved view.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderOptions: u8 {
        /// Show the boundary-heuristic pipe ruler under each window.
        const PIPES = 1 << 0;
        /// Show the absolute-offset ruler above each window.
        const OFFSETS = 1 << 1;
    }
}

impl Default for RenderOptions {
    /// Both rulers start enabled.
    fn default() -> Self {
        Self::all()
    }
}

/// Lay out both overlays into display lines wrapped at `width` columns.
///
/// Windows start at offsets `0, width, 2*width, …` until the longer overlay
/// is covered. A `width` of zero lays out nothing.
#[must_use]
pub fn interleave(
    top: &ByteBuffer,
    bottom: &ByteBuffer,
    keystream: &Keystream,
    options: RenderOptions,
    width: usize,
) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let maxlen = top.len().max(bottom.len());
    let mut start = 0;
    while start < maxlen {
        if options.contains(RenderOptions::OFFSETS) {
            lines.push(offset_ruler(start, width));
        }
        lines.push(glyph_line(top, start, width));
        lines.push(glyph_line(bottom, start, width));
        if options.contains(RenderOptions::PIPES) {
            lines.push(boundary_ruler(keystream, start, width));
        }
        lines.push(String::new());
        start += width;
    }
    lines
}

/// Build the offset ruler for the window starting at absolute `start`.
///
/// Labels are left-aligned in [`OFFSET_DELTA`]-column fields and
/// phase-aligned so every label lands on an absolute multiple of
/// [`OFFSET_DELTA`], whatever the window start. A label whose field would
/// run past the window width is omitted; the check measures display
/// columns, so a label grown past its field (offsets of six digits and up)
/// pushes later labels out instead of overflowing the line.
fn offset_ruler(start: usize, width: usize) -> String {
    let pad = (OFFSET_DELTA - start % OFFSET_DELTA) % OFFSET_DELTA;
    let mut ruler = " ".repeat(pad.min(width));

    let mut label_offset = start + pad;
    loop {
        let label = format!("{label_offset:<field$}", field = OFFSET_DELTA);
        if ruler.width() + label.width() > width {
            break;
        }
        ruler.push_str(&label);
        label_offset += OFFSET_DELTA;
    }
    ruler
}

/// Map one window of an overlay to glyphs.
///
/// An overlay shorter than the window yields a shorter line; one that ends
/// before the window starts yields an empty line.
fn glyph_line(buffer: &ByteBuffer, start: usize, width: usize) -> String {
    buffer
        .read(start..start.saturating_add(width))
        .iter()
        .copied()
        .map(Cell::glyph)
        .collect()
}

/// Build the boundary-heuristic ruler for one window.
///
/// Column `j` carries `|` when keystream byte `start + j` has both `0x20`
/// and `0x40` set: the uppercase-letter / punctuation collision pattern
/// that tends to mark a word boundary in one of the plaintexts.
fn boundary_ruler(keystream: &Keystream, start: usize, width: usize) -> String {
    let end = start.saturating_add(width).min(keystream.len());
    if start >= end {
        return String::new();
    }
    keystream.as_bytes()[start..end]
        .iter()
        .map(|&b| if is_boundary(b) { '|' } else { ' ' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(bytes: &[u8]) -> ByteBuffer {
        let mut buf = ByteBuffer::with_len(bytes.len());
        buf.replace(0..bytes.len(), bytes);
        buf
    }

    #[test]
    fn test_offset_ruler_first_window() {
        // Window at 0, width 12: labels 0 and 5 fit, 10 would overflow.
        assert_eq!(offset_ruler(0, 12), "0    5    ");
    }

    #[test]
    fn test_offset_ruler_phase_alignment() {
        // Window at 7: three columns of padding bring the first label to
        // absolute offset 10, a multiple of the label interval.
        assert_eq!(offset_ruler(7, 13), "   10   15   ");
    }

    #[test]
    fn test_offset_ruler_narrow_window() {
        assert_eq!(offset_ruler(0, 4), "");
        assert_eq!(offset_ruler(3, 4), "  ");
        assert_eq!(offset_ruler(0, 5), "0    ");
    }

    #[test]
    fn test_glyph_line_windows() {
        let buf = filled(b"abcdef");
        assert_eq!(glyph_line(&buf, 0, 4), "abcd");
        assert_eq!(glyph_line(&buf, 4, 4), "ef");
        assert_eq!(glyph_line(&buf, 8, 4), "");
    }

    #[test]
    fn test_boundary_ruler_marks_collisions() {
        // 'T' ^ '.' = 0x7A flags; 'a' ^ 'a' = 0 does not.
        let ks = Keystream::derive(b"aTa", b"a.a");
        assert_eq!(boundary_ruler(&ks, 0, 10), " | ");
        assert_eq!(boundary_ruler(&ks, 3, 10), "");
    }

    #[test]
    fn test_interleave_group_shape() {
        let top = filled(b"ab");
        let bottom = filled(b"cd");
        let ks = Keystream::derive(b"ab", b"cd");

        let all = interleave(&top, &bottom, &ks, RenderOptions::default(), 80);
        assert_eq!(all.len(), 5);
        assert_eq!(all[1], "ab");
        assert_eq!(all[2], "cd");
        assert_eq!(all[4], "");

        let bare = interleave(&top, &bottom, &ks, RenderOptions::empty(), 80);
        assert_eq!(bare, vec!["ab", "cd", ""]);
    }

    #[test]
    fn test_interleave_zero_width() {
        let top = filled(b"ab");
        let bottom = filled(b"cd");
        let ks = Keystream::derive(b"ab", b"cd");
        assert!(interleave(&top, &bottom, &ks, RenderOptions::default(), 0).is_empty());
    }

    #[test]
    fn test_interleave_unequal_lengths() {
        let top = filled(b"abcdef");
        let bottom = filled(b"xy");
        let ks = Keystream::derive(b"abcdef", b"xy");

        let lines = interleave(&top, &bottom, &ks, RenderOptions::PIPES, 4);
        // Two windows of four lines each (top, bottom, pipes, blank).
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "abcd");
        assert_eq!(lines[1], "xy");
        assert_eq!(lines[4], "ef");
        assert_eq!(lines[5], "");
    }

    #[test]
    fn test_interleave_is_pure() {
        let top = filled(b"The quick brown fox jumps over");
        let bottom = ByteBuffer::with_len(30);
        let ks = Keystream::derive(b"The quick brown fox jumps over", b"Pack my box with five dozen li");

        let first = interleave(&top, &bottom, &ks, RenderOptions::default(), 12);
        let second = interleave(&top, &bottom, &ks, RenderOptions::default(), 12);
        assert_eq!(first, second);
    }
}
