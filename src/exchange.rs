//! Selection exchange: swap a range between the two overlays.
//!
//! When a guessed fragment reads well but seems to belong to the *other*
//! plaintext, the analyst swaps it across rather than retyping it. The swap
//! moves cells as they are, known and unknown alike, and deliberately
//! bypasses mirroring: both sides already satisfy the XOR relation with the
//! keystream, and exchanging them position-for-position keeps it satisfied.
//!
//! A bare cursor (`start == end`) widens to a single-cell swap so the
//! operation always does something visible; an explicitly selected
//! non-empty range is never widened.

use crate::buffer::ByteBuffer;
use crate::cell::Cell;
use std::ops::Range;

/// Swap `range` between `top` and `bottom`.
///
/// Reversed ranges are normalized, a bare cursor widens to one cell, and
/// the end clamps to the shorter buffer so neither side reads out of
/// bounds. Both sides are read before either is written.
///
/// Returns the range actually swapped (possibly empty after clamping).
pub fn exchange(top: &mut ByteBuffer, bottom: &mut ByteBuffer, range: Range<usize>) -> Range<usize> {
    let (start, end) = if range.start <= range.end {
        (range.start, range.end)
    } else {
        (range.end, range.start)
    };
    // Widen a bare cursor to one cell; a real selection keeps its bounds.
    let end = if start == end { end.saturating_add(1) } else { end };

    let limit = top.len().min(bottom.len());
    let start = start.min(limit);
    let end = end.min(limit);
    if start >= end {
        return start..start;
    }

    let from_top: Vec<Cell> = top.read(start..end).to_vec();
    let from_bottom: Vec<Cell> = bottom.read(start..end).to_vec();
    top.write_cells(start, &from_bottom);
    bottom.write_cells(start, &from_top);

    start..end
}
