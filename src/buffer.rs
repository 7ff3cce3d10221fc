//! Fixed-length cell buffer overlaying one ciphertext.
//!
//! A [`ByteBuffer`] holds the analyst's current guesses for one of the two
//! plaintexts: one [`Cell`] per ciphertext byte, all starting out unknown.
//! The length is fixed at construction and never changes: every mutating
//! operation replaces cells in place, re-padding with [`Cell::Unknown`]
//! where a replacement falls short, so the two overlays and the keystream
//! stay aligned position by position for the life of the session.
//!
//! Ranges are clamped, never rejected: an interactive caller can hand any
//! range at all and the buffer will mutate only the intersection with its
//! bounds.
//!
//! # Examples
//!
//! ```
//! use cribdrag::{ByteBuffer, Cell};
//!
//! let mut buf = ByteBuffer::with_len(8);
//! assert_eq!(buf.len(), 8);
//!
//! // Write past the end: the payload truncates, the length holds.
//! let applied = buf.replace(6..8, b"abcd");
//! assert_eq!(applied, 6..8);
//! assert_eq!(buf.get(7), Some(Cell::Known(b'b')));
//! assert_eq!(buf.len(), 8);
//! ```

use crate::cell::Cell;
use std::ops::Range;

/// Fixed-length, mutable sequence of cells.
///
/// The buffer never grows or shrinks. Replacing a range with a shorter
/// payload clears the tail of the range to [`Cell::Unknown`] instead of
/// shifting content; replacing with a longer payload extends the edited
/// range and truncates at the buffer end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteBuffer {
    cells: Vec<Cell>,
}

impl ByteBuffer {
    /// Create a buffer of `len` unknown cells.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            cells: vec![Cell::Unknown; len],
        }
    }

    /// Get the fixed buffer length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the cell at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// View the whole buffer as a cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write `bytes` into the buffer starting at `range.start`.
    ///
    /// The requested range is clamped to the buffer bounds and the payload
    /// is truncated at the buffer end; overflow is silent, the buffer never
    /// grows. A payload shorter than the range clears the remaining cells to
    /// [`Cell::Unknown`]; a longer payload extends the edited range past
    /// `range.end` (still clamped).
    ///
    /// Returns the range of cells actually mutated, which a caller can use
    /// to reposition a cursor.
    pub fn replace(&mut self, range: Range<usize>, bytes: &[u8]) -> Range<usize> {
        let range = self.clamp(range);
        let write_end = range.start.saturating_add(bytes.len()).min(self.cells.len());

        for (cell, &byte) in self.cells[range.start..write_end].iter_mut().zip(bytes) {
            *cell = Cell::Known(byte);
        }
        // A short payload clears the tail of the range rather than shifting
        // content left; alignment with the partner buffer is preserved.
        if write_end < range.end {
            for cell in &mut self.cells[write_end..range.end] {
                *cell = Cell::Unknown;
            }
        }

        range.start..range.end.max(write_end)
    }

    /// Set every cell in `range` to [`Cell::Unknown`].
    ///
    /// Equivalent to `replace(range, &[])`. Returns the range actually
    /// cleared.
    pub fn clear(&mut self, range: Range<usize>) -> Range<usize> {
        self.replace(range, &[])
    }

    /// Read the cells in `range`, clamped to the buffer bounds.
    ///
    /// Never fails: a range entirely past the end yields an empty slice.
    #[must_use]
    pub fn read(&self, range: Range<usize>) -> &[Cell] {
        let range = self.clamp(range);
        &self.cells[range]
    }

    /// Overwrite cells starting at `start`, truncating at the buffer end.
    pub(crate) fn write_cells(&mut self, start: usize, cells: &[Cell]) {
        let len = self.cells.len();
        if start >= len {
            return;
        }
        let end = start.saturating_add(cells.len()).min(len);
        self.cells[start..end].copy_from_slice(&cells[..end - start]);
    }

    /// Clamp a range to `[0, len]`, normalizing a reversed pair to empty.
    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.cells.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_all_unknown() {
        let buf = ByteBuffer::with_len(4);
        assert!(buf.cells().iter().all(|c| c.is_unknown()));
    }

    #[test]
    fn test_replace_basic() {
        let mut buf = ByteBuffer::with_len(6);
        let applied = buf.replace(1..4, b"abc");
        assert_eq!(applied, 1..4);
        assert_eq!(buf.get(1), Some(Cell::Known(b'a')));
        assert_eq!(buf.get(3), Some(Cell::Known(b'c')));
        assert_eq!(buf.get(0), Some(Cell::Unknown));
        assert_eq!(buf.get(4), Some(Cell::Unknown));
    }

    #[test]
    fn test_short_payload_clears_tail() {
        let mut buf = ByteBuffer::with_len(6);
        buf.replace(0..6, b"abcdef");
        let applied = buf.replace(1..5, b"x");
        assert_eq!(applied, 1..5);
        assert_eq!(buf.get(1), Some(Cell::Known(b'x')));
        assert_eq!(buf.get(2), Some(Cell::Unknown));
        assert_eq!(buf.get(4), Some(Cell::Unknown));
        assert_eq!(buf.get(5), Some(Cell::Known(b'f')));
    }

    #[test]
    fn test_long_payload_extends_applied_range() {
        let mut buf = ByteBuffer::with_len(8);
        let applied = buf.replace(2..3, b"wxyz");
        assert_eq!(applied, 2..6);
        assert_eq!(buf.get(5), Some(Cell::Known(b'z')));
    }

    #[test]
    fn test_overflow_truncates() {
        let mut buf = ByteBuffer::with_len(4);
        let applied = buf.replace(2..14, b"0123456789");
        assert_eq!(applied, 2..4);
        assert_eq!(buf.get(3), Some(Cell::Known(b'1')));
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_range_fully_out_of_bounds() {
        let mut buf = ByteBuffer::with_len(4);
        let applied = buf.replace(9..12, b"abc");
        assert_eq!(applied, 4..4);
        assert!(buf.cells().iter().all(|c| c.is_unknown()));
    }

    #[test]
    fn test_clear_matches_empty_replace() {
        let mut a = ByteBuffer::with_len(5);
        let mut b = ByteBuffer::with_len(5);
        a.replace(0..5, b"hello");
        b.replace(0..5, b"hello");
        a.clear(1..3);
        b.replace(1..3, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_read_clamps() {
        let mut buf = ByteBuffer::with_len(3);
        buf.replace(0..3, b"xyz");
        assert_eq!(buf.read(1..10).len(), 2);
        assert!(buf.read(7..9).is_empty());
        assert!(buf.read(2..1).is_empty());
    }

    #[test]
    fn test_write_cells_truncates() {
        let mut buf = ByteBuffer::with_len(3);
        buf.write_cells(2, &[Cell::Known(1), Cell::Known(2)]);
        assert_eq!(buf.get(2), Some(Cell::Known(1)));
        buf.write_cells(3, &[Cell::Known(9)]);
        assert_eq!(buf.len(), 3);
    }
}
