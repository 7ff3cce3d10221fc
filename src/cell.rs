//! Byte-slot cell type representing a single guessed-plaintext position.
//!
//! Each position in a ciphertext overlay is either a committed guess
//! ([`Cell::Known`]) or unresolved ([`Cell::Unknown`]). Unknown cells render
//! as a placeholder glyph and take no part in XOR derivation: mirroring an
//! unknown position makes the partner position unknown too.
//!
//! # Display Glyphs
//!
//! Raw bytes are never printed directly: control bytes get distinct visible
//! glyphs so an analyst can tell a guessed tab from a guessed space, and
//! anything outside the printable ASCII range collapses to a generic
//! non-printable marker. Every glyph occupies exactly one terminal column.
//!
//! # Examples
//!
//! ```
//! use cribdrag::Cell;
//!
//! assert_eq!(Cell::Known(b'A').glyph(), 'A');
//! assert_eq!(Cell::Known(b' ').glyph(), '\u{2423}');
//! assert_eq!(Cell::Unknown.glyph(), '_');
//! assert_eq!(Cell::Known(0x01).glyph(), '\u{25A2}');
//! ```

/// Placeholder glyph for an unresolved position.
pub const UNKNOWN_GLYPH: char = '_';
/// Visible glyph for a guessed carriage return.
pub const CR_GLYPH: char = '\u{21A9}';
/// Visible glyph for a guessed line feed.
pub const LF_GLYPH: char = '\u{21B5}';
/// Visible glyph for a guessed tab.
pub const TAB_GLYPH: char = '\u{21E5}';
/// Visible glyph for a guessed space.
pub const SPACE_GLYPH: char = '\u{2423}';
/// Generic glyph for bytes outside the printable range.
pub const NONPRINTABLE_GLYPH: char = '\u{25A2}';

/// A single byte slot in a ciphertext overlay.
///
/// `Cell` is `Copy`, so buffers of cells can be sliced, swapped, and
/// rewritten without allocation per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A committed guessed plaintext byte.
    Known(u8),
    /// No guess at this position yet.
    #[default]
    Unknown,
}

impl Cell {
    /// Check if this cell holds a committed guess.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Check if this cell is unresolved.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Get the guessed byte, if any.
    #[must_use]
    pub fn byte(self) -> Option<u8> {
        match self {
            Self::Known(b) => Some(b),
            Self::Unknown => None,
        }
    }

    /// Map this cell to its single-column display glyph.
    ///
    /// Whitespace control bytes get distinct visible glyphs; printable ASCII
    /// (`0x21..=0x7E`) passes through; everything else renders as
    /// [`NONPRINTABLE_GLYPH`].
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Unknown => UNKNOWN_GLYPH,
            Self::Known(b'\r') => CR_GLYPH,
            Self::Known(b'\n') => LF_GLYPH,
            Self::Known(b'\t') => TAB_GLYPH,
            Self::Known(b' ') => SPACE_GLYPH,
            Self::Known(b) if is_printable(b) => b as char,
            Self::Known(_) => NONPRINTABLE_GLYPH,
        }
    }
}

/// Check whether a byte is in the printable ASCII range (`0x21..=0x7E`).
///
/// Space and the whitespace controls are excluded here because they carry
/// their own dedicated glyphs.
#[must_use]
pub fn is_printable(byte: u8) -> bool {
    (0x21..=0x7E).contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthChar;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Cell::default(), Cell::Unknown);
        assert!(Cell::default().is_unknown());
    }

    #[test]
    fn test_byte_accessor() {
        assert_eq!(Cell::Known(0x41).byte(), Some(0x41));
        assert_eq!(Cell::Unknown.byte(), None);
    }

    #[test]
    fn test_printable_passthrough() {
        assert_eq!(Cell::Known(b'!').glyph(), '!');
        assert_eq!(Cell::Known(b'~').glyph(), '~');
        assert_eq!(Cell::Known(b'Q').glyph(), 'Q');
    }

    #[test]
    fn test_whitespace_glyphs() {
        assert_eq!(Cell::Known(b'\r').glyph(), CR_GLYPH);
        assert_eq!(Cell::Known(b'\n').glyph(), LF_GLYPH);
        assert_eq!(Cell::Known(b'\t').glyph(), TAB_GLYPH);
        assert_eq!(Cell::Known(b' ').glyph(), SPACE_GLYPH);
    }

    #[test]
    fn test_nonprintable_collapses() {
        assert_eq!(Cell::Known(0x00).glyph(), NONPRINTABLE_GLYPH);
        assert_eq!(Cell::Known(0x1B).glyph(), NONPRINTABLE_GLYPH);
        assert_eq!(Cell::Known(0x7F).glyph(), NONPRINTABLE_GLYPH);
        assert_eq!(Cell::Known(0xFF).glyph(), NONPRINTABLE_GLYPH);
    }

    #[test]
    fn test_every_glyph_is_one_column() {
        for b in 0..=u8::MAX {
            let glyph = Cell::Known(b).glyph();
            assert_eq!(glyph.width(), Some(1), "byte {b:#04x} -> {glyph:?}");
        }
        assert_eq!(Cell::Unknown.glyph().width(), Some(1));
    }

    #[test]
    fn test_cell_is_copy() {
        let cell = Cell::Known(b'x');
        let copy = cell;
        assert_eq!(cell, copy);
    }
}
