//! Session: ownership root and boundary API for front ends.
//!
//! A [`Session`] owns the two overlays, the derived keystream, and the
//! render toggles. Every way to mutate or observe the pair goes through it,
//! so there is no ambient state to reach for: a front end holds one
//! `Session` value, calls [`edit`](Session::edit) /
//! [`exchange`](Session::exchange) / [`set_toggle`](Session::set_toggle) in
//! response to its input events, and pulls fresh display lines with
//! [`render`](Session::render) whenever it wants them: after a mutation,
//! or after its own layout changed width.
//!
//! Mutations are serialized by `&mut self`; each completes fully before
//! `render` can run, so the renderer never observes a half-mirrored pair.
//!
//! # Examples
//!
//! ```
//! use cribdrag::{BufferId, Session};
//!
//! let mut session = Session::load(b"\x48\x65\x6C\x6C\x6F", b"\x00\x04\x08\x0C\x10");
//! let applied = session.edit(BufferId::Top, 0..0, b"He");
//! assert_eq!(applied, 0..2);
//!
//! let lines = session.render(80);
//! assert!(!lines.is_empty());
//! ```

use std::fmt;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::str::FromStr;

use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_event, emit_log};
use crate::exchange::exchange;
use crate::keystream::Keystream;
use crate::mirror::mirrored_replace;
use crate::render::{RenderOptions, interleave};

/// Which of the two overlays an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferId {
    Top,
    Bottom,
}

impl BufferId {
    /// Parse a buffer name (`top` / `bottom`, case-insensitive).
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" | "bot" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// The partner of this buffer.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

/// A named render toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The boundary-heuristic pipe ruler.
    Pipes,
    /// The absolute-offset ruler.
    Offsets,
}

impl Toggle {
    fn flag(self) -> RenderOptions {
        match self {
            Self::Pipes => RenderOptions::PIPES,
            Self::Offsets => RenderOptions::OFFSETS,
        }
    }
}

impl FromStr for Toggle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pipes" => Ok(Self::Pipes),
            "offsets" => Ok(Self::Offsets),
            _ => Err(Error::UnknownToggle(s.to_string())),
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pipes => write!(f, "pipes"),
            Self::Offsets => write!(f, "offsets"),
        }
    }
}

/// One crib-dragging session over a pair of ciphertexts.
///
/// Created once at startup, lives for the process lifetime, owns everything
/// it touches. Nothing is persisted.
#[derive(Clone, Debug)]
pub struct Session {
    top: ByteBuffer,
    bottom: ByteBuffer,
    keystream: Keystream,
    options: RenderOptions,
    revision: u64,
}

impl Session {
    /// Construct a session from the two raw ciphertexts.
    ///
    /// The overlays start all-unknown at their respective ciphertext
    /// lengths (which may differ); the keystream covers the overlapping
    /// prefix. The ciphertexts themselves are not retained.
    #[must_use]
    pub fn load(ct_a: &[u8], ct_b: &[u8]) -> Self {
        let session = Self {
            top: ByteBuffer::with_len(ct_a.len()),
            bottom: ByteBuffer::with_len(ct_b.len()),
            keystream: Keystream::derive(ct_a, ct_b),
            options: RenderOptions::default(),
            revision: 0,
        };
        emit_log(
            LogLevel::Info,
            &format!(
                "loaded ciphertexts: {} and {} bytes, {} overlapping",
                ct_a.len(),
                ct_b.len(),
                session.keystream.len()
            ),
        );
        session
    }

    /// Read both ciphertext files fully into memory and construct a session.
    ///
    /// Fails before any session exists if either file cannot be opened or
    /// read; a session is never built from partial data.
    pub fn load_files<P: AsRef<Path>, Q: AsRef<Path>>(path_a: P, path_b: Q) -> Result<Self> {
        let ct_a = fs::read(path_a)?;
        let ct_b = fs::read(path_b)?;
        Ok(Self::load(&ct_a, &ct_b))
    }

    /// Get one of the overlays.
    #[must_use]
    pub fn buffer(&self, id: BufferId) -> &ByteBuffer {
        match id {
            BufferId::Top => &self.top,
            BufferId::Bottom => &self.bottom,
        }
    }

    /// Get the top overlay.
    #[must_use]
    pub fn top(&self) -> &ByteBuffer {
        &self.top
    }

    /// Get the bottom overlay.
    #[must_use]
    pub fn bottom(&self) -> &ByteBuffer {
        &self.bottom
    }

    /// Get the derived keystream.
    #[must_use]
    pub fn keystream(&self) -> &Keystream {
        &self.keystream
    }

    /// Get the current render toggles.
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Apply a guess to one overlay and mirror it onto the other.
    ///
    /// Clamping follows [`ByteBuffer::replace`]; the partner update follows
    /// [`mirrored_replace`]. Returns the applied range so the caller can
    /// reposition its cursor.
    pub fn edit(&mut self, id: BufferId, range: Range<usize>, bytes: &[u8]) -> Range<usize> {
        let applied = match id {
            BufferId::Top => {
                mirrored_replace(&mut self.top, &mut self.bottom, &self.keystream, range, bytes)
            }
            BufferId::Bottom => {
                mirrored_replace(&mut self.bottom, &mut self.top, &self.keystream, range, bytes)
            }
        };
        self.bump();
        emit_event(
            "edit",
            &format!("{id} {}..{} ({} bytes)", applied.start, applied.end, bytes.len()),
        );
        applied
    }

    /// Clear a range of one overlay (and its mirror) to unknown.
    pub fn clear(&mut self, id: BufferId, range: Range<usize>) -> Range<usize> {
        self.edit(id, range, &[])
    }

    /// Swap a range between the two overlays.
    ///
    /// Semantics follow [`exchange`](crate::exchange()): reversed ranges
    /// normalize, a bare cursor widens to one cell, the end clamps to the
    /// shorter overlay. Returns the range actually swapped.
    pub fn exchange(&mut self, range: Range<usize>) -> Range<usize> {
        let swapped = exchange(&mut self.top, &mut self.bottom, range);
        self.bump();
        emit_event("exchange", &format!("{}..{}", swapped.start, swapped.end));
        swapped
    }

    /// Set a render toggle to an explicit value.
    pub fn set_toggle(&mut self, toggle: Toggle, value: bool) {
        self.options.set(toggle.flag(), value);
        self.bump();
        emit_event("toggle", &format!("{toggle}={value}"));
    }

    /// Flip a render toggle, returning its new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let value = !self.options.contains(toggle.flag());
        self.set_toggle(toggle, value);
        value
    }

    /// Lay out the interleaved view at the given viewport width.
    ///
    /// Pull-based and pure: call after any mutation, or whenever the front
    /// end's width changes.
    #[must_use]
    pub fn render(&self, width: usize) -> Vec<String> {
        interleave(&self.top, &self.bottom, &self.keystream, self.options, width)
    }

    /// Get the mutation revision (increments on every edit, exchange, and
    /// toggle change).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn test_load_keeps_original_lengths() {
        let session = Session::load(b"abcdef", b"xy");
        assert_eq!(session.top().len(), 6);
        assert_eq!(session.bottom().len(), 2);
        assert_eq!(session.keystream().len(), 2);
    }

    #[test]
    fn test_edit_mirrors_across() {
        let mut session = Session::load(b"\x48\x65\x6C\x6C\x6F", b"\x00\x04\x08\x0C\x10");
        session.edit(BufferId::Top, 0..1, b"H");
        assert_eq!(session.bottom().get(0), Some(Cell::Known(0x00)));
        session.edit(BufferId::Bottom, 1..2, &[0x04]);
        assert_eq!(session.top().get(1), Some(Cell::Known(b'e')));
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut session = Session::load(b"abc", b"xyz");
        let r0 = session.revision();
        session.edit(BufferId::Top, 0..1, b"a");
        session.exchange(0..2);
        session.toggle(Toggle::Pipes);
        assert_eq!(session.revision(), r0 + 3);

        let r = session.revision();
        let _ = session.render(40);
        assert_eq!(session.revision(), r);
    }

    #[test]
    fn test_toggles_control_rulers() {
        let mut session = Session::load(b"ab", b"cd");
        assert_eq!(session.render(80).len(), 5);
        session.set_toggle(Toggle::Offsets, false);
        assert_eq!(session.render(80).len(), 4);
        session.set_toggle(Toggle::Pipes, false);
        assert_eq!(session.render(80).len(), 3);
        assert!(session.toggle(Toggle::Pipes));
        assert_eq!(session.render(80).len(), 4);
    }

    #[test]
    fn test_toggle_parsing() {
        assert_eq!("pipes".parse::<Toggle>().unwrap(), Toggle::Pipes);
        assert_eq!("OFFSETS".parse::<Toggle>().unwrap(), Toggle::Offsets);
        assert!(matches!(
            "ruler".parse::<Toggle>(),
            Err(Error::UnknownToggle(_))
        ));
    }

    #[test]
    fn test_buffer_id_parsing() {
        assert_eq!(BufferId::from_str("top"), Some(BufferId::Top));
        assert_eq!(BufferId::from_str("Bottom"), Some(BufferId::Bottom));
        assert_eq!(BufferId::from_str("middle"), None);
        assert_eq!(BufferId::Top.other(), BufferId::Bottom);
    }
}
