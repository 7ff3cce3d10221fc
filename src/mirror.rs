//! Mirrored replace: one edit, two buffers.
//!
//! An edit to either overlay immediately determines the other: for every
//! position `i` covered by the keystream, `partner[i] = guess[i] ^
//! keystream[i]`. [`mirrored_replace`] performs the source edit and the
//! derived partner edit as one step, so the pair is never observable in a
//! half-updated state.
//!
//! Propagation is strictly one-directional per call. The partner update is
//! written directly as cells, not replayed as another mirrored edit, so
//! there is nothing to re-trigger.
//!
//! # Examples
//!
//! ```
//! use cribdrag::{mirrored_replace, ByteBuffer, Cell, Keystream};
//!
//! let ks = Keystream::derive(b"\x48\x65\x6C\x6C\x6F", b"\x00\x04\x08\x0C\x10");
//! let mut top = ByteBuffer::with_len(5);
//! let mut bottom = ByteBuffer::with_len(5);
//!
//! mirrored_replace(&mut top, &mut bottom, &ks, 0..1, b"H");
//! assert_eq!(bottom.get(0), Some(Cell::Known(0x00)));
//! ```

use crate::buffer::ByteBuffer;
use crate::cell::Cell;
use crate::keystream::Keystream;
use std::ops::Range;

/// Replace `range` of `source` with `bytes` and derive the partner cells.
///
/// The source edit follows [`ByteBuffer::replace`] clamping rules. Over the
/// actually-applied range, each partner cell becomes
/// `Known(byte ^ keystream[i])` where the payload and the keystream both
/// cover position `i`, and [`Cell::Unknown`] otherwise: a cleared source
/// position clears its mirror, and positions past keystream coverage can
/// never hold a derived value.
///
/// Returns the applied range, for cursor repositioning.
pub fn mirrored_replace(
    source: &mut ByteBuffer,
    partner: &mut ByteBuffer,
    keystream: &Keystream,
    range: Range<usize>,
    bytes: &[u8],
) -> Range<usize> {
    let applied = source.replace(range, bytes);

    let mirrored: Vec<Cell> = applied
        .clone()
        .map(|i| {
            let payload = bytes.get(i - applied.start);
            match (payload, keystream.get(i)) {
                (Some(&byte), Some(key)) => Cell::Known(byte ^ key),
                _ => Cell::Unknown,
            }
        })
        .collect();
    partner.write_cells(applied.start, &mirrored);

    applied
}
