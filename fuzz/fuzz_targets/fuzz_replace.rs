//! Fuzz target for buffer replace clamping.
//!
//! Replace is a total function: any range and payload must clamp silently,
//! never panic, and never change the buffer length.

#![no_main]

use arbitrary::Arbitrary;
use cribdrag::ByteBuffer;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ReplaceInput {
    len: u16,
    start: u32,
    end: u32,
    payload: Vec<u8>,
}

fuzz_target!(|input: ReplaceInput| {
    let len = usize::from(input.len) % 4096;
    let mut buf = ByteBuffer::with_len(len);

    let applied = buf.replace(input.start as usize..input.end as usize, &input.payload);

    assert_eq!(buf.len(), len);
    assert!(applied.start <= applied.end);
    assert!(applied.end <= len);

    // Clearing the applied range afterwards must also stay in bounds.
    let cleared = buf.clear(applied);
    assert!(cleared.end <= len);
    assert_eq!(buf.len(), len);
});
