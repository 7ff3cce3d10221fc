//! Fuzz target for arbitrary session operation sequences.
//!
//! Drives a session with arbitrary edits, clears, exchanges, and toggles,
//! checking after every step that the XOR relation between the overlays
//! and the keystream still holds and that the buffer lengths never move.

#![no_main]

use arbitrary::Arbitrary;
use cribdrag::{BufferId, Session, Toggle};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Edit {
        bottom: bool,
        start: u16,
        end: u16,
        bytes: Vec<u8>,
    },
    Clear {
        bottom: bool,
        start: u16,
        end: u16,
    },
    Exchange {
        start: u16,
        end: u16,
    },
    Toggle {
        pipes: bool,
        value: bool,
    },
}

#[derive(Arbitrary, Debug)]
struct SessionInput {
    ct_a: Vec<u8>,
    ct_b: Vec<u8>,
    ops: Vec<Op>,
}

fn id(bottom: bool) -> BufferId {
    if bottom { BufferId::Bottom } else { BufferId::Top }
}

fuzz_target!(|input: SessionInput| {
    let mut session = Session::load(&input.ct_a, &input.ct_b);

    for op in &input.ops {
        match op {
            Op::Edit {
                bottom,
                start,
                end,
                bytes,
            } => {
                session.edit(id(*bottom), usize::from(*start)..usize::from(*end), bytes);
            }
            Op::Clear { bottom, start, end } => {
                session.clear(id(*bottom), usize::from(*start)..usize::from(*end));
            }
            Op::Exchange { start, end } => {
                session.exchange(usize::from(*start)..usize::from(*end));
            }
            Op::Toggle { pipes, value } => {
                let toggle = if *pipes { Toggle::Pipes } else { Toggle::Offsets };
                session.set_toggle(toggle, *value);
            }
        }

        assert_eq!(session.top().len(), input.ct_a.len());
        assert_eq!(session.bottom().len(), input.ct_b.len());

        let ks = session.keystream();
        for i in 0..ks.len() {
            let top = session.top().get(i).unwrap();
            let bottom = session.bottom().get(i).unwrap();
            if let (Some(t), Some(b)) = (top.byte(), bottom.byte()) {
                assert_eq!(t ^ b, ks.get(i).unwrap());
            }
        }
    }
});
