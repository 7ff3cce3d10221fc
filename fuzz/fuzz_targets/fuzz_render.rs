//! Fuzz target for the interleaved renderer.
//!
//! Rendering is pure and total: any buffer contents, toggles, and width
//! must produce lines without panicking, identically on repeat calls.

#![no_main]

use arbitrary::Arbitrary;
use cribdrag::{BufferId, Session, Toggle};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct RenderInput {
    ct_a: Vec<u8>,
    ct_b: Vec<u8>,
    guess: Vec<u8>,
    guess_at: u16,
    pipes: bool,
    offsets: bool,
    width: u16,
}

fuzz_target!(|input: RenderInput| {
    let mut session = Session::load(&input.ct_a, &input.ct_b);
    let at = usize::from(input.guess_at);
    session.edit(BufferId::Top, at..at, &input.guess);
    session.set_toggle(Toggle::Pipes, input.pipes);
    session.set_toggle(Toggle::Offsets, input.offsets);

    let width = usize::from(input.width) % 512;
    let first = session.render(width);
    let second = session.render(width);
    assert_eq!(first, second);

    if width > 0 {
        use cribdrag::RenderOptions;
        let group = 3
            + usize::from(session.options().contains(RenderOptions::PIPES))
            + usize::from(session.options().contains(RenderOptions::OFFSETS));
        let maxlen = session.top().len().max(session.bottom().len());
        assert_eq!(first.len(), maxlen.div_ceil(width) * group);
    }
});
