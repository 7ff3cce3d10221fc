//! `cribdrag` - dual-buffer editing core for XOR cryptanalysis
//!
//! When two plaintexts are encrypted by XOR against the same repeating
//! keystream, the XOR of the two ciphertexts equals the XOR of the two
//! plaintexts, so a correct guess for a fragment of one plaintext
//! immediately reveals the aligned fragment of the other. This crate is the
//! editing core for working that loop by hand: two fixed-length overlays of
//! guessed bytes, kept consistent through the derived keystream, with an
//! interleaved offset-annotated view for the analyst to read.
//!
//! The crate is toolkit-independent: any front end, from the bundled
//! line-driven CLI to a full terminal UI, drives a [`Session`] through the same
//! narrow API and pulls display lines from [`Session::render`].
//!
//! # Examples
//!
//! ```
//! use cribdrag::{BufferId, Session};
//!
//! let mut session = Session::load(b"\x48\x65\x6C\x6C\x6F", b"\x00\x04\x08\x0C\x10");
//!
//! // Guess "He" at the start of the top plaintext; the bottom overlay
//! // follows through the keystream.
//! session.edit(BufferId::Top, 0..0, b"He");
//! assert_eq!(session.bottom().get(0).unwrap().byte(), Some(0x00));
//! assert_eq!(session.bottom().get(1).unwrap().byte(), Some(0x04));
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow ByteBuffer in buffer module etc
#![allow(clippy::missing_errors_doc)] // Error conditions documented in prose
#![allow(clippy::missing_panics_doc)] // Core operations are total by design
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod buffer;
pub mod cell;
pub mod error;
pub mod event;
pub mod exchange;
pub mod keystream;
pub mod mirror;
pub mod render;
pub mod session;

// Re-export core types at crate root
pub use buffer::ByteBuffer;
pub use cell::Cell;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use exchange::exchange;
pub use keystream::{Keystream, is_boundary};
pub use mirror::mirrored_replace;
pub use render::{OFFSET_DELTA, RenderOptions, interleave};
pub use session::{BufferId, Session, Toggle};
