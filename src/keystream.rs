//! Derived keystream shared by the mirrored-edit and rendering paths.
//!
//! When two plaintexts are XOR-ed with the same repeating keystream, the
//! byte-wise XOR of the two ciphertexts cancels the key entirely and leaves
//! `p1[i] ^ p2[i]` at every aligned position. That derived sequence is what
//! makes crib dragging work: a correct guess for one plaintext byte pins
//! down the other via one more XOR.
//!
//! The keystream is computed once at load time over the overlapping prefix
//! of the two ciphertexts and never mutated afterwards.

/// Bits set in `p1[i] ^ p2[i]` when an uppercase letter meets punctuation.
///
/// ASCII uppercase letters live in `0x41..=0x5A` and common punctuation in
/// `0x21..=0x2F`, so their XOR carries both `0x20` and `0x40`. Columns where
/// the derived stream has both bits set tend to mark a word or sentence
/// boundary in one of the plaintexts; a useful visual cue, not a proof.
pub const BOUNDARY_BITS: u8 = 0x60;

/// Immutable byte-wise XOR of the two ciphertexts.
///
/// Length is the shorter ciphertext's length; positions past it have no
/// keystream coverage and can never be mirrored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keystream {
    bytes: Vec<u8>,
}

impl Keystream {
    /// Derive the keystream from the two raw ciphertexts.
    #[must_use]
    pub fn derive(ct_a: &[u8], ct_b: &[u8]) -> Self {
        Self {
            bytes: ct_a.iter().zip(ct_b).map(|(&a, &b)| a ^ b).collect(),
        }
    }

    /// Get the covered length, `min(len(ct_a), len(ct_b))`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if there is no overlap at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Get the keystream byte at `index`, or `None` past coverage.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// View the raw derived bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check whether `index` is flagged by the boundary heuristic.
    ///
    /// Returns `false` past coverage.
    #[must_use]
    pub fn boundary_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(is_boundary)
    }
}

/// Boundary heuristic test: both `0x20` and `0x40` set.
#[must_use]
pub fn is_boundary(byte: u8) -> bool {
    byte & BOUNDARY_BITS == BOUNDARY_BITS
}
