//! Rules deciding whether a read request observes a given side effect.
//!
//! The matcher treats these as black boxes: a note hash or nullifier that is
//! observed by a later read request must not be squashed.

use super::side_effect::Ordered;
use super::side_effect::Scoped;
use super::side_effect::ScopedNoteHash;
use super::side_effect::ScopedNullifier;
use super::side_effect::ScopedReadRequest;

/// Decides whether `read` reads `item`.
pub trait ReadRequestValidity<T> {
    fn is_valid(&self, read: &ScopedReadRequest, item: &T) -> bool;
}

impl<T, F> ReadRequestValidity<T> for F
where
    F: Fn(&ScopedReadRequest, &T) -> bool,
{
    fn is_valid(&self, read: &ScopedReadRequest, item: &T) -> bool {
        self(read, item)
    }
}

/// A read observes an item if it was issued by the same contract, for the
/// same value, after the item was emitted.
fn reads_earlier_item<T: Scoped + Ordered>(read: &ScopedReadRequest, item: &T) -> bool {
    read.value() == item.value()
        && read.contract_address() == item.contract_address()
        && read.counter() > item.counter()
}

/// Validity of a read request against a note hash emitted in the same
/// transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteHashReadValidity;

impl ReadRequestValidity<ScopedNoteHash> for NoteHashReadValidity {
    fn is_valid(&self, read: &ScopedReadRequest, note_hash: &ScopedNoteHash) -> bool {
        reads_earlier_item(read, note_hash)
    }
}

/// Validity of a read request against a nullifier emitted in the same
/// transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullifierReadValidity;

impl ReadRequestValidity<ScopedNullifier> for NullifierReadValidity {
    fn is_valid(&self, read: &ScopedReadRequest, nullifier: &ScopedNullifier) -> bool {
        reads_earlier_item(read, nullifier)
    }
}
