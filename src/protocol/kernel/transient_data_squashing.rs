//! Checking squashing hints and applying them.
//!
//! [`validate_transient_data_hints`] performs the checks the reset circuit
//! performs on the hints it is given. Hints built with
//! [`build_transient_data_hints`](super::transient_data_hints::build_transient_data_hints)
//! always pass.

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::claimed_length_array::ClaimedLengthArray;
use super::side_effect::Counter;
use super::side_effect::Ordered;
use super::side_effect::Scoped;
use super::side_effect::ScopedNoteHash;
use super::side_effect::ScopedNullifier;
use super::transient_data_hints::TransientDataIndexHints;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransientDataValidationError {
    #[error("padding note hash slot {note_hash_index} is hinted to a nullifier")]
    NoteHashPaddingHinted { note_hash_index: usize },
    #[error("padding nullifier slot {nullifier_index} is hinted to a note hash")]
    NullifierPaddingHinted { nullifier_index: usize },
    #[error("note hash {note_hash_index} is hinted to nullifier index {nullifier_index}, which is out of range")]
    NullifierIndexOutOfRange {
        note_hash_index: usize,
        nullifier_index: u32,
    },
    #[error("nullifier {nullifier_index} is hinted to note hash index {note_hash_index}, which is out of range")]
    NoteHashIndexOutOfRange {
        nullifier_index: usize,
        note_hash_index: u32,
    },
    #[error("hint pairing note hash {note_hash_index} with nullifier {nullifier_index} is not mirrored")]
    Asymmetric {
        note_hash_index: usize,
        nullifier_index: usize,
    },
    #[error("squashing nullifier (counter {nullifier_counter}) does not come after note hash (counter {note_hash_counter})")]
    NullifierNotAfterNoteHash {
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    },
    #[error("squashed note hash (counter {note_hash_counter}) and nullifier (counter {nullifier_counter}) belong to different contracts")]
    ContractAddressMismatch {
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    },
    #[error("squashing nullifier (counter {nullifier_counter}) does not nullify note hash (counter {note_hash_counter})")]
    NullifiedNoteHashMismatch {
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    },
}

/// The side effects that remain after squashing, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquashedSideEffects {
    pub note_hashes: Vec<ScopedNoteHash>,
    pub nullifiers: Vec<ScopedNullifier>,
}

/// Check that `hints` describe a valid squashing of the given side effects.
///
/// # Errors
///
/// Returns the first violated condition:
///  - hints on padding slots,
///  - indices outside the active ranges,
///  - pairings that are not mirrored,
///  - squashed pairs that are out of order, belong to different contracts,
///    or where the nullifier does not nullify the note hash's value.
pub fn validate_transient_data_hints<const N: usize, const M: usize>(
    note_hashes: &ClaimedLengthArray<ScopedNoteHash, N>,
    nullifiers: &ClaimedLengthArray<ScopedNullifier, M>,
    hints: &TransientDataIndexHints<N, M>,
) -> Result<(), TransientDataValidationError> {
    let nullifier_indexes = hints.nullifier_indexes_for_note_hashes();
    let note_hash_indexes = hints.note_hash_indexes_for_nullifiers();

    for (note_hash_index, &nullifier_index) in nullifier_indexes.iter().enumerate() {
        if nullifier_index == TransientDataIndexHints::<N, M>::NO_NULLIFIER {
            continue;
        }
        let Some(note_hash) = note_hashes.get(note_hash_index) else {
            return Err(TransientDataValidationError::NoteHashPaddingHinted { note_hash_index });
        };
        let Some(nullifier) = nullifiers.get(nullifier_index as usize) else {
            return Err(TransientDataValidationError::NullifierIndexOutOfRange {
                note_hash_index,
                nullifier_index,
            });
        };
        if note_hash_indexes[nullifier_index as usize] != note_hash_index as u32 {
            return Err(TransientDataValidationError::Asymmetric {
                note_hash_index,
                nullifier_index: nullifier_index as usize,
            });
        }

        check_squashed_pair(note_hash, nullifier)?;
    }

    for (nullifier_index, &note_hash_index) in note_hash_indexes.iter().enumerate() {
        if note_hash_index == TransientDataIndexHints::<N, M>::NO_NOTE_HASH {
            continue;
        }
        if nullifier_index >= nullifiers.length() {
            return Err(TransientDataValidationError::NullifierPaddingHinted { nullifier_index });
        }
        if note_hash_index as usize >= note_hashes.length() {
            return Err(TransientDataValidationError::NoteHashIndexOutOfRange {
                nullifier_index,
                note_hash_index,
            });
        }
        if nullifier_indexes[note_hash_index as usize] != nullifier_index as u32 {
            return Err(TransientDataValidationError::Asymmetric {
                note_hash_index: note_hash_index as usize,
                nullifier_index,
            });
        }
    }

    Ok(())
}

fn check_squashed_pair(
    note_hash: &ScopedNoteHash,
    nullifier: &ScopedNullifier,
) -> Result<(), TransientDataValidationError> {
    let note_hash_counter = note_hash.counter();
    let nullifier_counter = nullifier.counter();

    if nullifier_counter <= note_hash_counter {
        return Err(TransientDataValidationError::NullifierNotAfterNoteHash {
            note_hash_counter,
            nullifier_counter,
        });
    }
    if nullifier.contract_address() != note_hash.contract_address() {
        return Err(TransientDataValidationError::ContractAddressMismatch {
            note_hash_counter,
            nullifier_counter,
        });
    }
    if nullifier.nullified_note_hash() != note_hash.value() {
        return Err(TransientDataValidationError::NullifiedNoteHashMismatch {
            note_hash_counter,
            nullifier_counter,
        });
    }

    Ok(())
}

/// Drop the squashed note hashes and nullifiers.
///
/// The hints are validated first; the inputs are not modified.
pub fn squash_transient_data<const N: usize, const M: usize>(
    note_hashes: &ClaimedLengthArray<ScopedNoteHash, N>,
    nullifiers: &ClaimedLengthArray<ScopedNullifier, M>,
    hints: &TransientDataIndexHints<N, M>,
) -> Result<SquashedSideEffects, TransientDataValidationError> {
    validate_transient_data_hints(note_hashes, nullifiers, hints)?;

    let kept_note_hashes = note_hashes
        .iter()
        .enumerate()
        .filter(|&(index, _)| hints.nullifier_index_for_note_hash(index).is_none())
        .map(|(_, &note_hash)| note_hash)
        .collect_vec();
    let kept_nullifiers = nullifiers
        .iter()
        .enumerate()
        .filter(|&(index, _)| hints.note_hash_index_for_nullifier(index).is_none())
        .map(|(_, &nullifier)| nullifier)
        .collect_vec();

    debug!(
        "squashed {} note hashes and {} nullifiers",
        note_hashes.length() - kept_note_hashes.len(),
        nullifiers.length() - kept_nullifiers.len()
    );

    Ok(SquashedSideEffects {
        note_hashes: kept_note_hashes,
        nullifiers: kept_nullifiers,
    })
}
