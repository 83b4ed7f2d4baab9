//! Hints telling the private kernel reset which note hashes are nullified
//! within the same transaction, and by which nullifier.
//!
//! A note hash and its nullifier can both be dropped ("squashed") from the
//! public output of a transaction when:
//!  - the note hash is linked to the nullifier by the execution trace,
//!  - the nullifier nullifies exactly the value of the note hash (not a
//!    siloed version of it), and
//!  - neither of them is read later on in the transaction.
//!
//! The reset circuit checks every hint it is given, so a bad hint makes
//! proving fail. Inconsistencies between the linkage map and the side effects
//! are reported as [`TransientDataHintError`]s.

use std::collections::HashMap;

use itertools::Itertools;
use serde::ser::SerializeStruct;
use serde::Serialize;
use serde::Serializer;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use super::claimed_length_array::ClaimedLengthArray;
use super::note_hash_nullifier_linkage::NoteHashNullifierCounterMap;
use super::read_request_validity::NoteHashReadValidity;
use super::read_request_validity::NullifierReadValidity;
use super::read_request_validity::ReadRequestValidity;
use super::scoped_value_cache::ScopedValueCache;
use super::side_effect::Counter;
use super::side_effect::Ordered;
use super::side_effect::ReadRequestKind;
use super::side_effect::Scoped;
use super::side_effect::ScopedNoteHash;
use super::side_effect::ScopedNullifier;
use super::side_effect::ScopedReadRequest;

/// The linkage map contradicts the side effects it links. This points to a
/// bug in whatever produced the map, never to a bad user input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransientDataHintError {
    #[error(
        "hinted nullifier (counter {nullifier_counter}) does not come after \
        note hash (counter {note_hash_counter})"
    )]
    NullifierNotAfterNoteHash {
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    },
    #[error(
        "contract address of hinted nullifier (counter {nullifier_counter}) does not \
        match that of note hash (counter {note_hash_counter})"
    )]
    ContractAddressMismatch {
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    },
}

/// For each of the `N` note hash slots, the index of the nullifier that
/// squashes it, and for each of the `M` nullifier slots, the index of the
/// note hash it squashes.
///
/// Unmatched note hash slots hold `M`; unmatched nullifier slots hold `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientDataIndexHints<const N: usize, const M: usize> {
    nullifier_indexes_for_note_hashes: [u32; N],
    note_hash_indexes_for_nullifiers: [u32; M],
}

impl<const N: usize, const M: usize> TransientDataIndexHints<N, M> {
    /// Marks a note hash slot without a squashing nullifier.
    pub const NO_NULLIFIER: u32 = M as u32;

    /// Marks a nullifier slot that squashes no note hash.
    pub const NO_NOTE_HASH: u32 = N as u32;

    /// Hints in which nothing is squashed.
    pub fn unmatched() -> Self {
        Self {
            nullifier_indexes_for_note_hashes: [Self::NO_NULLIFIER; N],
            note_hash_indexes_for_nullifiers: [Self::NO_NOTE_HASH; M],
        }
    }

    /// Wrap hints that were produced elsewhere, _e.g._, read back from a
    /// prover input. They are not checked; see
    /// [`validate_transient_data_hints`](super::transient_data_squashing::validate_transient_data_hints).
    pub fn from_raw_parts(
        nullifier_indexes_for_note_hashes: [u32; N],
        note_hash_indexes_for_nullifiers: [u32; M],
    ) -> Self {
        Self {
            nullifier_indexes_for_note_hashes,
            note_hash_indexes_for_nullifiers,
        }
    }

    pub fn nullifier_indexes_for_note_hashes(&self) -> &[u32; N] {
        &self.nullifier_indexes_for_note_hashes
    }

    pub fn note_hash_indexes_for_nullifiers(&self) -> &[u32; M] {
        &self.note_hash_indexes_for_nullifiers
    }

    /// Index of the nullifier squashing the note hash at `note_hash_index`.
    pub fn nullifier_index_for_note_hash(&self, note_hash_index: usize) -> Option<usize> {
        self.nullifier_indexes_for_note_hashes
            .get(note_hash_index)
            .filter(|&&index| index != Self::NO_NULLIFIER)
            .map(|&index| index as usize)
    }

    /// Index of the note hash squashed by the nullifier at `nullifier_index`.
    pub fn note_hash_index_for_nullifier(&self, nullifier_index: usize) -> Option<usize> {
        self.note_hash_indexes_for_nullifiers
            .get(nullifier_index)
            .filter(|&&index| index != Self::NO_NOTE_HASH)
            .map(|&index| index as usize)
    }

    /// All `(note hash index, nullifier index)` pairs that are squashed, in
    /// note hash order.
    pub fn squashed_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..N).filter_map(|note_hash_index| {
            self.nullifier_index_for_note_hash(note_hash_index)
                .map(|nullifier_index| (note_hash_index, nullifier_index))
        })
    }

    pub fn num_squashed(&self) -> usize {
        self.squashed_pairs().count()
    }

    fn record_match(&mut self, note_hash_index: usize, nullifier_index: usize) {
        self.nullifier_indexes_for_note_hashes[note_hash_index] = nullifier_index as u32;
        self.note_hash_indexes_for_nullifiers[nullifier_index] = note_hash_index as u32;
    }
}

impl<const N: usize, const M: usize> Default for TransientDataIndexHints<N, M> {
    fn default() -> Self {
        Self::unmatched()
    }
}

impl<const N: usize, const M: usize> Serialize for TransientDataIndexHints<N, M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TransientDataIndexHints", 2)?;
        state.serialize_field(
            "nullifier_indexes_for_note_hashes",
            self.nullifier_indexes_for_note_hashes.as_slice(),
        )?;
        state.serialize_field(
            "note_hash_indexes_for_nullifiers",
            self.note_hash_indexes_for_nullifiers.as_slice(),
        )?;
        state.end()
    }
}

/// Matches note hashes to the nullifiers squashing them.
///
/// The rules deciding whether a read request observes a note hash or a
/// nullifier are pluggable; [`TransientDataMatcher::new`] uses the standard
/// ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransientDataMatcher<NR = NoteHashReadValidity, LR = NullifierReadValidity> {
    note_hash_read_validity: NR,
    nullifier_read_validity: LR,
}

impl TransientDataMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<NR, LR> TransientDataMatcher<NR, LR>
where
    NR: ReadRequestValidity<ScopedNoteHash>,
    LR: ReadRequestValidity<ScopedNullifier>,
{
    pub fn with_read_request_validity(note_hash_read_validity: NR, nullifier_read_validity: LR) -> Self {
        Self {
            note_hash_read_validity,
            nullifier_read_validity,
        }
    }

    /// Build the squashing hints for one transaction in a single pass over
    /// its note hashes.
    ///
    /// Only the active ranges of `note_hashes` and `nullifiers` are looked at.
    /// A note hash linked to a nullifier that is not in `nullifiers` is left
    /// alone; the nullifier may be emitted by a later part of the
    /// transaction.
    ///
    /// # Errors
    ///
    /// Fails if the linkage map pairs a note hash with a nullifier that does
    /// not come after it, or that was emitted by a different contract.
    pub fn build_hints<const N: usize, const M: usize>(
        &self,
        note_hashes: &ClaimedLengthArray<ScopedNoteHash, N>,
        nullifiers: &ClaimedLengthArray<ScopedNullifier, M>,
        future_note_hash_reads: &[ScopedReadRequest],
        future_nullifier_reads: &[ScopedReadRequest],
        note_hash_nullifier_counter_map: &NoteHashNullifierCounterMap,
    ) -> Result<TransientDataIndexHints<N, M>, TransientDataHintError> {
        let future_note_hash_reads = ScopedValueCache::new(future_note_hash_reads);
        let future_nullifier_reads = ScopedValueCache::new(future_nullifier_reads);
        let nullifier_indexes: HashMap<Counter, usize> = nullifiers
            .iter()
            .enumerate()
            .map(|(index, nullifier)| (nullifier.counter(), index))
            .collect();

        let mut hints = TransientDataIndexHints::unmatched();
        for (note_hash_index, note_hash) in note_hashes.iter().enumerate() {
            let Some(nullifier_counter) = note_hash_nullifier_counter_map.get(note_hash.counter())
            else {
                continue;
            };

            if future_note_hash_reads
                .get(note_hash)
                .iter()
                .any(|&read| self.note_hash_read_validity.is_valid(read, note_hash))
            {
                trace!(
                    "{note_hash} is observed by a later {}; keeping it",
                    ReadRequestKind::NoteHash
                );
                continue;
            }

            let Some(&nullifier_index) = nullifier_indexes.get(&nullifier_counter) else {
                trace!("nullifier {nullifier_counter} linked to {note_hash} is not available yet");
                continue;
            };

            let nullifier = &nullifiers.active()[nullifier_index];
            if nullifier.counter() <= note_hash.counter() {
                return Err(TransientDataHintError::NullifierNotAfterNoteHash {
                    note_hash_counter: note_hash.counter(),
                    nullifier_counter: nullifier.counter(),
                });
            }
            if nullifier.contract_address() != note_hash.contract_address() {
                return Err(TransientDataHintError::ContractAddressMismatch {
                    note_hash_counter: note_hash.counter(),
                    nullifier_counter: nullifier.counter(),
                });
            }

            // A nullifier for the siloed note hash. Both are emitted; the
            // tail circuit matches the nullifier against the siloed value.
            if nullifier.nullified_note_hash() != note_hash.value() {
                trace!("{nullifier} nullifies a siloed version of {note_hash}; keeping both");
                continue;
            }

            if future_nullifier_reads
                .get(nullifier)
                .iter()
                .any(|&read| self.nullifier_read_validity.is_valid(read, nullifier))
            {
                trace!(
                    "{nullifier} is observed by a later {}; keeping it",
                    ReadRequestKind::Nullifier
                );
                continue;
            }

            hints.record_match(note_hash_index, nullifier_index);
        }

        debug!(
            "squashing {} of {} note hashes ({} linked); pairs: [{}]",
            hints.num_squashed(),
            note_hashes.length(),
            note_hash_nullifier_counter_map.len(),
            hints
                .squashed_pairs()
                .map(|(note_hash_index, nullifier_index)| format!(
                    "{note_hash_index}->{nullifier_index}"
                ))
                .join(", ")
        );

        Ok(hints)
    }
}

/// Build squashing hints using the standard read request validity rules.
///
/// See [`TransientDataMatcher::build_hints`].
pub fn build_transient_data_hints<const N: usize, const M: usize>(
    note_hashes: &ClaimedLengthArray<ScopedNoteHash, N>,
    nullifiers: &ClaimedLengthArray<ScopedNullifier, M>,
    future_note_hash_reads: &[ScopedReadRequest],
    future_nullifier_reads: &[ScopedReadRequest],
    note_hash_nullifier_counter_map: &NoteHashNullifierCounterMap,
) -> Result<TransientDataIndexHints<N, M>, TransientDataHintError> {
    TransientDataMatcher::new().build_hints(
        note_hashes,
        nullifiers,
        future_note_hash_reads,
        future_nullifier_reads,
        note_hash_nullifier_counter_map,
    )
}
