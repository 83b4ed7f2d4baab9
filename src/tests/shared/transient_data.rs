use itertools::Itertools;
use proptest::collection::vec;
use proptest::prelude::any;
use proptest::prelude::Just;
use proptest::prelude::Strategy;

use super::contract_address_from_seed;
use super::digest_from_seed;
use crate::protocol::kernel::claimed_length_array::ClaimedLengthArray;
use crate::protocol::kernel::note_hash_nullifier_linkage::NoteHashNullifierCounterMap;
use crate::protocol::kernel::side_effect::NoteHash;
use crate::protocol::kernel::side_effect::Nullifier;
use crate::protocol::kernel::side_effect::ReadRequest;
use crate::protocol::kernel::side_effect::ScopedNoteHash;
use crate::protocol::kernel::side_effect::ScopedNullifier;
use crate::protocol::kernel::side_effect::ScopedReadRequest;
use crate::protocol::kernel::transient_data_hints::build_transient_data_hints;
use crate::protocol::kernel::transient_data_hints::TransientDataHintError;
use crate::protocol::kernel::transient_data_hints::TransientDataIndexHints;

/// What happens to the `i`th note hash of a [`TransientDataScenario`].
///
/// Every note hash gets a nullifier of its own, emitted later by the same
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NoteHashFate {
    /// The linkage map pairs the note hash with its nullifier.
    pub linked: bool,

    /// The nullifier nullifies some other (siloed) value.
    pub siloed: bool,

    /// The note hash is read after it is emitted.
    pub note_hash_read: bool,

    /// The nullifier is read after it is emitted.
    pub nullifier_read: bool,
}

impl NoteHashFate {
    fn is_squashed(&self) -> bool {
        self.linked && !self.siloed && !self.note_hash_read && !self.nullifier_read
    }
}

/// Side effects of one transaction, together with the outcome squashing
/// should have.
#[derive(Debug, Clone)]
pub(crate) struct TransientDataScenario<const N: usize, const M: usize> {
    pub note_hashes: ClaimedLengthArray<ScopedNoteHash, N>,
    pub nullifiers: ClaimedLengthArray<ScopedNullifier, M>,
    pub future_note_hash_reads: Vec<ScopedReadRequest>,
    pub future_nullifier_reads: Vec<ScopedReadRequest>,
    pub note_hash_nullifier_counter_map: NoteHashNullifierCounterMap,

    fates: Vec<NoteHashFate>,

    /// `nullifier_order[k]` is the note hash whose nullifier sits at index
    /// `k`.
    nullifier_order: Vec<usize>,
}

impl<const N: usize, const M: usize> TransientDataScenario<N, M> {
    /// Lay out the side effects. Note hash `i` has counter `i + 1`, its
    /// nullifier has counter `100 + i`, reads come after all of them. Note
    /// hashes alternate between two contracts.
    ///
    /// # Panics
    ///
    /// Panics if there are more fates than fit in either array, or if
    /// `nullifier_order` is not a permutation of the note hash indices.
    pub(crate) fn new(fates: Vec<NoteHashFate>, nullifier_order: Vec<usize>) -> Self {
        assert!(fates.len() <= N && fates.len() <= M);
        assert_eq!(
            (0..fates.len()).collect_vec(),
            nullifier_order.iter().copied().sorted().collect_vec()
        );

        let mut note_hashes = vec![];
        let mut nullifiers_by_note_hash = vec![];
        let mut future_note_hash_reads = vec![];
        let mut future_nullifier_reads = vec![];
        let mut note_hash_nullifier_counter_map = NoteHashNullifierCounterMap::new();

        for (i, fate) in fates.iter().enumerate() {
            let seed = i as u64;
            let counter = i as u32;
            let contract_address = contract_address_from_seed(seed % 2);

            let note_hash_value = digest_from_seed(seed);
            let note_hash = NoteHash::new(note_hash_value, counter + 1).scope(contract_address);

            let nullified_note_hash = if fate.siloed {
                digest_from_seed(2000 + seed)
            } else {
                note_hash_value
            };
            let nullifier_value = digest_from_seed(1000 + seed);
            let nullifier = Nullifier::new(nullifier_value, counter + 100, nullified_note_hash)
                .scope(contract_address);

            if fate.linked {
                note_hash_nullifier_counter_map
                    .insert(counter + 1, counter + 100)
                    .unwrap();
            }
            if fate.note_hash_read {
                future_note_hash_reads
                    .push(ReadRequest::new(note_hash_value, counter + 200).scope(contract_address));
            }
            if fate.nullifier_read {
                future_nullifier_reads
                    .push(ReadRequest::new(nullifier_value, counter + 300).scope(contract_address));
            }

            note_hashes.push(note_hash);
            nullifiers_by_note_hash.push(nullifier);
        }

        let nullifiers = nullifier_order
            .iter()
            .map(|&i| nullifiers_by_note_hash[i])
            .collect_vec();

        Self {
            note_hashes: ClaimedLengthArray::from_slice(&note_hashes).unwrap(),
            nullifiers: ClaimedLengthArray::from_slice(&nullifiers).unwrap(),
            future_note_hash_reads,
            future_nullifier_reads,
            note_hash_nullifier_counter_map,
            fates,
            nullifier_order,
        }
    }

    pub(crate) fn build_hints(&self) -> Result<TransientDataIndexHints<N, M>, TransientDataHintError> {
        build_transient_data_hints(
            &self.note_hashes,
            &self.nullifiers,
            &self.future_note_hash_reads,
            &self.future_nullifier_reads,
            &self.note_hash_nullifier_counter_map,
        )
    }

    /// The `(note hash index, nullifier index)` pairs that must be squashed,
    /// in note hash order.
    pub(crate) fn expected_squashed_pairs(&self) -> Vec<(usize, usize)> {
        self.fates
            .iter()
            .enumerate()
            .filter(|(_, fate)| fate.is_squashed())
            .map(|(note_hash_index, _)| {
                let nullifier_index = self
                    .nullifier_order
                    .iter()
                    .position(|&i| i == note_hash_index)
                    .unwrap();
                (note_hash_index, nullifier_index)
            })
            .collect_vec()
    }
}

/// Scenarios with up to 8 note hashes, each with its own fate, and with the
/// nullifiers in random order.
pub(crate) fn transient_data_scenario() -> impl Strategy<Value = TransientDataScenario<8, 8>> {
    vec(
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
        0..=8,
    )
    .prop_map(|fates| {
        fates
            .into_iter()
            .map(
                |(linked, siloed, note_hash_read, nullifier_read)| NoteHashFate {
                    linked,
                    siloed,
                    note_hash_read,
                    nullifier_read,
                },
            )
            .collect_vec()
    })
    .prop_flat_map(|fates| {
        let nullifier_order = Just((0..fates.len()).collect_vec()).prop_shuffle();
        (Just(fates), nullifier_order)
    })
    .prop_map(|(fates, nullifier_order)| TransientDataScenario::new(fates, nullifier_order))
}
