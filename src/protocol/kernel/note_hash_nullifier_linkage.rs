use std::collections::HashMap;
use std::collections::HashSet;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::side_effect::Counter;

/// Links the counter of a note hash to the counter of the nullifier that
/// consumes it, as recorded while the transaction was executed.
///
/// The map is injective: no two note hashes are linked to the same
/// nullifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<Counter, Counter>", into = "HashMap<Counter, Counter>")]
pub struct NoteHashNullifierCounterMap {
    nullifier_counters: HashMap<Counter, Counter>,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LinkageError {
    #[error(
        "note hash {note_hash_counter} is already linked to nullifier {linked_nullifier_counter}"
    )]
    NoteHashAlreadyLinked {
        note_hash_counter: Counter,
        linked_nullifier_counter: Counter,
    },
    #[error("nullifier {nullifier_counter} is already linked to another note hash")]
    NullifierAlreadyLinked { nullifier_counter: Counter },
}

impl NoteHashNullifierCounterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the note hash with counter `note_hash_counter` is
    /// consumed by the nullifier with counter `nullifier_counter`.
    ///
    /// Inserting an existing link again is a no-op.
    pub fn insert(
        &mut self,
        note_hash_counter: Counter,
        nullifier_counter: Counter,
    ) -> Result<(), LinkageError> {
        if let Some(&linked_nullifier_counter) = self.nullifier_counters.get(&note_hash_counter) {
            if linked_nullifier_counter == nullifier_counter {
                return Ok(());
            }
            return Err(LinkageError::NoteHashAlreadyLinked {
                note_hash_counter,
                linked_nullifier_counter,
            });
        }

        if self
            .nullifier_counters
            .values()
            .any(|&counter| counter == nullifier_counter)
        {
            return Err(LinkageError::NullifierAlreadyLinked { nullifier_counter });
        }

        self.nullifier_counters
            .insert(note_hash_counter, nullifier_counter);
        Ok(())
    }

    /// The counter of the nullifier linked to the given note hash, if any.
    pub fn get(&self, note_hash_counter: Counter) -> Option<Counter> {
        self.nullifier_counters.get(&note_hash_counter).copied()
    }

    pub fn len(&self) -> usize {
        self.nullifier_counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nullifier_counters.is_empty()
    }

    /// All `(note hash counter, nullifier counter)` links, in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (Counter, Counter)> + '_ {
        self.nullifier_counters
            .iter()
            .map(|(&note_hash_counter, &nullifier_counter)| (note_hash_counter, nullifier_counter))
    }
}

impl TryFrom<HashMap<Counter, Counter>> for NoteHashNullifierCounterMap {
    type Error = LinkageError;

    fn try_from(nullifier_counters: HashMap<Counter, Counter>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(nullifier_counters.len());
        for &nullifier_counter in nullifier_counters.values() {
            if !seen.insert(nullifier_counter) {
                return Err(LinkageError::NullifierAlreadyLinked { nullifier_counter });
            }
        }

        Ok(Self { nullifier_counters })
    }
}

impl From<NoteHashNullifierCounterMap> for HashMap<Counter, Counter> {
    fn from(map: NoteHashNullifierCounterMap) -> Self {
        map.nullifier_counters
    }
}
