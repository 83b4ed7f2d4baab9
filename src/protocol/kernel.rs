//! Building blocks for the private kernel reset: the side effects emitted by
//! a private execution, and the hints that let the reset circuit squash note
//! hashes that are nullified within the same transaction.

pub mod claimed_length_array;
pub mod note_hash_nullifier_linkage;
pub mod read_request_validity;
pub mod scoped_value_cache;
pub mod side_effect;
pub mod transient_data_hints;
pub mod transient_data_squashing;

/// Capacity of the note hash array handed to the reset circuit.
pub const MAX_NOTE_HASHES_PER_TX: usize = 64;

/// Capacity of the nullifier array handed to the reset circuit.
pub const MAX_NULLIFIERS_PER_TX: usize = 64;
