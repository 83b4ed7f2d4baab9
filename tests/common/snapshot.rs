use std::fs;
use std::path::PathBuf;

use kernel_hints::application::batch::TransactionSideEffects;
use kernel_hints::prelude::ContractAddress;
use kernel_hints::prelude::NoteHash;
use kernel_hints::prelude::NoteHashNullifierCounterMap;
use kernel_hints::prelude::Nullifier;
use tasm_lib::prelude::Digest;
use tasm_lib::prelude::Tip5;

pub fn digest(seed: u64) -> Digest {
    Tip5::hash(&seed)
}

pub fn contract(seed: u64) -> ContractAddress {
    ContractAddress::new(digest(1_000_000 + seed))
}

/// A note hash with counter 1 and a nullifier with counter 2, both emitted
/// by the same contract. `linked` decides whether the nullifier consumes
/// the note hash.
pub fn transient_pair(label: &str, linked: bool) -> TransactionSideEffects {
    let address = contract(0);
    let note_hash = NoteHash::new(digest(1), 1).scope(address);
    let nullifier = Nullifier::new(digest(2), 2, digest(1)).scope(address);

    let mut note_hash_nullifier_counter_map = NoteHashNullifierCounterMap::new();
    if linked {
        note_hash_nullifier_counter_map
            .insert(1, 2)
            .expect("fresh map accepts any link");
    }

    TransactionSideEffects {
        label: Some(label.to_string()),
        note_hashes: vec![note_hash],
        nullifiers: vec![nullifier],
        note_hash_nullifier_counter_map,
        gas_used: 42,
        ..Default::default()
    }
}

/// Like [`transient_pair`] but with the nullifier emitted first, which no
/// correct execution produces.
pub fn nullifier_before_note_hash(label: &str) -> TransactionSideEffects {
    let mut tx = transient_pair(label, false);
    tx.note_hashes[0].note_hash.counter = 3;

    let mut note_hash_nullifier_counter_map = NoteHashNullifierCounterMap::new();
    note_hash_nullifier_counter_map
        .insert(3, 2)
        .expect("fresh map accepts any link");
    tx.note_hash_nullifier_counter_map = note_hash_nullifier_counter_map;

    tx
}

/// A file path unique to this process and `name`, in the temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kernel-hints-{}-{name}", std::process::id()))
}

pub fn write_snapshot(name: &str, transactions: &[TransactionSideEffects]) -> PathBuf {
    let path = temp_path(name);
    let json = serde_json::to_string_pretty(transactions).expect("snapshot serializes");
    fs::write(&path, json).expect("temp dir is writable");
    path
}
