//! Re-exports the most commonly-needed APIs of kernel-hints.
//!
//! This module is intended to be wildcard-imported, _i.e._,
//! `use kernel_hints::prelude::*;`.

pub use tasm_lib;
pub use tasm_lib::prelude::triton_vm;
pub use tasm_lib::prelude::twenty_first;

pub use crate::protocol::kernel::claimed_length_array::ClaimedLengthArray;
pub use crate::protocol::kernel::note_hash_nullifier_linkage::NoteHashNullifierCounterMap;
pub use crate::protocol::kernel::side_effect::ContractAddress;
pub use crate::protocol::kernel::side_effect::NoteHash;
pub use crate::protocol::kernel::side_effect::Nullifier;
pub use crate::protocol::kernel::side_effect::ReadRequest;
pub use crate::protocol::kernel::side_effect::ScopedNoteHash;
pub use crate::protocol::kernel::side_effect::ScopedNullifier;
pub use crate::protocol::kernel::side_effect::ScopedReadRequest;
pub use crate::protocol::kernel::transient_data_hints::build_transient_data_hints;
pub use crate::protocol::kernel::transient_data_hints::TransientDataHintError;
pub use crate::protocol::kernel::transient_data_hints::TransientDataIndexHints;
pub use crate::protocol::kernel::transient_data_hints::TransientDataMatcher;
pub use crate::protocol::kernel::transient_data_squashing::squash_transient_data;
pub use crate::protocol::kernel::transient_data_squashing::validate_transient_data_hints;
pub use crate::protocol::kernel::transient_data_squashing::SquashedSideEffects;
pub use crate::protocol::transaction::Tx;
