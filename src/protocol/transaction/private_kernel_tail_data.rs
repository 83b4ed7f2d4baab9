#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use get_size2::GetSize;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use tasm_lib::prelude::Digest;
use tasm_lib::prelude::Tip5;
use tasm_lib::triton_vm::prelude::BFieldCodec;

use super::tx_hash::TxHash;
use crate::protocol::kernel::side_effect::Scoped;
use crate::protocol::kernel::transient_data_squashing::SquashedSideEffects;

/// Public output of the last private kernel. Note hashes and nullifiers are
/// siloed, i.e., bound to the address of the contract that emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, GetSize, BFieldCodec)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct PrivateKernelTailData {
    pub note_hashes: Vec<Digest>,
    pub nullifiers: Vec<Digest>,
    pub gas_used: u64,
}

fn silo<S: Scoped>(item: &S) -> Digest {
    Tip5::hash_pair(item.contract_address().into(), item.value())
}

impl PrivateKernelTailData {
    pub fn from_squashed_side_effects(squashed: &SquashedSideEffects, gas_used: u64) -> Self {
        Self {
            note_hashes: squashed.note_hashes.iter().map(silo).collect_vec(),
            nullifiers: squashed.nullifiers.iter().map(silo).collect_vec(),
            gas_used,
        }
    }

    pub fn hash(&self) -> TxHash {
        TxHash::new(Tip5::hash(self))
    }
}
