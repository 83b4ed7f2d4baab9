use itertools::Itertools;

use super::digest_from_seed;
use crate::protocol::transaction::client_ivc_proof::ClientIvcProof;
use crate::protocol::transaction::encrypted_logs::EncryptedFunctionLogs;
use crate::protocol::transaction::encrypted_logs::EncryptedLog;
use crate::protocol::transaction::encrypted_logs::EncryptedTxLogs;
use crate::protocol::transaction::private_kernel_tail_data::PrivateKernelTailData;
use crate::protocol::transaction::Tx;

/// A transaction with `num_side_effects` note hashes and nullifiers, a
/// nonsensical proof, and one log per side effect. Deterministic in
/// `num_side_effects`.
pub(crate) fn mock_tx(num_side_effects: usize) -> Tx {
    let seeds = (0..num_side_effects as u64).collect_vec();
    let data = PrivateKernelTailData {
        note_hashes: seeds.iter().map(|&s| digest_from_seed(s)).collect_vec(),
        nullifiers: seeds
            .iter()
            .map(|&s| digest_from_seed(1000 + s))
            .collect_vec(),
        gas_used: 21 * num_side_effects as u64,
    };
    let client_ivc_proof = ClientIvcProof::new(vec![1, 2, 3], vec![0xde, 0xad, 0xbe, 0xef]);
    let encrypted_logs = EncryptedTxLogs {
        function_logs: seeds
            .iter()
            .map(|&s| EncryptedFunctionLogs {
                logs: vec![EncryptedLog {
                    data: s.to_be_bytes().to_vec(),
                    masked_contract_address: digest_from_seed(2000 + s),
                }],
            })
            .collect_vec(),
    };

    Tx::new(data, client_ivc_proof, encrypted_logs)
}
