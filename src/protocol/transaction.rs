pub mod client_ivc_proof;
pub mod encrypted_logs;
pub mod private_kernel_tail_data;
pub mod tx_hash;

#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use self::client_ivc_proof::ClientIvcProof;
use self::encrypted_logs::EncryptedTxLogs;
use self::private_kernel_tail_data::PrivateKernelTailData;
use self::tx_hash::TxHash;

/// Encoded transactions larger than this are rejected without decoding.
pub const MAX_TX_SIZE_IN_BYTES: usize = 4 * 1024 * 1024;

/// A private transaction as it is handed from the client to the network:
/// the public output of the kernel tail, the proof of the client's
/// execution, and the logs emitted along the way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct Tx {
    pub data: PrivateKernelTailData,

    pub client_ivc_proof: ClientIvcProof,

    pub encrypted_logs: EncryptedTxLogs,
}

#[derive(Debug, Error)]
pub enum TxDecodeError {
    #[error(
        "encoded transaction is {size} bytes, exceeding the limit of {MAX_TX_SIZE_IN_BYTES} bytes"
    )]
    TooLarge { size: usize },
    #[error("cannot decode transaction: {0}")]
    Bincode(#[from] bincode::Error),
}

impl Tx {
    pub fn new(
        data: PrivateKernelTailData,
        client_ivc_proof: ClientIvcProof,
        encrypted_logs: EncryptedTxLogs,
    ) -> Self {
        Self {
            data,
            client_ivc_proof,
            encrypted_logs,
        }
    }

    /// Identifies the transaction by its public data. Proof and logs do not
    /// contribute.
    pub fn tx_hash(&self) -> TxHash {
        self.data.hash()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxDecodeError> {
        if bytes.len() > MAX_TX_SIZE_IN_BYTES {
            return Err(TxDecodeError::TooLarge { size: bytes.len() });
        }

        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use proptest::prop_assert_eq;
    use proptest_arbitrary_interop::arb;
    use test_strategy::proptest;

    use super::*;
    use crate::tests::shared::mock_tx::mock_tx;

    /// Round trip through bytes must preserve every part of the transaction.
    fn assert_same_parts(actual: &Tx, expected: &Tx) {
        assert_eq!(expected.data, actual.data);
        assert_eq!(expected.client_ivc_proof, actual.client_ivc_proof);
        assert_eq!(expected.encrypted_logs, actual.encrypted_logs);
    }

    #[test]
    fn mock_tx_survives_byte_round_trip() {
        let tx = mock_tx(3);
        let bytes = tx.to_bytes().unwrap();
        let decoded = Tx::from_bytes(&bytes).unwrap();
        assert_same_parts(&decoded, &tx);
        assert_eq!(tx.tx_hash(), decoded.tx_hash());
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let bytes = vec![0u8; MAX_TX_SIZE_IN_BYTES + 1];
        assert!(matches!(
            Tx::from_bytes(&bytes),
            Err(TxDecodeError::TooLarge { size }) if size == MAX_TX_SIZE_IN_BYTES + 1
        ));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let bytes = mock_tx(1).to_bytes().unwrap();
        assert!(matches!(
            Tx::from_bytes(&bytes[..bytes.len() - 1]),
            Err(TxDecodeError::Bincode(_))
        ));
    }

    #[test]
    fn tx_hash_ignores_proof_and_logs() {
        let tx = mock_tx(2);
        let mut other = mock_tx(2);
        other.client_ivc_proof = ClientIvcProof::empty();
        other.encrypted_logs = EncryptedTxLogs::default();
        assert_eq!(tx.tx_hash(), other.tx_hash());

        other.data.gas_used += 1;
        assert_ne!(tx.tx_hash(), other.tx_hash());
    }

    #[proptest(cases = 20)]
    fn arbitrary_tx_survives_byte_round_trip(#[strategy(arb::<Tx>())] tx: Tx) {
        let bytes = tx.to_bytes().unwrap();
        let decoded = Tx::from_bytes(&bytes).unwrap();
        prop_assert_eq!(&tx.data, &decoded.data);
        prop_assert_eq!(&tx.client_ivc_proof, &decoded.client_ivc_proof);
        prop_assert_eq!(&tx.encrypted_logs, &decoded.encrypted_logs);
    }
}
