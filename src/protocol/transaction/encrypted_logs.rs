#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Serialize;
use tasm_lib::prelude::Digest;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct EncryptedLog {
    pub data: Vec<u8>,

    /// The emitting contract's address, blinded so observers cannot link
    /// logs to contracts.
    pub masked_contract_address: Digest,
}

/// Logs emitted by a single function call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct EncryptedFunctionLogs {
    pub logs: Vec<EncryptedLog>,
}

/// Logs of a transaction, grouped by function call in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct EncryptedTxLogs {
    pub function_logs: Vec<EncryptedFunctionLogs>,
}

impl EncryptedTxLogs {
    pub fn num_logs(&self) -> usize {
        self.function_logs.iter().map(|f| f.logs.len()).sum()
    }

    pub fn num_log_bytes(&self) -> usize {
        self.function_logs
            .iter()
            .flat_map(|f| &f.logs)
            .map(|log| log.data.len())
            .sum()
    }
}
