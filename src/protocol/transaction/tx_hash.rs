use std::fmt::Display;

#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Serialize;
use tasm_lib::prelude::Digest;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct TxHash(Digest);

impl TxHash {
    pub fn new(digest: Digest) -> Self {
        Self(digest)
    }
}

impl Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl From<TxHash> for Digest {
    fn from(value: TxHash) -> Self {
        value.0
    }
}
