#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Serialize;

/// Opaque proof of the client's private execution, along with the
/// verification key it is checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, GetSize)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ClientIvcProof {
    pub verification_key: Vec<u8>,
    pub proof: Vec<u8>,
}

impl ClientIvcProof {
    pub fn new(verification_key: Vec<u8>, proof: Vec<u8>) -> Self {
        Self {
            verification_key,
            proof,
        }
    }

    /// Placeholder used where no proof has been produced yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.verification_key.is_empty() && self.proof.is_empty()
    }
}
