use std::fmt::Display;

#[cfg(any(test, feature = "arbitrary-impls"))]
use arbitrary::Arbitrary;
use serde::Deserialize;
use serde::Serialize;
use tasm_lib::prelude::Digest;

/// Position of a side effect in the execution order of a transaction.
///
/// Counters are assigned when the side effect is emitted and are unique
/// within a transaction. Zero is reserved for padding.
pub type Counter = u32;

/// Address of the contract that emitted a side effect.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ContractAddress(pub Digest);

impl ContractAddress {
    pub fn new(digest: Digest) -> Self {
        Self(digest)
    }
}

impl Display for ContractAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ContractAddress> for Digest {
    fn from(address: ContractAddress) -> Self {
        address.0
    }
}

/// Side effects that carry an execution counter.
pub trait Ordered {
    fn counter(&self) -> Counter;
}

/// Side effects that carry a value and the address of the contract that
/// emitted them.
pub trait Scoped {
    fn value(&self) -> Digest;
    fn contract_address(&self) -> ContractAddress;
}

/// Items of fixed-capacity arrays that can be told apart from padding.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct NoteHash {
    pub value: Digest,
    pub counter: Counter,
}

impl NoteHash {
    pub fn new(value: Digest, counter: Counter) -> Self {
        Self { value, counter }
    }

    pub fn scope(self, contract_address: ContractAddress) -> ScopedNoteHash {
        ScopedNoteHash {
            note_hash: self,
            contract_address,
        }
    }
}

/// A note hash emitted during private execution, together with the address
/// of the contract that emitted it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ScopedNoteHash {
    pub note_hash: NoteHash,
    pub contract_address: ContractAddress,
}

impl Ordered for ScopedNoteHash {
    fn counter(&self) -> Counter {
        self.note_hash.counter
    }
}

impl Scoped for ScopedNoteHash {
    fn value(&self) -> Digest {
        self.note_hash.value
    }

    fn contract_address(&self) -> ContractAddress {
        self.contract_address
    }
}

impl IsEmpty for ScopedNoteHash {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for ScopedNoteHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "note hash {} (counter {}, contract {})",
            self.note_hash.value, self.note_hash.counter, self.contract_address
        )
    }
}

/// A nullifier.
///
/// `note_hash` is the note hash this nullifier claims to consume. It is zero
/// when the nullifier does not consume a note, and it can be the siloed form
/// of a note hash rather than the value emitted by the contract.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct Nullifier {
    pub value: Digest,
    pub counter: Counter,
    pub note_hash: Digest,
}

impl Nullifier {
    pub fn new(value: Digest, counter: Counter, note_hash: Digest) -> Self {
        Self {
            value,
            counter,
            note_hash,
        }
    }

    pub fn scope(self, contract_address: ContractAddress) -> ScopedNullifier {
        ScopedNullifier {
            nullifier: self,
            contract_address,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ScopedNullifier {
    pub nullifier: Nullifier,
    pub contract_address: ContractAddress,
}

impl ScopedNullifier {
    /// The note hash this nullifier claims to consume.
    pub fn nullified_note_hash(&self) -> Digest {
        self.nullifier.note_hash
    }
}

impl Ordered for ScopedNullifier {
    fn counter(&self) -> Counter {
        self.nullifier.counter
    }
}

impl Scoped for ScopedNullifier {
    fn value(&self) -> Digest {
        self.nullifier.value
    }

    fn contract_address(&self) -> ContractAddress {
        self.contract_address
    }
}

impl IsEmpty for ScopedNullifier {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Display for ScopedNullifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nullifier {} (counter {}, contract {}, nullifies {})",
            self.nullifier.value,
            self.nullifier.counter,
            self.contract_address,
            self.nullifier.note_hash
        )
    }
}

/// A request to read a previously emitted note hash or nullifier.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ReadRequest {
    pub value: Digest,
    pub counter: Counter,
}

impl ReadRequest {
    pub fn new(value: Digest, counter: Counter) -> Self {
        Self { value, counter }
    }

    pub fn scope(self, contract_address: ContractAddress) -> ScopedReadRequest {
        ScopedReadRequest {
            read_request: self,
            contract_address,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary-impls"), derive(Arbitrary))]
pub struct ScopedReadRequest {
    pub read_request: ReadRequest,
    pub contract_address: ContractAddress,
}

impl Ordered for ScopedReadRequest {
    fn counter(&self) -> Counter {
        self.read_request.counter
    }
}

impl Scoped for ScopedReadRequest {
    fn value(&self) -> Digest {
        self.read_request.value
    }

    fn contract_address(&self) -> ContractAddress {
        self.contract_address
    }
}

impl IsEmpty for ScopedReadRequest {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The two kinds of read requests. Which kind a request is follows from the
/// list it was collected into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum ReadRequestKind {
    #[strum(to_string = "note hash read")]
    NoteHash,
    #[strum(to_string = "nullifier read")]
    Nullifier,
}
