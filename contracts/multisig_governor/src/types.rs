use soroban_sdk::{contracttype, Address, Bytes, String, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Signers,
    Signer(Address),
    ExpirationTimeout,
    MinVotes,
    ValueAsset,
    ProposalCount,
    Proposal(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub submitter: Address,
    pub target: Address,
    pub value: i128,
    /// Human-readable signature of the call, e.g. "add_signer(Address)".
    /// Advisory only; never checked against `call_data`.
    pub func_signature: String,
    /// XDR of `(Symbol, Vec<Val>)`, or empty for a plain value transfer.
    pub call_data: Bytes,
    pub description: String,
    pub submitted_at: u64,
    pub expiration: u64,
    pub executed: bool,
    pub votes: Vec<Address>,
}

/// Lifecycle state derived from a proposal, the clock and the current quorum.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProposalStatus {
    /// Voting window still open.
    Open = 0,
    /// Window closed, quorum met, not yet executed.
    Passed = 1,
    Executed = 2,
    /// Window closed without reaching quorum.
    Failed = 3,
}
