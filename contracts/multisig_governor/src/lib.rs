#![no_std]

mod config;
mod dispatch;
mod errors;
mod events;
mod multisig;
mod roster;
mod storage;
mod types;

pub use dispatch::{decode_call, encode_call};
pub use errors::MultisigError;
pub use events::{ProposalAdded, ProposalExecuted, SignerAdded, SignerRemoved, TimeoutChanged, Voted};
pub use multisig::{MultisigGovernor, MultisigGovernorClient};
pub use types::{Proposal, ProposalStatus};
