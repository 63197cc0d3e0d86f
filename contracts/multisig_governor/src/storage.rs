//! Storage helpers. Roster and configuration live in instance storage,
//! proposals in persistent storage keyed by their log index.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::{DataKey, Proposal};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if !is_initialized(env) {
        return Err(MultisigError::NotInitialized);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Roster
// ----------------------------------------------------------------------------

pub fn get_signers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn set_signers(env: &Env, signers: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Signers, signers);
}

pub fn is_signer(env: &Env, id: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Signer(id.clone()))
        .unwrap_or(false)
}

pub fn set_signer_flag(env: &Env, id: &Address) {
    env.storage().instance().set(&DataKey::Signer(id.clone()), &true);
}

pub fn clear_signer_flag(env: &Env, id: &Address) {
    env.storage().instance().remove(&DataKey::Signer(id.clone()));
}

// ----------------------------------------------------------------------------
// Configuration
// ----------------------------------------------------------------------------

pub fn get_expiration_timeout(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExpirationTimeout)
        .unwrap_or(0)
}

pub fn set_expiration_timeout(env: &Env, timeout: u64) {
    env.storage()
        .instance()
        .set(&DataKey::ExpirationTimeout, &timeout);
}

pub fn get_min_votes(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::MinVotes).unwrap_or(0)
}

pub fn set_min_votes(env: &Env, min_votes: u32) {
    env.storage().instance().set(&DataKey::MinVotes, &min_votes);
}

pub fn get_value_asset(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::ValueAsset)
        .ok_or(MultisigError::NotInitialized)
}

pub fn set_value_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&DataKey::ValueAsset, asset);
}

// ----------------------------------------------------------------------------
// Proposal log
// ----------------------------------------------------------------------------

pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn get_proposal(env: &Env, id: u32) -> Result<Proposal, MultisigError> {
    if id >= get_proposal_count(env) {
        return Err(MultisigError::InvalidProposal);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(id))
        .ok_or(MultisigError::InvalidProposal)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

/// Appends to the log. The proposal's `id` must be the current count.
pub fn push_proposal(env: &Env, proposal: &Proposal) {
    set_proposal(env, proposal);
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &(proposal.id + 1));
}
