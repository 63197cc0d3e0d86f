//! Signer roster. The ordered list and the membership flags are always
//! written together.

use soroban_sdk::{log, Address, Env};

use crate::errors::MultisigError;
use crate::events;
use crate::storage;

pub fn find_index_of_signer(env: &Env, id: &Address) -> Result<u32, MultisigError> {
    let signers = storage::get_signers(env);
    for i in 0..signers.len() {
        if signers.get_unchecked(i) == *id {
            return Ok(i);
        }
    }
    Err(MultisigError::NotFound)
}

pub fn add_signer(env: &Env, id: &Address) -> Result<(), MultisigError> {
    if storage::is_signer(env, id) {
        return Err(MultisigError::AlreadySigner);
    }

    let mut signers = storage::get_signers(env);
    signers.push_back(id.clone());
    storage::set_signers(env, &signers);
    storage::set_signer_flag(env, id);

    log!(env, "signer added", id.clone(), signers.len());
    events::emit_signer_added(env, id);
    Ok(())
}

/// Removes `id` by moving the last roster entry into its slot and
/// shrinking the list by one. Other entries keep their indices.
pub fn remove_signer(env: &Env, id: &Address) -> Result<(), MultisigError> {
    if !storage::is_signer(env, id) {
        return Err(MultisigError::NotSigner);
    }

    let index = find_index_of_signer(env, id)?;
    let mut signers = storage::get_signers(env);
    let last = signers.len() - 1;
    if index != last {
        let moved = signers.get_unchecked(last);
        signers.set(index, moved);
    }
    signers.pop_back();

    storage::set_signers(env, &signers);
    storage::clear_signer_flag(env, id);

    log!(env, "signer removed", id.clone(), signers.len());
    events::emit_signer_removed(env, id);
    Ok(())
}
