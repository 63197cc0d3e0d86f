//! Delegated call execution for passed proposals.
//!
//! Call data is the XDR encoding of `(Symbol, Vec<Val>)`. A proposal that
//! targets this contract is resolved against the privileged operation table
//! below instead of a host call, since Soroban rejects contract re-entry.
//! Any other target receives the proposal's value and then the call.

use soroban_sdk::{
    log, token,
    xdr::{FromXdr, ToXdr},
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};

use crate::config;
use crate::errors::MultisigError;
use crate::roster;
use crate::storage;
use crate::types::Proposal;

pub fn encode_call(env: &Env, func: &Symbol, args: &Vec<Val>) -> Bytes {
    (func.clone(), args.clone()).to_xdr(env)
}

pub fn decode_call(env: &Env, call_data: &Bytes) -> Result<(Symbol, Vec<Val>), MultisigError> {
    <(Symbol, Vec<Val>)>::from_xdr(env, call_data).map_err(|_| MultisigError::ExecutionFailed)
}

pub fn execute_call(env: &Env, proposal: &Proposal) -> Result<(), MultisigError> {
    if proposal.target == env.current_contract_address() {
        return execute_self_call(env, proposal);
    }

    transfer_value(env, proposal)?;

    if proposal.call_data.is_empty() {
        return Ok(());
    }

    let (func, args) = decode_call(env, &proposal.call_data)?;
    match env.try_invoke_contract::<Val, MultisigError>(&proposal.target, &func, args) {
        Ok(Ok(_)) => Ok(()),
        _ => {
            log!(env, "delegated call failed", proposal.id, proposal.target.clone(), func);
            Err(MultisigError::ExecutionFailed)
        }
    }
}

fn execute_self_call(env: &Env, proposal: &Proposal) -> Result<(), MultisigError> {
    if proposal.call_data.is_empty() {
        return Ok(());
    }

    let (func, args) = decode_call(env, &proposal.call_data)?;
    dispatch_privileged(env, &func, &args).map_err(|err| {
        log!(env, "self call failed", proposal.id, func.clone(), err as u32);
        MultisigError::ExecutionFailed
    })
}

fn dispatch_privileged(env: &Env, func: &Symbol, args: &Vec<Val>) -> Result<(), MultisigError> {
    if *func == Symbol::new(env, "add_signer") {
        let id: Address = single_arg(env, args)?;
        roster::add_signer(env, &id)
    } else if *func == Symbol::new(env, "remove_signer") {
        let id: Address = single_arg(env, args)?;
        roster::remove_signer(env, &id)
    } else if *func == Symbol::new(env, "change_timeout") {
        config::change_timeout(env, single_arg(env, args)?);
        Ok(())
    } else if *func == Symbol::new(env, "set_min_votes") {
        config::set_min_votes(env, single_arg(env, args)?);
        Ok(())
    } else {
        Err(MultisigError::ExecutionFailed)
    }
}

fn single_arg<T: TryFromVal<Env, Val>>(env: &Env, args: &Vec<Val>) -> Result<T, MultisigError> {
    if args.len() != 1 {
        return Err(MultisigError::ExecutionFailed);
    }
    T::try_from_val(env, &args.get_unchecked(0)).map_err(|_| MultisigError::ExecutionFailed)
}

fn transfer_value(env: &Env, proposal: &Proposal) -> Result<(), MultisigError> {
    if proposal.value <= 0 {
        return Ok(());
    }

    let asset = storage::get_value_asset(env)?;
    let token_client = token::Client::new(env, &asset);
    let from = env.current_contract_address();

    match token_client.try_transfer(&from, &proposal.target, &proposal.value) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "value transfer failed", proposal.id, proposal.value);
            Err(MultisigError::ExecutionFailed)
        }
    }
}
