use soroban_sdk::{contract, contractimpl, log, Address, Bytes, Env, String, Symbol, Val, Vec};

use crate::config;
use crate::dispatch;
use crate::errors::MultisigError;
use crate::events;
use crate::roster;
use crate::storage;
use crate::types::{Proposal, ProposalStatus};

#[contract]
pub struct MultisigGovernor;

#[contractimpl]
impl MultisigGovernor {
    /// Sets up the roster and governance parameters. `value_asset` is the
    /// token contract whose balance backs proposal values.
    pub fn initialize(
        env: Env,
        signers: Vec<Address>,
        expiration_timeout: u64,
        min_votes: u32,
        value_asset: Address,
    ) -> Result<(), MultisigError> {
        if storage::is_initialized(&env) {
            return Err(MultisigError::AlreadyInitialized);
        }

        if signers.is_empty() {
            return Err(MultisigError::EmptySignersList);
        }

        let mut roster: Vec<Address> = Vec::new(&env);
        for signer in signers.iter() {
            if roster.contains(&signer) {
                return Err(MultisigError::AlreadySigner);
            }
            roster.push_back(signer.clone());
            storage::set_signer_flag(&env, &signer);
        }

        storage::set_signers(&env, &roster);
        storage::set_expiration_timeout(&env, expiration_timeout);
        storage::set_min_votes(&env, min_votes);
        storage::set_value_asset(&env, &value_asset);
        storage::set_initialized(&env);

        log!(&env, "multisig initialized", roster.len(), expiration_timeout, min_votes);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Proposal lifecycle
    // ------------------------------------------------------------------------

    pub fn submit_proposal(
        env: Env,
        submitter: Address,
        target: Address,
        value: i128,
        func_signature: String,
        call_data: Bytes,
        description: String,
    ) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        submitter.require_auth();

        if !storage::is_signer(&env, &submitter) {
            return Err(MultisigError::NotSigner);
        }

        if value < 0 {
            return Err(MultisigError::InvalidProposal);
        }

        let now = env.ledger().timestamp();
        let id = storage::get_proposal_count(&env);
        let proposal = Proposal {
            id,
            submitter: submitter.clone(),
            target,
            value,
            func_signature,
            call_data,
            description: description.clone(),
            submitted_at: now,
            expiration: now.saturating_add(storage::get_expiration_timeout(&env)),
            executed: false,
            votes: Vec::new(&env),
        };
        storage::push_proposal(&env, &proposal);

        log!(&env, "proposal submitted", id, proposal.expiration);
        events::emit_proposal_added(&env, &submitter, &description, id);
        Ok(id)
    }

    pub fn vote_on_proposal(env: Env, voter: Address, proposal_id: u32) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        voter.require_auth();

        if !storage::is_signer(&env, &voter) {
            return Err(MultisigError::NotSigner);
        }

        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if env.ledger().timestamp() >= proposal.expiration {
            return Err(MultisigError::ProposalExpired);
        }

        if proposal.votes.contains(&voter) {
            return Err(MultisigError::AlreadyVoted);
        }

        proposal.votes.push_back(voter.clone());
        storage::set_proposal(&env, &proposal);

        events::emit_voted(&env, &voter, proposal_id);
        Ok(())
    }

    /// Runs a passed proposal's call once its voting window has closed.
    /// Quorum is checked against the current `min_votes`. If the call fails
    /// the whole invocation is reverted, `executed` included.
    pub fn execute_proposal(env: Env, caller: Address, proposal_id: u32) -> Result<(), MultisigError> {
        storage::require_initialized(&env)?;
        caller.require_auth();

        if !storage::is_signer(&env, &caller) {
            return Err(MultisigError::NotSigner);
        }

        let mut proposal = storage::get_proposal(&env, proposal_id)?;

        if env.ledger().timestamp() < proposal.expiration {
            return Err(MultisigError::VotingNotEnded);
        }

        if proposal.votes.len() < storage::get_min_votes(&env) {
            return Err(MultisigError::ProposalDidNotPass);
        }

        if proposal.executed {
            return Err(MultisigError::AlreadyExecuted);
        }

        // Set before the delegated call runs.
        proposal.executed = true;
        storage::set_proposal(&env, &proposal);

        dispatch::execute_call(&env, &proposal)?;

        log!(&env, "proposal executed", proposal_id);
        events::emit_proposal_executed(&env, proposal_id);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Privileged operations. Only this contract may call them; proposals
    // reach the same logic through the dispatch table in `dispatch`.
    // ------------------------------------------------------------------------

    pub fn add_signer(env: Env, caller: Address, id: Address) -> Result<(), MultisigError> {
        Self::require_self(&env, &caller)?;
        roster::add_signer(&env, &id)
    }

    pub fn remove_signer(env: Env, caller: Address, id: Address) -> Result<(), MultisigError> {
        Self::require_self(&env, &caller)?;
        roster::remove_signer(&env, &id)
    }

    pub fn change_timeout(env: Env, caller: Address, new_timeout: u64) -> Result<(), MultisigError> {
        Self::require_self(&env, &caller)?;
        config::change_timeout(&env, new_timeout);
        Ok(())
    }

    pub fn set_min_votes(env: Env, caller: Address, new_min_votes: u32) -> Result<(), MultisigError> {
        Self::require_self(&env, &caller)?;
        config::set_min_votes(&env, new_min_votes);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn get_signers(env: Env) -> Result<Vec<Address>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_signers(&env))
    }

    pub fn signer_count(env: Env) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_signers(&env).len())
    }

    pub fn is_signer(env: Env, id: Address) -> bool {
        storage::is_signer(&env, &id)
    }

    pub fn find_index_of_signer(env: Env, id: Address) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        roster::find_index_of_signer(&env, &id)
    }

    pub fn expiration_timeout(env: Env) -> Result<u64, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_expiration_timeout(&env))
    }

    pub fn min_votes(env: Env) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_min_votes(&env))
    }

    pub fn value_asset(env: Env) -> Result<Address, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_value_asset(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, MultisigError> {
        storage::require_initialized(&env)?;
        storage::get_proposal(&env, proposal_id)
    }

    pub fn get_proposals(env: Env) -> Result<Vec<Proposal>, MultisigError> {
        storage::require_initialized(&env)?;
        let mut proposals = Vec::new(&env);
        for id in 0..storage::get_proposal_count(&env) {
            proposals.push_back(storage::get_proposal(&env, id)?);
        }
        Ok(proposals)
    }

    pub fn get_proposal_count(env: Env) -> Result<u32, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_proposal_count(&env))
    }

    pub fn get_votes(env: Env, proposal_id: u32) -> Result<Vec<Address>, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_proposal(&env, proposal_id)?.votes)
    }

    pub fn has_voted(env: Env, proposal_id: u32, voter: Address) -> Result<bool, MultisigError> {
        storage::require_initialized(&env)?;
        Ok(storage::get_proposal(&env, proposal_id)?.votes.contains(&voter))
    }

    pub fn proposal_status(env: Env, proposal_id: u32) -> Result<ProposalStatus, MultisigError> {
        storage::require_initialized(&env)?;
        let proposal = storage::get_proposal(&env, proposal_id)?;

        let status = if env.ledger().timestamp() < proposal.expiration {
            ProposalStatus::Open
        } else if proposal.executed {
            ProposalStatus::Executed
        } else if proposal.votes.len() >= storage::get_min_votes(&env) {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Failed
        };
        Ok(status)
    }

    /// XDR call data for a proposal invoking `func` with `args` on its target.
    pub fn encode_call(env: Env, func: Symbol, args: Vec<Val>) -> Bytes {
        dispatch::encode_call(&env, &func, &args)
    }

    fn require_self(env: &Env, caller: &Address) -> Result<(), MultisigError> {
        storage::require_initialized(env)?;
        if *caller != env.current_contract_address() {
            return Err(MultisigError::OnlyContract);
        }
        caller.require_auth();
        Ok(())
    }
}
