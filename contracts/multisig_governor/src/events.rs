use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["multisig", "signer_added"])]
pub struct SignerAdded {
    pub signer: Address,
}

#[contractevent(topics = ["multisig", "signer_removed"])]
pub struct SignerRemoved {
    pub signer: Address,
}

#[contractevent(topics = ["multisig", "timeout_changed"])]
pub struct TimeoutChanged {
    pub timeout: u64,
}

#[contractevent(topics = ["multisig", "proposal_added"])]
pub struct ProposalAdded {
    pub submitter: Address,
    pub description: String,
    pub proposal_id: u32,
}

#[contractevent(topics = ["multisig", "voted"])]
pub struct Voted {
    pub voter: Address,
    pub proposal_id: u32,
}

#[contractevent(topics = ["multisig", "proposal_executed"])]
pub struct ProposalExecuted {
    pub proposal_id: u32,
}

pub fn emit_signer_added(env: &Env, signer: &Address) {
    SignerAdded {
        signer: signer.clone(),
    }
    .publish(env);
}

pub fn emit_signer_removed(env: &Env, signer: &Address) {
    SignerRemoved {
        signer: signer.clone(),
    }
    .publish(env);
}

pub fn emit_timeout_changed(env: &Env, timeout: u64) {
    TimeoutChanged { timeout }.publish(env);
}

pub fn emit_proposal_added(env: &Env, submitter: &Address, description: &String, proposal_id: u32) {
    ProposalAdded {
        submitter: submitter.clone(),
        description: description.clone(),
        proposal_id,
    }
    .publish(env);
}

pub fn emit_voted(env: &Env, voter: &Address, proposal_id: u32) {
    Voted {
        voter: voter.clone(),
        proposal_id,
    }
    .publish(env);
}

pub fn emit_proposal_executed(env: &Env, proposal_id: u32) {
    ProposalExecuted { proposal_id }.publish(env);
}
