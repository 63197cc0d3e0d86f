use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    EmptySignersList = 3,
    NotSigner = 4,
    OnlyContract = 5,
    AlreadySigner = 6,
    NotFound = 7,
    InvalidProposal = 8,
    ProposalExpired = 9,
    VotingNotEnded = 10,
    ProposalDidNotPass = 11,
    AlreadyExecuted = 12,
    ExecutionFailed = 13,
    AlreadyVoted = 14,
}
