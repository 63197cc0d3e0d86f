use soroban_sdk::{log, Env};

use crate::events;
use crate::storage;

/// Applies to proposals submitted after the change; open proposals keep
/// the expiration they were created with.
pub fn change_timeout(env: &Env, new_timeout: u64) {
    storage::set_expiration_timeout(env, new_timeout);
    log!(env, "expiration timeout changed", new_timeout);
    events::emit_timeout_changed(env, new_timeout);
}

// Not checked against the roster size. A quorum larger than the roster
// can only be lowered by a proposal that itself meets that quorum.
pub fn set_min_votes(env: &Env, new_min_votes: u32) {
    storage::set_min_votes(env, new_min_votes);
    log!(env, "min votes changed", new_min_votes);
}
