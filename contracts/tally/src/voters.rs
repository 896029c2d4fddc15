//! Append-only voter set.
//!
//! A voter is recorded at most once and never removed. The total number of
//! recorded voters is kept alongside so it can be read without a scan.

use soroban_sdk::{Address, Env};

use crate::storage::{extend_persistent_ttl, DataKey};

pub(crate) fn has_voted(env: &Env, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voter(voter.clone()))
}

pub(crate) fn total_votes(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVotes)
        .unwrap_or(0)
}

/// Insert `voter` and bump the total. Callers check [`has_voted`] first.
pub(crate) fn record_voter(env: &Env, voter: &Address) {
    let key = DataKey::Voter(voter.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent_ttl(env, &key);

    let total = total_votes(env).saturating_add(1);
    env.storage().instance().set(&DataKey::TotalVotes, &total);
}
