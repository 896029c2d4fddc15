//! Storage keys and TTL management for the tally contract.
//!
//! Scalar metadata (initialisation flag, deployer, option count, total
//! votes) lives in instance storage. Per-option names and tallies and the
//! per-voter membership markers live in persistent storage so that their
//! footprint does not grow the instance entry.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

/// Zero-based position of an option in the construction-time sequence.
pub type OptionIndex = u32;

const INITIALIZED: Symbol = symbol_short!("INIT");
const DEPLOYER: Symbol = symbol_short!("DEPLOYER");

// TTL: ~30 days threshold, ~60 days extension (in ledgers).
pub(crate) const TTL_THRESHOLD: u32 = 518_400;
pub(crate) const TTL_EXTEND_TO: u32 = 1_036_800;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    OptionCount,
    TotalVotes,
    OptionName(OptionIndex),
    Tally(OptionIndex),
    Voter(Address),
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub(crate) fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

pub(crate) fn set_deployer(env: &Env, deployer: &Address) {
    env.storage().instance().set(&DEPLOYER, deployer);
}

pub(crate) fn deployer(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DEPLOYER)
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
