//! Option registry: the ordered, fixed list of option names and their
//! running tallies.
//!
//! Names are written once by [`store_options`] and never touched again.
//! Tallies only ever move up, one vote at a time, through
//! [`increment_tally`].

use soroban_sdk::{Env, String, Vec};

use crate::storage::{extend_persistent_ttl, DataKey, OptionIndex};
use crate::TallyError;

/// Check a candidate option list without touching storage.
///
/// Fails on an empty list, or on the first empty name.
pub fn validate_options(options: &Vec<String>) -> Result<(), TallyError> {
    if options.is_empty() {
        return Err(TallyError::EmptyOptionList);
    }
    for name in options.iter() {
        if name.len() == 0 {
            return Err(TallyError::EmptyOptionName);
        }
    }
    Ok(())
}

/// Persist every option with a zero tally. Callers validate first.
pub(crate) fn store_options(env: &Env, options: &Vec<String>) {
    for (i, name) in options.iter().enumerate() {
        let index = i as OptionIndex;

        let name_key = DataKey::OptionName(index);
        env.storage().persistent().set(&name_key, &name);
        extend_persistent_ttl(env, &name_key);

        let tally_key = DataKey::Tally(index);
        env.storage().persistent().set(&tally_key, &0u64);
        extend_persistent_ttl(env, &tally_key);
    }
    env.storage()
        .instance()
        .set(&DataKey::OptionCount, &options.len());
}

pub(crate) fn option_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::OptionCount)
        .unwrap_or(0)
}

pub(crate) fn in_range(env: &Env, index: OptionIndex) -> bool {
    index < option_count(env)
}

pub(crate) fn load_name(env: &Env, index: OptionIndex) -> Option<String> {
    if !in_range(env, index) {
        return None;
    }
    env.storage().persistent().get(&DataKey::OptionName(index))
}

pub(crate) fn load_tally(env: &Env, index: OptionIndex) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Tally(index))
        .unwrap_or(0)
}

/// Snapshot of one option as `(name, votes)`.
pub(crate) fn load_option(env: &Env, index: OptionIndex) -> Option<(String, u64)> {
    let name = load_name(env, index)?;
    Some((name, load_tally(env, index)))
}

/// Keep every option's name and tally live for as long as the ballot is
/// in use, including options nobody has voted for yet.
pub(crate) fn extend_ballot_ttl(env: &Env) {
    for index in 0..option_count(env) {
        extend_persistent_ttl(env, &DataKey::OptionName(index));
        extend_persistent_ttl(env, &DataKey::Tally(index));
    }
}

/// Row used by the listing views: callers iterate `0..option_count`, so the
/// index is in range and a missing name becomes `""`.
pub(crate) fn load_option_row(env: &Env, index: OptionIndex) -> (String, u64) {
    let name = env
        .storage()
        .persistent()
        .get(&DataKey::OptionName(index))
        .unwrap_or_else(|| String::from_str(env, ""));
    (name, load_tally(env, index))
}

pub(crate) fn increment_tally(env: &Env, index: OptionIndex) -> u64 {
    let key = DataKey::Tally(index);
    let votes = load_tally(env, index).saturating_add(1);
    env.storage().persistent().set(&key, &votes);
    extend_persistent_ttl(env, &key);
    votes
}
