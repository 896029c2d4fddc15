#![no_std]

//! # Tally
//!
//! A single-ballot vote tallying contract:
//!
//! - **Fixed options**: the option list is supplied once at initialisation
//!   and never changes afterwards; options are addressed by zero-based index.
//! - **One vote per address**: every authenticated address may vote exactly
//!   once, for exactly one option. There is no way to change or withdraw a vote.
//! - **Open results**: names and running tallies are readable at any time.
//! - **Events**: `("TALLY", "CREATED")` on initialisation and
//!   `("TALLY", "VOTED", voter)` on every accepted vote.
//!
//! Invariant maintained after every invocation:
//! `sum(tally over all options) == number of addresses that have voted`.

pub mod events;
pub mod registry;
pub mod storage;
pub mod voters;

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, log, Address, Env, String, Vec};

pub use events::{CreatedEvent, VotedEvent};
pub use storage::OptionIndex;

/// Basis-point denominator used for result shares.
pub const BPS_DENOMINATOR: u64 = 10_000;

// ── Error codes ───────────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TallyError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    EmptyOptionList = 3,
    EmptyOptionName = 4,
    AlreadyVoted = 5,
    InvalidOption = 6,
}

// ── Public return types ───────────────────────────────────────────────────────

/// One row of the results table returned by `get_results`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionResult {
    pub index: OptionIndex,
    pub name: String,
    pub votes: u64,
    /// Share of all votes cast, in basis points, rounded down.
    pub share_bps: u32,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct TallyContract;

#[contractimpl]
impl TallyContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Commit the option list. Callable once.
    ///
    /// Every name is validated before anything is written, so a rejected
    /// list leaves the contract uninitialised.
    pub fn initialize(
        env: Env,
        deployer: Address,
        options: Vec<String>,
    ) -> Result<CreatedEvent, TallyError> {
        if storage::is_initialized(&env) {
            return Err(TallyError::AlreadyInitialized);
        }
        deployer.require_auth();

        registry::validate_options(&options)?;
        registry::store_options(&env, &options);

        storage::set_deployer(&env, &deployer);
        storage::set_initialized(&env);
        storage::extend_instance_ttl(&env);

        log!(&env, "tally initialized", options.len());

        Ok(events::publish_created(&env, options.len(), &deployer))
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast `voter`'s single vote for `option_index`.
    ///
    /// Checks run in a fixed order: a repeat voter gets `AlreadyVoted` even
    /// when the index is also out of range.
    pub fn vote(
        env: Env,
        voter: Address,
        option_index: OptionIndex,
    ) -> Result<VotedEvent, TallyError> {
        Self::require_initialized(&env)?;
        voter.require_auth();

        if voters::has_voted(&env, &voter) {
            return Err(TallyError::AlreadyVoted);
        }
        let option_name =
            registry::load_name(&env, option_index).ok_or(TallyError::InvalidOption)?;

        let votes = registry::increment_tally(&env, option_index);
        voters::record_voter(&env, &voter);
        registry::extend_ballot_ttl(&env);
        storage::extend_instance_ttl(&env);

        log!(&env, "vote accepted", voter, option_index, votes);

        Ok(events::publish_voted(&env, &voter, option_index, option_name))
    }

    // ── View functions ────────────────────────────────────────────────────────

    pub fn get_options_count(env: Env) -> u32 {
        registry::option_count(&env)
    }

    pub fn get_option(env: Env, option_index: OptionIndex) -> Result<(String, u64), TallyError> {
        registry::load_option(&env, option_index).ok_or(TallyError::InvalidOption)
    }

    /// Names and tallies as two index-aligned vectors, in construction order.
    ///
    /// Both vectors always hold `get_options_count` entries. A missing name
    /// entry reads as the empty string rather than shifting later indices.
    pub fn get_all_options(env: Env) -> (Vec<String>, Vec<u64>) {
        let mut names = Vec::new(&env);
        let mut votes = Vec::new(&env);
        for index in 0..registry::option_count(&env) {
            let (name, count) = registry::load_option_row(&env, index);
            names.push_back(name);
            votes.push_back(count);
        }
        (names, votes)
    }

    pub fn has_voted(env: Env, voter: Address) -> bool {
        voters::has_voted(&env, &voter)
    }

    /// Same answer as `has_voted`; kept for clients that poll by this name.
    pub fn check_if_voted(env: Env, voter: Address) -> bool {
        voters::has_voted(&env, &voter)
    }

    pub fn get_total_votes(env: Env) -> u64 {
        voters::total_votes(&env)
    }

    /// Every option with its tally and share of the total.
    pub fn get_results(env: Env) -> Vec<OptionResult> {
        let total = voters::total_votes(&env);
        let mut results = Vec::new(&env);
        for index in 0..registry::option_count(&env) {
            let (name, votes) = registry::load_option_row(&env, index);
            results.push_back(OptionResult {
                index,
                name,
                votes,
                share_bps: share_bps(votes, total),
            });
        }
        results
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    pub fn get_deployer(env: Env) -> Result<Address, TallyError> {
        storage::deployer(&env).ok_or(TallyError::NotInitialized)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), TallyError> {
        if !storage::is_initialized(env) {
            return Err(TallyError::NotInitialized);
        }
        Ok(())
    }
}

/// `votes / total` in basis points, rounded down. Zero when nobody has voted.
pub fn share_bps(votes: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    let bps = (votes as u128) * (BPS_DENOMINATOR as u128) / (total as u128);
    bps.min(BPS_DENOMINATOR as u128) as u32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
