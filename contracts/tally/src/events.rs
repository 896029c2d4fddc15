//! Structured event publishing for the tally contract.
//!
//! Both events share the `TALLY` root topic so a client can follow a single
//! contract's stream with one filter. The voter is repeated as a topic on
//! `VOTED` so a wallet can watch for its own vote landing.

#![allow(deprecated)] // events().publish migration to #[contractevent] tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::storage::OptionIndex;

const TALLY: Symbol = symbol_short!("TALLY");
const CREATED: Symbol = symbol_short!("CREATED");
const VOTED: Symbol = symbol_short!("VOTED");

/// Fired once, when the option list is committed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatedEvent {
    pub option_count: u32,
    pub deployer: Address,
}

/// Fired for every accepted vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotedEvent {
    pub voter: Address,
    pub option_index: OptionIndex,
    pub option_name: String,
}

pub fn publish_created(env: &Env, option_count: u32, deployer: &Address) -> CreatedEvent {
    let event = CreatedEvent {
        option_count,
        deployer: deployer.clone(),
    };
    env.events().publish((TALLY, CREATED), event.clone());
    event
}

pub fn publish_voted(
    env: &Env,
    voter: &Address,
    option_index: OptionIndex,
    option_name: String,
) -> VotedEvent {
    let event = VotedEvent {
        voter: voter.clone(),
        option_index,
        option_name,
    };
    env.events()
        .publish((TALLY, VOTED, voter.clone()), event.clone());
    event
}
