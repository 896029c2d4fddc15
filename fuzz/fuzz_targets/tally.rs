#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String, Vec};
use tally::{TallyContract, TallyContractClient, TallyError};

/// Actions modelling every mutating entry point.
///
/// Voter and option indices are small so repeat votes and boundary indices
/// come up often.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Vote { voter: u8, option: u8 },
    VoteFarOutOfRange { voter: u8, option: u32 },
    Reinitialize { names: u8 },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    /// Ballot as a list of name lengths; a zero length yields an empty name.
    pub name_lengths: std::vec::Vec<u8>,
    pub actions: std::vec::Vec<FuzzAction>,
}

fn ballot(env: &Env, lengths: &[u8]) -> Vec<String> {
    let mut names = Vec::new(env);
    for len in lengths {
        let raw: std::string::String = "x".repeat(*len as usize % 32);
        names.push_back(String::from_str(env, &raw));
    }
    names
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let contract_id = env.register(TallyContract, ());
    let client = TallyContractClient::new(&env, &contract_id);

    let lengths: std::vec::Vec<u8> = input.name_lengths.iter().take(16).copied().collect();
    let names = ballot(&env, &lengths);

    // ── Construction must accept exactly the non-empty lists of non-empty names ──
    let valid = !lengths.is_empty() && lengths.iter().all(|l| *l as usize % 32 != 0);
    match client.try_initialize(&deployer, &names) {
        Ok(_) => assert!(valid, "INVARIANT VIOLATION: invalid ballot accepted"),
        Err(Ok(e)) => {
            assert!(!valid, "INVARIANT VIOLATION: valid ballot rejected: {:?}", e);
            return;
        }
        Err(Err(e)) => panic!("host error during initialize: {:?}", e),
    }

    let n = client.get_options_count();
    assert_eq!(n as usize, lengths.len());

    let voters: std::vec::Vec<Address> = (0..8).map(|_| Address::generate(&env)).collect();
    let mut voted = [false; 8];
    let mut expected = std::vec![0u64; n as usize];

    for action in input.actions.into_iter().take(64) {
        match action {
            FuzzAction::Vote { voter, option } => {
                let slot = voter as usize % voters.len();
                let index = option as u32 % (n + 2);
                let result = client.try_vote(&voters[slot], &index);
                if voted[slot] {
                    assert_eq!(result, Err(Ok(TallyError::AlreadyVoted)));
                } else if index >= n {
                    assert_eq!(result, Err(Ok(TallyError::InvalidOption)));
                } else {
                    assert!(result.is_ok(), "INVARIANT VIOLATION: valid vote rejected");
                    voted[slot] = true;
                    expected[index as usize] += 1;
                }
            }
            FuzzAction::VoteFarOutOfRange { voter, option } => {
                let slot = voter as usize % voters.len();
                let index = n.saturating_add(option);
                if !voted[slot] {
                    let result = client.try_vote(&voters[slot], &index);
                    assert_eq!(result, Err(Ok(TallyError::InvalidOption)));
                }
            }
            FuzzAction::Reinitialize { names } => {
                let list = ballot(&env, &std::vec![1u8; names as usize % 4]);
                let result = client.try_initialize(&deployer, &list);
                assert_eq!(result, Err(Ok(TallyError::AlreadyInitialized)));
            }
        }

        // ── Post-action invariant checks ──
        let (_, votes) = client.get_all_options();
        let actual: std::vec::Vec<u64> = votes.iter().collect();
        assert_eq!(actual, expected, "INVARIANT VIOLATION: tallies diverged from model");

        let sum: u64 = actual.iter().sum();
        let voter_count = voted.iter().filter(|v| **v).count() as u64;
        assert_eq!(sum, client.get_total_votes(), "INVARIANT VIOLATION: sum != total");
        assert_eq!(sum, voter_count, "INVARIANT VIOLATION: sum != voters");
    }
});
