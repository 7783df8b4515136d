use anchor_lang::prelude::*;

use super::store::AccountStore;
use crate::{
    error::VotingError,
    state::{Candidate, Poll},
};

/// The program's instruction surface, with the same arguments the on-chain
/// entrypoints take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VotingInstruction {
    InitializePoll {
        poll_id: u64,
        description: String,
        poll_start: i64,
        poll_end: i64,
    },
    InitializeCandidate {
        candidate_name: String,
        poll_id: u64,
    },
    Vote {
        candidate_name: String,
        poll_id: u64,
    },
}

/// Routes one instruction to its handler.
///
/// `now` is the environment's clock for this instruction. Every handler
/// validates everything before its single write, so an `Err` means the
/// store was not touched.
pub fn process_instruction<S: AccountStore>(
    store: &mut S,
    now: i64,
    instruction: VotingInstruction,
) -> Result<()> {
    match instruction {
        VotingInstruction::InitializePoll {
            poll_id,
            description,
            poll_start,
            poll_end,
        } => process_initialize_poll(store, poll_id, description, poll_start, poll_end)
            .map(|_| ()),
        VotingInstruction::InitializeCandidate {
            candidate_name,
            poll_id,
        } => process_initialize_candidate(store, candidate_name, poll_id).map(|_| ()),
        VotingInstruction::Vote {
            candidate_name,
            poll_id,
        } => process_vote(store, now, &candidate_name, poll_id).map(|_| ()),
    }
}

/// Returns the address of the new poll.
pub fn process_initialize_poll<S: AccountStore>(
    store: &mut S,
    poll_id: u64,
    description: String,
    poll_start: i64,
    poll_end: i64,
) -> Result<Pubkey> {
    let (address, bump) = Poll::address(poll_id);
    require!(!store.contains(&address), VotingError::DuplicatePoll);

    let poll = Poll::new(poll_id, description, poll_start, poll_end, bump)?;
    store.create(address, encode(&poll)?)?;

    msg!("Poll {} initialized", poll_id);
    msg!("Voting window: {} to {}", poll_start, poll_end);
    Ok(address)
}

/// Returns the address of the new candidate.
pub fn process_initialize_candidate<S: AccountStore>(
    store: &mut S,
    candidate_name: String,
    poll_id: u64,
) -> Result<Pubkey> {
    let (address, bump) = Candidate::address(poll_id, &candidate_name)?;
    let poll = load_poll(store, poll_id)?;
    require!(!store.contains(&address), VotingError::DuplicateCandidate);

    let candidate = Candidate::new(poll.poll_id, candidate_name, bump)?;
    store.create(address, encode(&candidate)?)?;

    msg!(
        "Candidate {} added to poll {}",
        candidate.candidate_name,
        poll.poll_id
    );
    Ok(address)
}

/// Returns the candidate's tally after this vote.
pub fn process_vote<S: AccountStore>(
    store: &mut S,
    now: i64,
    candidate_name: &str,
    poll_id: u64,
) -> Result<u64> {
    let poll = load_poll(store, poll_id)?;
    let (address, mut candidate) = load_candidate(store, poll_id, candidate_name)?;

    poll.check_voting_window(now)?;
    let candidate_votes = candidate.record_vote()?;
    store.update(&address, encode(&candidate)?)?;

    msg!("Voted for candidate: {}", candidate.candidate_name);
    msg!("Votes: {}", candidate_votes);
    Ok(candidate_votes)
}

pub(super) fn load_poll<S: AccountStore>(store: &S, poll_id: u64) -> Result<Poll> {
    let (address, _) = Poll::address(poll_id);
    Poll::load(store.get(&address).unwrap_or_default())
}

pub(super) fn load_candidate<S: AccountStore>(
    store: &S,
    poll_id: u64,
    candidate_name: &str,
) -> Result<(Pubkey, Candidate)> {
    let (address, _) =
        Candidate::address(poll_id, candidate_name).map_err(|_| VotingError::CandidateNotFound)?;
    let candidate = Candidate::load(store.get(&address).unwrap_or_default())?;
    Ok((address, candidate))
}

fn encode<T: AccountSerialize>(record: &T) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    record.try_serialize(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryStore;

    #[test]
    fn records_use_on_chain_layout() {
        let mut store = MemoryStore::new();
        let address =
            process_initialize_poll(&mut store, 3, "Tabs or spaces?".to_string(), 10, 20).unwrap();

        let data = store.get(&address).unwrap();
        assert_eq!(&data[..8], Poll::DISCRIMINATOR);

        let mut raw = data;
        let poll = Poll::try_deserialize(&mut raw).unwrap();
        assert_eq!(poll.poll_id, 3);
        assert_eq!(poll.bump, Poll::address(3).1);
    }

    #[test]
    fn candidate_bytes_are_not_a_poll() {
        let mut store = MemoryStore::new();
        process_initialize_poll(&mut store, 3, String::new(), 10, 20).unwrap();
        let address = process_initialize_candidate(&mut store, "Tabs".to_string(), 3).unwrap();

        let mut raw = store.get(&address).unwrap();
        assert!(Poll::try_deserialize(&mut raw).is_err());
    }
}
