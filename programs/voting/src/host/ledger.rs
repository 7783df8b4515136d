use anchor_lang::prelude::*;

use super::{
    processor::{self, VotingInstruction},
    store::{AccountStore, MemoryStore},
};
use crate::state::{Candidate, Poll};

/// An account store paired with the clock instructions execute against.
///
/// The clock only moves through [`Ledger::warp_to`], so callers of the
/// instruction methods have no way to choose the time a vote is judged at.
#[derive(Debug, Default)]
pub struct Ledger<S = MemoryStore> {
    store: S,
    unix_timestamp: i64,
}

impl Ledger<MemoryStore> {
    pub fn new(unix_timestamp: i64) -> Self {
        Self::with_store(MemoryStore::new(), unix_timestamp)
    }
}

impl<S: AccountStore> Ledger<S> {
    pub fn with_store(store: S, unix_timestamp: i64) -> Self {
        Self {
            store,
            unix_timestamp,
        }
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }

    pub fn warp_to(&mut self, unix_timestamp: i64) {
        self.unix_timestamp = unix_timestamp;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn process(&mut self, instruction: VotingInstruction) -> Result<()> {
        processor::process_instruction(&mut self.store, self.unix_timestamp, instruction)
    }

    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        description: impl Into<String>,
        poll_start: i64,
        poll_end: i64,
    ) -> Result<Pubkey> {
        processor::process_initialize_poll(
            &mut self.store,
            poll_id,
            description.into(),
            poll_start,
            poll_end,
        )
    }

    pub fn initialize_candidate(
        &mut self,
        candidate_name: impl Into<String>,
        poll_id: u64,
    ) -> Result<Pubkey> {
        processor::process_initialize_candidate(&mut self.store, candidate_name.into(), poll_id)
    }

    pub fn vote(&mut self, candidate_name: &str, poll_id: u64) -> Result<u64> {
        processor::process_vote(&mut self.store, self.unix_timestamp, candidate_name, poll_id)
    }

    pub fn fetch_poll(&self, poll_id: u64) -> Result<Poll> {
        processor::load_poll(&self.store, poll_id)
    }

    pub fn fetch_candidate(&self, poll_id: u64, candidate_name: &str) -> Result<Candidate> {
        processor::load_candidate(&self.store, poll_id, candidate_name).map(|(_, c)| c)
    }
}
